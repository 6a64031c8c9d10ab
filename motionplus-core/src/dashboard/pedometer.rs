//! Pedometer update handling and day rollover

use chrono::NaiveDateTime;

use super::{format, MotionDashboard, SubscriptionState};
use crate::traits::{LabelId, LabelSink, PedometerSource, PedometerUpdate, SensorErrorKind};
use crate::window::TrackingWindow;

/// Where the tracking window stands relative to the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PedometerPhase {
    /// The window still covers the current instant
    Active,
    /// The current instant is at or past the end of the window
    Expired,
}

/// What a pedometer update did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PedometerOutcome {
    /// Counts written to the labels
    Displayed,
    /// Error text written to the labels
    Failed(SensorErrorKind),
    /// Window expired; subscription restarted against this new window
    Rollover(TrackingWindow),
    /// No active subscription; nothing changed
    Ignored,
}

impl<L: LabelSink> MotionDashboard<L> {
    /// Phase of the tracking window at `now`, if the pedometer is running
    pub fn pedometer_phase(&self, now: NaiveDateTime) -> Option<PedometerPhase> {
        match (self.pedometer, self.window) {
            (SubscriptionState::Active, Some(window)) if window.is_expired(now) => {
                Some(PedometerPhase::Expired)
            }
            (SubscriptionState::Active, Some(_)) => Some(PedometerPhase::Active),
            _ => None,
        }
    }

    /// Handle one pedometer update delivered at `now`
    ///
    /// - An error is shown on all three step labels.
    /// - If the window has expired, the subscription on `source` is stopped,
    ///   the window is reset around `now`, and updates restart from the new
    ///   midnight. The reading that triggered this is not shown.
    /// - Otherwise floor and step counts are shown.
    ///
    /// Updates arriving without an active subscription are ignored, so a
    /// pedometer reported unavailable keeps its `n/a` labels.
    pub fn on_pedometer_update<P: PedometerSource>(
        &mut self,
        source: &mut P,
        now: NaiveDateTime,
        update: PedometerUpdate,
    ) -> PedometerOutcome {
        let window = match (self.pedometer, self.window) {
            (SubscriptionState::Active, Some(window)) => window,
            _ => return PedometerOutcome::Ignored,
        };

        match update {
            Err(error) => {
                for label in LabelId::PEDOMETER {
                    self.labels.set_text(label, &format::failure(label, &error));
                }
                PedometerOutcome::Failed(error.kind())
            }
            Ok(_) if window.is_expired(now) => {
                source.stop_updates();
                let next = TrackingWindow::reset(now);
                self.window = Some(next);
                source.start_updates(next.start());
                PedometerOutcome::Rollover(next)
            }
            Ok(reading) => {
                self.labels.set_text(
                    LabelId::FloorsAscended,
                    &format::count(LabelId::FloorsAscended, reading.floors_ascended),
                );
                self.labels.set_text(
                    LabelId::FloorsDescended,
                    &format::count(LabelId::FloorsDescended, reading.floors_descended),
                );
                self.labels.set_text(
                    LabelId::Steps,
                    &format::count(LabelId::Steps, Some(reading.steps)),
                );
                PedometerOutcome::Displayed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{at, RecordingLabels};
    use super::*;
    use crate::config::DisplayConfig;
    use crate::traits::altimeter::MockAltimeterSource;
    use crate::traits::pedometer::MockPedometerSource;
    use crate::traits::{PedometerReading, SensorError};
    use mockall::predicate::eq;
    use mockall::Sequence;

    /// Dashboard with the pedometer started at `now` and the altimeter absent
    fn started(
        pedometer: &mut MockPedometerSource,
        now: NaiveDateTime,
    ) -> MotionDashboard<RecordingLabels> {
        let mut altimeter = MockAltimeterSource::new();
        altimeter.expect_is_available().return_const(false);

        let mut dashboard = MotionDashboard::new(RecordingLabels::default(), DisplayConfig::default());
        dashboard.awake(pedometer, &mut altimeter, now);
        dashboard
    }

    fn available_pedometer() -> MockPedometerSource {
        let mut pedometer = MockPedometerSource::new();
        pedometer.expect_is_available().return_const(true);
        pedometer
    }

    #[test]
    fn test_reading_displayed_while_active() {
        let mut pedometer = available_pedometer();
        pedometer.expect_start_updates().times(1).return_const(());
        pedometer.expect_stop_updates().never();
        let mut dashboard = started(&mut pedometer, at(2026, 10, 18, 8, 0));

        let reading = PedometerReading {
            steps: 100,
            floors_ascended: Some(5),
            floors_descended: None,
        };
        let outcome = dashboard.on_pedometer_update(&mut pedometer, at(2026, 10, 18, 8, 5), Ok(reading));

        assert_eq!(outcome, PedometerOutcome::Displayed);
        let labels = dashboard.labels();
        assert_eq!(labels.text(LabelId::FloorsAscended), Some("Floors up: 5"));
        assert_eq!(labels.text(LabelId::FloorsDescended), Some("Floors down: n/a"));
        assert_eq!(labels.text(LabelId::Steps), Some("Steps today: 100"));
    }

    #[test]
    fn test_error_written_to_all_step_labels() {
        let mut pedometer = available_pedometer();
        pedometer.expect_start_updates().times(1).return_const(());
        let mut dashboard = started(&mut pedometer, at(2026, 10, 18, 8, 0));

        let error = SensorError::with_message(SensorErrorKind::Bus, "no ack");
        let outcome = dashboard.on_pedometer_update(&mut pedometer, at(2026, 10, 18, 8, 1), Err(error));

        assert_eq!(outcome, PedometerOutcome::Failed(SensorErrorKind::Bus));
        let labels = dashboard.labels();
        assert_eq!(labels.text(LabelId::FloorsAscended), Some("Floors up: no ack"));
        assert_eq!(labels.text(LabelId::FloorsDescended), Some("Floors down: no ack"));
        assert_eq!(labels.text(LabelId::Steps), Some("Steps today: no ack"));
    }

    #[test]
    fn test_error_takes_precedence_over_rollover() {
        let mut pedometer = available_pedometer();
        pedometer.expect_start_updates().times(1).return_const(());
        pedometer.expect_stop_updates().never();
        let mut dashboard = started(&mut pedometer, at(2026, 10, 18, 8, 0));

        let outcome = dashboard.on_pedometer_update(
            &mut pedometer,
            at(2026, 10, 19, 0, 5),
            Err(SensorError::new(SensorErrorKind::NotReady)),
        );

        assert_eq!(outcome, PedometerOutcome::Failed(SensorErrorKind::NotReady));
        assert_eq!(dashboard.window().map(|w| w.start()), Some(at(2026, 10, 18, 0, 0)));
    }

    #[test]
    fn test_rollover_restarts_exactly_once() {
        let mut seq = Sequence::new();
        let mut pedometer = available_pedometer();
        pedometer
            .expect_start_updates()
            .with(eq(at(2026, 10, 18, 0, 0)))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        pedometer
            .expect_stop_updates()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        pedometer
            .expect_start_updates()
            .with(eq(at(2026, 10, 19, 0, 0)))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let mut dashboard = started(&mut pedometer, at(2026, 10, 18, 22, 0));
        let before = dashboard.labels().writes.len();

        let now = at(2026, 10, 19, 0, 2);
        assert_eq!(dashboard.pedometer_phase(now), Some(PedometerPhase::Expired));

        let outcome = dashboard.on_pedometer_update(
            &mut pedometer,
            now,
            Ok(PedometerReading {
                steps: 9000,
                ..Default::default()
            }),
        );

        let expected = TrackingWindow::reset(now);
        assert_eq!(outcome, PedometerOutcome::Rollover(expected));
        assert_eq!(dashboard.window(), Some(expected));
        assert_eq!(expected.start(), at(2026, 10, 19, 0, 0));
        assert_eq!(dashboard.pedometer_phase(now), Some(PedometerPhase::Active));
        // The stale reading is not shown
        assert_eq!(dashboard.labels().writes.len(), before);
    }

    #[test]
    fn test_rollover_after_several_days_anchors_on_today() {
        let mut pedometer = available_pedometer();
        pedometer.expect_start_updates().times(2).return_const(());
        pedometer.expect_stop_updates().times(1).return_const(());
        let mut dashboard = started(&mut pedometer, at(2026, 10, 18, 12, 0));

        let now = at(2026, 10, 23, 6, 45);
        let outcome = dashboard.on_pedometer_update(&mut pedometer, now, Ok(PedometerReading::default()));

        assert_eq!(outcome, PedometerOutcome::Rollover(TrackingWindow::reset(now)));
        assert_eq!(dashboard.window().map(|w| w.start()), Some(at(2026, 10, 23, 0, 0)));

        // Next update in the new window is displayed normally
        let outcome = dashboard.on_pedometer_update(
            &mut pedometer,
            at(2026, 10, 23, 6, 46),
            Ok(PedometerReading {
                steps: 12,
                ..Default::default()
            }),
        );
        assert_eq!(outcome, PedometerOutcome::Displayed);
        assert_eq!(dashboard.labels().text(LabelId::Steps), Some("Steps today: 12"));
    }

    #[test]
    fn test_unavailable_pedometer_stays_na() {
        let mut pedometer = MockPedometerSource::new();
        pedometer.expect_is_available().return_const(false);
        pedometer.expect_start_updates().never();
        pedometer.expect_stop_updates().never();
        let mut dashboard = started(&mut pedometer, at(2026, 10, 18, 8, 0));

        let updates = [
            Ok(PedometerReading {
                steps: 40,
                floors_ascended: Some(1),
                floors_descended: Some(2),
            }),
            Err(SensorError::new(SensorErrorKind::Bus)),
            Ok(PedometerReading::default()),
        ];
        for (i, update) in updates.into_iter().enumerate() {
            let now = at(2026, 10, 18 + i as u32, 23, 59);
            let outcome = dashboard.on_pedometer_update(&mut pedometer, now, update);
            assert_eq!(outcome, PedometerOutcome::Ignored);
        }

        let labels = dashboard.labels();
        assert_eq!(labels.text(LabelId::Steps), Some("Steps today: n/a"));
        assert_eq!(labels.text(LabelId::FloorsAscended), Some("Floors up: n/a"));
        assert_eq!(labels.text(LabelId::FloorsDescended), Some("Floors down: n/a"));
        assert_eq!(dashboard.pedometer_phase(at(2026, 10, 30, 0, 0)), None);
    }

    #[test]
    fn test_update_before_awake_ignored() {
        let mut pedometer = MockPedometerSource::new();
        let mut dashboard = MotionDashboard::new(RecordingLabels::default(), DisplayConfig::default());

        let outcome = dashboard.on_pedometer_update(
            &mut pedometer,
            at(2026, 10, 18, 8, 0),
            Ok(PedometerReading::default()),
        );

        assert_eq!(outcome, PedometerOutcome::Ignored);
        assert!(dashboard.labels().writes.is_empty());
    }
}
