//! Daily motion dashboard
//!
//! Owns the label sink and the current tracking window, and turns sensor
//! updates into label text. The sensor sources are passed in by the caller
//! on every call, so the platform keeps ownership of the drivers and can
//! poll them between updates.
//!
//! Lifecycle:
//! 1. [`MotionDashboard::awake`] writes placeholders and starts whichever
//!    subscriptions the hardware allows.
//! 2. [`MotionDashboard::on_pedometer_update`] and
//!    [`MotionDashboard::on_altimeter_update`] run for every delivered
//!    update, in any interleaving.
//! 3. [`MotionDashboard::shutdown`] stops active subscriptions.

mod altitude;
pub mod format;
mod pedometer;

pub use altitude::AltimeterOutcome;
pub use pedometer::{PedometerOutcome, PedometerPhase};

use chrono::NaiveDateTime;

use crate::config::DisplayConfig;
use crate::traits::{AltimeterSource, LabelId, LabelSink, PedometerSource};
use crate::window::TrackingWindow;

/// State of one sensor subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SubscriptionState {
    /// `awake` has not run yet
    Idle,
    /// Updates are being delivered and displayed
    Active,
    /// The device lacks the capability; labels read `n/a` for good
    Unavailable,
    /// Permission was refused; labels keep their placeholders
    Unauthorized,
    /// Stopped by `shutdown`
    Stopped,
}

/// Subscription states after `awake`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AwakeReport {
    pub pedometer: SubscriptionState,
    pub altimeter: SubscriptionState,
}

/// The daily motion screen
pub struct MotionDashboard<L> {
    labels: L,
    config: DisplayConfig,
    window: Option<TrackingWindow>,
    pedometer: SubscriptionState,
    altimeter: SubscriptionState,
}

impl<L: LabelSink> MotionDashboard<L> {
    /// Create a dashboard writing into `labels`
    pub fn new(labels: L, config: DisplayConfig) -> Self {
        Self {
            labels,
            config,
            window: None,
            pedometer: SubscriptionState::Idle,
            altimeter: SubscriptionState::Idle,
        }
    }

    /// Initialize the screen and start sensor subscriptions
    ///
    /// All labels get placeholder text first. The pedometer, if available,
    /// is started from the beginning of a window anchored at `now`; if not,
    /// its three labels switch to `n/a`. The altimeter is started unless it
    /// is unavailable (`n/a` labels) or not authorized (placeholders stay).
    ///
    /// Calling `awake` again stops active subscriptions and starts over.
    pub fn awake<P, A>(&mut self, pedometer: &mut P, altimeter: &mut A, now: NaiveDateTime) -> AwakeReport
    where
        P: PedometerSource,
        A: AltimeterSource,
    {
        self.shutdown(pedometer, altimeter);

        for label in LabelId::ALL {
            self.labels.set_text(label, &format::placeholder(label));
        }

        self.pedometer = if pedometer.is_available() {
            let window = TrackingWindow::reset(now);
            self.window = Some(window);
            pedometer.start_updates(window.start());
            SubscriptionState::Active
        } else {
            self.window = None;
            for label in LabelId::PEDOMETER {
                self.labels.set_text(label, &format::not_available(label));
            }
            SubscriptionState::Unavailable
        };

        self.altimeter = if !altimeter.is_available() {
            for label in LabelId::ALTIMETER {
                self.labels.set_text(label, &format::not_available(label));
            }
            SubscriptionState::Unavailable
        } else if !altimeter.authorization_status().permits_updates() {
            SubscriptionState::Unauthorized
        } else {
            altimeter.start_updates();
            SubscriptionState::Active
        };

        AwakeReport {
            pedometer: self.pedometer,
            altimeter: self.altimeter,
        }
    }

    /// Stop every active subscription
    ///
    /// Labels keep their last text.
    pub fn shutdown<P, A>(&mut self, pedometer: &mut P, altimeter: &mut A)
    where
        P: PedometerSource,
        A: AltimeterSource,
    {
        if self.pedometer == SubscriptionState::Active {
            pedometer.stop_updates();
            self.pedometer = SubscriptionState::Stopped;
        }
        if self.altimeter == SubscriptionState::Active {
            altimeter.stop_updates();
            self.altimeter = SubscriptionState::Stopped;
        }
    }

    /// Current tracking window, once the pedometer has been started
    pub fn window(&self) -> Option<TrackingWindow> {
        self.window
    }

    /// Pedometer subscription state
    pub fn pedometer_state(&self) -> SubscriptionState {
        self.pedometer
    }

    /// Altimeter subscription state
    pub fn altimeter_state(&self) -> SubscriptionState {
        self.altimeter
    }

    /// The label sink
    pub fn labels(&self) -> &L {
        &self.labels
    }

    /// Mutable access to the label sink
    pub fn labels_mut(&mut self) -> &mut L {
        &mut self.labels
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for the dashboard tests

    use std::string::{String, ToString};
    use std::vec::Vec;

    use chrono::{NaiveDate, NaiveDateTime};

    use crate::traits::{LabelId, LabelSink};

    /// Label sink that keeps the latest text and a write log
    #[derive(Default)]
    pub struct RecordingLabels {
        pub texts: [Option<String>; 5],
        pub writes: Vec<(LabelId, String)>,
    }

    impl RecordingLabels {
        pub fn text(&self, label: LabelId) -> Option<&str> {
            self.texts[label.index()].as_deref()
        }
    }

    impl LabelSink for RecordingLabels {
        fn set_text(&mut self, label: LabelId, text: &str) {
            self.texts[label.index()] = Some(text.to_string());
            self.writes.push((label, text.to_string()));
        }
    }

    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }
}
