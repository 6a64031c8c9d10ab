//! Altimeter update handling

use super::{format, MotionDashboard, SubscriptionState};
use crate::traits::{AltimeterUpdate, LabelId, LabelSink, SensorErrorKind};

/// What an altimeter update did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AltimeterOutcome {
    /// Altitude and pressure written to the labels
    Displayed,
    /// Both labels set to `error`
    Failed(SensorErrorKind),
    /// No active subscription; nothing changed
    Ignored,
}

impl<L: LabelSink> MotionDashboard<L> {
    /// Handle one altimeter update
    ///
    /// Relative altitude and pressure are rounded to the configured number
    /// of decimal places. Failures show `error` on both labels.
    pub fn on_altimeter_update(&mut self, update: AltimeterUpdate) -> AltimeterOutcome {
        if self.altimeter != SubscriptionState::Active {
            return AltimeterOutcome::Ignored;
        }

        match update {
            Ok(reading) => {
                let digits = self.config.decimal_digits;
                self.labels.set_text(
                    LabelId::RelativeAltitude,
                    &format::measurement(LabelId::RelativeAltitude, reading.relative_altitude_m, digits),
                );
                self.labels.set_text(
                    LabelId::Pressure,
                    &format::measurement(LabelId::Pressure, reading.pressure_kpa, digits),
                );
                AltimeterOutcome::Displayed
            }
            Err(error) => {
                for label in LabelId::ALTIMETER {
                    self.labels.set_text(label, &format::error(label));
                }
                AltimeterOutcome::Failed(error.kind())
            }
        }
    }
}
