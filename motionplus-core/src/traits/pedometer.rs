//! Step and floor counting source

use chrono::NaiveDateTime;

use super::sensor::SensorError;

/// One pedometer sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PedometerReading {
    /// Steps counted since the subscription's start instant
    pub steps: u32,
    /// Floors climbed, if the device measures them
    pub floors_ascended: Option<u32>,
    /// Floors descended, if the device measures them
    pub floors_descended: Option<u32>,
}

/// What a pedometer delivers on each update
pub type PedometerUpdate = Result<PedometerReading, SensorError>;

/// Subscription control for a step counter
///
/// Updates themselves are produced by the platform (a polling task on the
/// firmware) and handed to the dashboard; this trait only starts and stops
/// the stream.
#[cfg_attr(test, mockall::automock)]
pub trait PedometerSource {
    /// Check whether step counting is supported on this device
    fn is_available(&self) -> bool;

    /// Begin delivering cumulative counts measured from `from`
    fn start_updates(&mut self, from: NaiveDateTime);

    /// Stop delivering updates
    fn stop_updates(&mut self);
}
