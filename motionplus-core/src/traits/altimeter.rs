//! Relative altitude source

use super::sensor::SensorError;

/// Permission state for altitude updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Authorization {
    /// The user has not been asked yet
    NotDetermined,
    /// Access blocked by policy
    Restricted,
    /// The user refused access
    Denied,
    /// Access granted
    Authorized,
}

impl Authorization {
    /// Check whether a subscription may be started
    pub fn permits_updates(&self) -> bool {
        !matches!(self, Authorization::Denied | Authorization::Restricted)
    }
}

/// One altimeter sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AltimeterReading {
    /// Altitude change since the subscription started, in meters
    pub relative_altitude_m: f64,
    /// Barometric pressure in kilopascals
    pub pressure_kpa: f64,
}

/// What an altimeter delivers on each update
pub type AltimeterUpdate = Result<AltimeterReading, SensorError>;

/// Subscription control for a barometric altimeter
#[cfg_attr(test, mockall::automock)]
pub trait AltimeterSource {
    /// Check whether relative altitude is supported on this device
    fn is_available(&self) -> bool;

    /// Current permission state
    fn authorization_status(&self) -> Authorization;

    /// Begin delivering updates; altitude is relative to the first sample
    fn start_updates(&mut self);

    /// Stop delivering updates
    fn stop_updates(&mut self);
}
