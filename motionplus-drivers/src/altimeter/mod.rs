//! Altimeter implementations

pub mod lps22hb;

pub use lps22hb::Lps22hbAltimeter;

/// Altitude of `pressure_hpa` relative to `reference_hpa`, in meters
///
/// International barometric formula. Positive when the current pressure is
/// below the reference.
pub fn relative_altitude_m(pressure_hpa: f64, reference_hpa: f64) -> f64 {
    44_330.0 * (1.0 - libm::pow(pressure_hpa / reference_hpa, 0.1903))
}
