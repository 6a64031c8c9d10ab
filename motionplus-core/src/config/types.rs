//! Configuration type definitions

use chrono::{DateTime, NaiveDateTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::precision::MAX_DIGITS;

/// Decimal places shown for altitude and pressure by default
pub const DEFAULT_DECIMAL_DIGITS: u8 = 2;

/// Most decimal places that fit on a label
pub const MAX_DECIMAL_DIGITS: u8 = 6;

/// Default sensor polling interval
pub const DEFAULT_INTERVAL_MS: u32 = 1000;

/// Fastest allowed sensor polling interval
pub const MIN_INTERVAL_MS: u32 = 100;

/// Slowest allowed sensor polling interval
pub const MAX_INTERVAL_MS: u32 = 60_000;

// Keep the label limit inside what the rounding helper supports
const _: () = assert!(MAX_DECIMAL_DIGITS <= MAX_DIGITS);

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `display.decimal_digits` above [`MAX_DECIMAL_DIGITS`]
    DecimalDigits(u8),
    /// `sampling.pedometer_interval_ms` outside the allowed range
    PedometerInterval(u32),
    /// `sampling.altimeter_interval_ms` outside the allowed range
    AltimeterInterval(u32),
}

/// Label formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Decimal places for relative altitude and pressure
    pub decimal_digits: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimal_digits: DEFAULT_DECIMAL_DIGITS,
        }
    }
}

/// Sensor polling intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplingConfig {
    /// Time between step counter reads
    pub pedometer_interval_ms: u32,
    /// Time between pressure reads
    pub altimeter_interval_ms: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            pedometer_interval_ms: DEFAULT_INTERVAL_MS,
            altimeter_interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

/// Wall clock setup
///
/// The board has no battery-backed clock, so the firmware counts from a
/// configured local time at boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClockConfig {
    /// Local wall-clock time assumed at power-on
    pub start: NaiveDateTime,
}

impl ClockConfig {
    /// Build from seconds since 1970-01-01T00:00:00 (local)
    ///
    /// Out-of-range values fall back to the epoch.
    pub fn from_timestamp(secs: i64) -> Self {
        let start = DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.naive_utc())
            .unwrap_or_default();
        Self { start }
    }

    /// Seconds since 1970-01-01T00:00:00 (local)
    pub fn timestamp(&self) -> i64 {
        self.start.and_utc().timestamp()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ClockConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ClockConfig {{ start: {=i64} }}", self.timestamp());
    }
}

/// Complete watch configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WatchConfig {
    pub display: DisplayConfig,
    pub sampling: SamplingConfig,
    pub clock: ClockConfig,
}

impl WatchConfig {
    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.decimal_digits > MAX_DECIMAL_DIGITS {
            return Err(ConfigError::DecimalDigits(self.display.decimal_digits));
        }

        let interval_ok = |ms: u32| (MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&ms);

        if !interval_ok(self.sampling.pedometer_interval_ms) {
            return Err(ConfigError::PedometerInterval(
                self.sampling.pedometer_interval_ms,
            ));
        }
        if !interval_ok(self.sampling.altimeter_interval_ms) {
            return Err(ConfigError::AltimeterInterval(
                self.sampling.altimeter_interval_ms,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WatchConfig::default();
        assert_eq!(config.display.decimal_digits, 2);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_too_many_digits() {
        let mut config = WatchConfig::default();
        config.display.decimal_digits = 9;
        assert_eq!(config.validate(), Err(ConfigError::DecimalDigits(9)));
    }

    #[test]
    fn test_rejects_interval_bounds() {
        let mut config = WatchConfig::default();
        config.sampling.pedometer_interval_ms = 50;
        assert_eq!(config.validate(), Err(ConfigError::PedometerInterval(50)));

        let mut config = WatchConfig::default();
        config.sampling.altimeter_interval_ms = 120_000;
        assert_eq!(
            config.validate(),
            Err(ConfigError::AltimeterInterval(120_000))
        );
    }

    #[test]
    fn test_clock_timestamp_round_trip() {
        let clock = ClockConfig::from_timestamp(1_792_310_400);
        assert_eq!(clock.timestamp(), 1_792_310_400);
    }

    #[test]
    fn test_clock_out_of_range_falls_back_to_epoch() {
        let clock = ClockConfig::from_timestamp(i64::MAX);
        assert_eq!(clock.timestamp(), 0);
    }
}
