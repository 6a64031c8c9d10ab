//! Sensor failure reporting

use core::fmt;

use heapless::String;

use crate::text::push_truncated;

/// Maximum length of the free-form part of a sensor error
pub const MAX_ERROR_MESSAGE_LEN: usize = 24;

/// Categories of sensor failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorErrorKind {
    /// Bus transaction failed (NACK, arbitration loss, ...)
    Bus,
    /// Device has not produced a sample yet
    NotReady,
    /// Device returned a value outside its physical range
    InvalidData,
    /// Device vanished after it was probed
    Unavailable,
}

impl SensorErrorKind {
    /// Short human-readable name, used when no message is attached
    pub const fn as_str(&self) -> &'static str {
        match self {
            SensorErrorKind::Bus => "bus error",
            SensorErrorKind::NotReady => "not ready",
            SensorErrorKind::InvalidData => "invalid data",
            SensorErrorKind::Unavailable => "unavailable",
        }
    }
}

/// A failure reported by a sensor instead of a reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorError {
    kind: SensorErrorKind,
    message: String<MAX_ERROR_MESSAGE_LEN>,
}

impl SensorError {
    /// Create an error with no extra detail
    pub fn new(kind: SensorErrorKind) -> Self {
        Self {
            kind,
            message: String::new(),
        }
    }

    /// Create an error with a detail message (truncated to fit)
    pub fn with_message(kind: SensorErrorKind, message: &str) -> Self {
        let mut error = Self::new(kind);
        push_truncated(&mut error.message, message);
        error
    }

    /// Failure category
    pub fn kind(&self) -> SensorErrorKind {
        self.kind
    }

    /// Detail message, empty if none was given
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(self.kind.as_str())
        } else {
            f.write_str(self.message.as_str())
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}: {=str}", self.kind, self.message.as_str());
    }
}
