//! Label text formatting
//!
//! Every label reads `"<prefix>: <value>"`.

use core::fmt::{self, Write};

use heapless::String;

use crate::precision::round_to;
use crate::text::Truncating;
use crate::traits::{LabelId, SensorError};

/// Longest label text the dashboard produces
pub const LABEL_TEXT_LEN: usize = 48;

/// Formatted label text
pub type LabelText = String<LABEL_TEXT_LEN>;

/// Value shown before the first update
pub const PLACEHOLDER: &str = "---";

/// Value shown when a capability or field is missing
pub const NOT_AVAILABLE: &str = "n/a";

/// Value shown by the altitude labels when the altimeter fails
pub const ERROR: &str = "error";

fn compose(label: LabelId, value: fmt::Arguments<'_>) -> LabelText {
    let mut text = LabelText::new();
    let _ = write!(Truncating(&mut text), "{}: {}", label.prefix(), value);
    text
}

/// `"<prefix>: ---"`
pub fn placeholder(label: LabelId) -> LabelText {
    compose(label, format_args!("{}", PLACEHOLDER))
}

/// `"<prefix>: n/a"`
pub fn not_available(label: LabelId) -> LabelText {
    compose(label, format_args!("{}", NOT_AVAILABLE))
}

/// `"<prefix>: error"`
pub fn error(label: LabelId) -> LabelText {
    compose(label, format_args!("{}", ERROR))
}

/// `"<prefix>: <error description>"`
pub fn failure(label: LabelId, error: &SensorError) -> LabelText {
    compose(label, format_args!("{}", error))
}

/// Integer count, or `n/a` when the device does not report it
pub fn count(label: LabelId, value: Option<u32>) -> LabelText {
    match value {
        Some(n) => compose(label, format_args!("{}", n)),
        None => not_available(label),
    }
}

/// Real value rounded to `digits` places and printed with exactly that many
pub fn measurement(label: LabelId, value: f64, digits: u8) -> LabelText {
    let mut rounded = round_to(value, digits);
    // Avoid "-0.00" for small negative drift
    if rounded == 0.0 {
        rounded = 0.0;
    }
    compose(label, format_args!("{:.*}", usize::from(digits), rounded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SensorErrorKind;

    #[test]
    fn test_count_present_and_absent() {
        assert_eq!(count(LabelId::FloorsAscended, Some(5)).as_str(), "Floors up: 5");
        assert_eq!(count(LabelId::FloorsDescended, None).as_str(), "Floors down: n/a");
        assert_eq!(
            count(LabelId::Steps, Some(u32::MAX)).as_str(),
            "Steps today: 4294967295"
        );
    }

    #[test]
    fn test_measurement_fixed_digits() {
        assert_eq!(
            measurement(LabelId::RelativeAltitude, 12.3456, 2).as_str(),
            "Rel Alt: 12.35"
        );
        assert_eq!(measurement(LabelId::Pressure, 101.32, 2).as_str(), "Pressure: 101.32");
        assert_eq!(measurement(LabelId::Pressure, 101.3, 2).as_str(), "Pressure: 101.30");
        assert_eq!(measurement(LabelId::RelativeAltitude, -3.75, 0).as_str(), "Rel Alt: -4");
    }

    #[test]
    fn test_measurement_no_negative_zero() {
        assert_eq!(
            measurement(LabelId::RelativeAltitude, -0.001, 2).as_str(),
            "Rel Alt: 0.00"
        );
    }

    #[test]
    fn test_huge_measurement_truncated() {
        let text = measurement(LabelId::Pressure, 1.0e300, 2);
        assert_eq!(text.len(), LABEL_TEXT_LEN);
        assert!(text.starts_with("Pressure: 1000"));
    }

    #[test]
    fn test_failure_uses_error_text() {
        let err = SensorError::with_message(SensorErrorKind::Bus, "no ack");
        assert_eq!(failure(LabelId::Steps, &err).as_str(), "Steps today: no ack");

        let err = SensorError::new(SensorErrorKind::NotReady);
        assert_eq!(
            failure(LabelId::FloorsAscended, &err).as_str(),
            "Floors up: not ready"
        );
    }

    #[test]
    fn test_fixed_texts() {
        assert_eq!(placeholder(LabelId::Pressure).as_str(), "Pressure: ---");
        assert_eq!(not_available(LabelId::RelativeAltitude).as_str(), "Rel Alt: n/a");
        assert_eq!(error(LabelId::Pressure).as_str(), "Pressure: error");
    }
}
