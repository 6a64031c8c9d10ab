//! Fixed-precision rounding for displayed readings
//!
//! Rounds half away from zero (`libm::round`). Ties are resolved on the
//! binary value after scaling, so `-1.005` rounds to `-1.0`: the scaled
//! value is `-100.49999999999999`, not an exact tie.

/// Largest supported number of decimal digits
///
/// `10^15` is the last power of ten below 2^53, so every scale factor up to
/// here is exact as an `f64`.
pub const MAX_DIGITS: u8 = 15;

/// Round `value` to `digits` decimal places
///
/// Computes `round(value * 10^digits) / 10^digits` with the scale factor
/// built by integer exponentiation. Digits above [`MAX_DIGITS`] are clamped.
/// Non-finite inputs are returned unchanged.
pub fn round_to(value: f64, digits: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let scale = 10_u64.pow(u32::from(digits.min(MAX_DIGITS))) as f64;
    let scaled = value * scale;

    // Beyond this magnitude the scaled value has no fractional bits left
    if !scaled.is_finite() {
        return value;
    }

    libm::round(scaled) / scale
}
