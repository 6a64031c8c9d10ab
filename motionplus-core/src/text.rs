//! Fixed-capacity text helpers
//!
//! Label text lives in `heapless::String`s. Anything that does not fit is
//! cut at the last whole character instead of being dropped.

use core::fmt;

use heapless::String;

/// Append as much of `text` as fits into `dst`
///
/// Returns `true` if all of `text` was appended.
pub fn push_truncated<const N: usize>(dst: &mut String<N>, text: &str) -> bool {
    for ch in text.chars() {
        if dst.push(ch).is_err() {
            return false;
        }
    }
    true
}

/// `fmt::Write` adapter that silently stops at capacity
pub struct Truncating<'a, const N: usize>(pub &'a mut String<N>);

impl<const N: usize> fmt::Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        push_truncated(self.0, s);
        Ok(())
    }
}
