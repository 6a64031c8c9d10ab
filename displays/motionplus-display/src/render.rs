//! Screen rendering
//!
//! Copies a [`Screen`] onto any [`DisplayBackend`].

use crate::backend::{DisplayBackend, DisplayError};
use crate::screen::Screen;

/// Draw every row of `screen` onto `backend`
///
/// The backend is cleared first. Rows beyond the backend's height are
/// skipped. Flushing to the hardware is left to the caller.
pub fn render<B: DisplayBackend>(screen: &Screen, backend: &mut B) -> Result<(), DisplayError> {
    if !backend.is_ready() {
        return Err(DisplayError::NotInitialized);
    }

    backend.clear()?;

    let (_, rows) = backend.dimensions();
    for (row, line) in screen.lines().enumerate().take(rows as usize) {
        if !line.is_empty() {
            backend.draw_text(row as u8, 0, line)?;
        }
    }

    Ok(())
}
