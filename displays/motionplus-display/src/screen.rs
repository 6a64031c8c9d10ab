//! Screen buffer
//!
//! A character buffer with one row per dashboard label.

use heapless::String;
use motionplus_core::text::push_truncated;
use motionplus_core::traits::{LabelId, LabelSink};

/// Number of character rows (one per label)
pub const SCREEN_ROWS: usize = LabelId::ALL.len();

/// Number of character columns on the panel
pub const SCREEN_COLS: usize = 21;

/// Maximum characters per line
pub const LINE_LEN: usize = SCREEN_COLS;

const EMPTY_LINE: String<LINE_LEN> = String::new();

/// Screen buffer for the motion display
///
/// Rows follow [`LabelId::ALL`]: steps, floors up, floors down, relative
/// altitude, pressure. Text wider than the panel is cut at a character
/// boundary.
#[derive(Clone, PartialEq, Eq)]
pub struct Screen {
    /// Current display content
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub const fn new() -> Self {
        Self {
            lines: [EMPTY_LINE; SCREEN_ROWS],
            dirty: true,
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.dirty = true;
    }

    /// Set the content of a specific row
    ///
    /// Rows past the end are ignored. Writing the text a row already holds
    /// does not mark the screen dirty.
    pub fn set_line(&mut self, row: usize, text: &str) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };

        let mut next = String::<LINE_LEN>::new();
        push_truncated(&mut next, text);
        if *line != next {
            *line = next;
            self.dirty = true;
        }
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Get the row showing `label`
    pub fn label(&self, label: LabelId) -> &str {
        self.lines[label.index()].as_str()
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }
}

impl LabelSink for Screen {
    fn set_text(&mut self, label: LabelId, text: &str) {
        self.set_line(label.index(), text);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
