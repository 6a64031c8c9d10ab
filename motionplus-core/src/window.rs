//! Daily tracking window
//!
//! The step count on the watch covers one calendar day. A window runs from
//! local midnight to the following midnight; once the wall clock reaches
//! the end of the window, the pedometer subscription is restarted against a
//! fresh one.
//!
//! All instants are naive local wall-clock times, so a window is always
//! exactly 24 hours long.

use chrono::{NaiveDateTime, TimeDelta};

/// One calendar day of step tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TrackingWindow {
    /// Build the window for the calendar day containing `reference`
    ///
    /// `start` is midnight of that day and `end` is exactly 24 hours later.
    /// The last representable day saturates at `NaiveDateTime::MAX`.
    pub fn reset(reference: NaiveDateTime) -> Self {
        // Midnight exists on every date; the fallback is never taken.
        let start = reference.date().and_hms_opt(0, 0, 0).unwrap_or(reference);
        let end = start
            .checked_add_signed(TimeDelta::days(1))
            .unwrap_or(NaiveDateTime::MAX);

        Self { start, end }
    }

    /// Midnight that opens the window
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Midnight that closes the window (exclusive)
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Check whether `now` has reached the end of the window
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        now >= self.end
    }

    /// Check whether `now` falls inside the window
    pub fn contains(&self, now: NaiveDateTime) -> bool {
        now >= self.start && now < self.end
    }

    /// Duration covered by the window
    pub fn length(&self) -> TimeDelta {
        self.end - self.start
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TrackingWindow {
    fn format(&self, f: defmt::Formatter) {
        use chrono::Datelike;

        defmt::write!(
            f,
            "Window[{=i32}-{=u32}-{=u32}]",
            self.start.year(),
            self.start.month(),
            self.start.day()
        );
    }
}
