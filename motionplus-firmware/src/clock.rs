//! Local wall clock
//!
//! The board has no RTC, so wall-clock time is the configured start time
//! plus the embassy uptime.

use chrono::{NaiveDateTime, TimeDelta};
use embassy_time::Instant;

#[derive(Clone, Copy)]
pub struct WallClock {
    start: NaiveDateTime,
    boot: Instant,
}

impl WallClock {
    /// Start counting from `start` at the current instant
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            start,
            boot: Instant::now(),
        }
    }

    /// Current local wall-clock time
    pub fn now(&self) -> NaiveDateTime {
        let elapsed = i64::try_from(self.boot.elapsed().as_millis())
            .ok()
            .and_then(TimeDelta::try_milliseconds);

        elapsed
            .and_then(|delta| self.start.checked_add_signed(delta))
            .unwrap_or(NaiveDateTime::MAX)
    }
}
