//! Menu bar clock
//!
//! Wall-clock time is passed in, never read here, so the presentation layer
//! owns the once-per-second tick.

/// Milliseconds between clock refreshes
pub const CLOCK_TICK_MS: u64 = 1000;

/// Formats the menu bar time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockFace {
    /// Local offset from UTC in minutes (e.g. `-300` for UTC-5)
    pub utc_offset_minutes: i32,
}

impl ClockFace {
    /// Clock for a given UTC offset
    pub const fn with_offset(utc_offset_minutes: i32) -> Self {
        Self { utc_offset_minutes }
    }

    /// `HH:MM:SS` for a Unix timestamp in milliseconds
    pub fn format(&self, unix_ms: u64) -> String {
        let local = (unix_ms / 1000) as i64 + i64::from(self.utc_offset_minutes) * 60;
        let day_seconds = local.rem_euclid(86_400);
        let hours = day_seconds / 3600;
        let minutes = (day_seconds / 60) % 60;
        let seconds = day_seconds % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }

    /// Delay until the next whole second, for scheduling the next redraw
    pub fn next_tick_in(&self, unix_ms: u64) -> u64 {
        CLOCK_TICK_MS - unix_ms % CLOCK_TICK_MS
    }
}
