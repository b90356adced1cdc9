//! Wall-clock readings used by the "now" paths of the editor.
//!
//! ## Usage
//!
//! Editors read the clock when the committed text is empty and when the user
//! asks for the current time. Tests swap in a [`FixedClock`].
use chrono::{Local, Timelike};

/// A time of day in 24-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WallTime {
    /// Hour of day, `0..=23`.
    pub hour: u8,
    /// Minute, `0..=59`.
    pub minute: u8,
    /// Second, `0..=59`.
    pub second: u8,
}

impl WallTime {
    /// Creates a reading from its parts.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

/// Source of the current time of day.
pub trait Clock: Send + Sync {
    /// Returns the current local time of day.
    fn now(&self) -> WallTime;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> WallTime {
        let now = Local::now();
        // chrono keeps leap seconds in the nanosecond field, so all three fit in u8
        WallTime::new(now.hour() as u8, now.minute() as u8, now.second() as u8)
    }
}

/// Clock that always returns the same reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedClock(pub WallTime);

impl FixedClock {
    /// Creates a clock stopped at `hour:minute:second`.
    pub const fn at(hour: u8, minute: u8, second: u8) -> Self {
        Self(WallTime::new(hour, minute, second))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> WallTime {
        self.0
    }
}
