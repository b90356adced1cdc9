//! Structured time-of-day value edited by the wheels.
use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    clock::{Clock, WallTime},
    config::FormatConfig,
};

/// Indicates whether a 12-hour time is before or after noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayPeriod {
    /// Ante meridiem (before noon).
    #[cfg_attr(feature = "serde", serde(rename = "AM"))]
    Am,
    /// Post meridiem (after noon).
    #[cfg_attr(feature = "serde", serde(rename = "PM"))]
    Pm,
}

impl DayPeriod {
    /// Period of a 24-hour hour of day.
    pub fn from_hour_of_day(hour: u8) -> Self {
        if hour >= 12 { DayPeriod::Pm } else { DayPeriod::Am }
    }

    /// Upper-case token used in time text.
    pub fn as_str(self) -> &'static str {
        match self {
            DayPeriod::Am => "AM",
            DayPeriod::Pm => "PM",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned by [`DayPeriod::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day period `{0}`, expected `AM` or `PM`")]
pub struct ParsePeriodError(pub String);

impl FromStr for DayPeriod {
    type Err = ParsePeriodError;

    /// Accepts `AM`/`PM` in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AM") {
            Ok(DayPeriod::Am)
        } else if s.eq_ignore_ascii_case("PM") {
            Ok(DayPeriod::Pm)
        } else {
            Err(ParsePeriodError(s.to_string()))
        }
    }
}

/// A time of day as shown by a time wheel.
///
/// For a 24-hour configuration `hour` is `0..=23` and `period` is `None`; for
/// a 12-hour configuration `hour` is `1..=12` and `period` is set. Values read
/// from text are taken verbatim, so out-of-range fields can appear; see
/// [`TimeValue::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeValue {
    /// Hour in the configured cycle.
    pub hour: u8,
    /// Minute, `0..=59`.
    pub minute: u8,
    /// Second, `0..=59`. Carried but not shown when seconds are hidden.
    pub second: u8,
    /// AM/PM for the 12-hour cycle.
    pub period: Option<DayPeriod>,
}

impl TimeValue {
    /// Creates a value from its parts.
    pub const fn new(hour: u8, minute: u8, second: u8, period: Option<DayPeriod>) -> Self {
        Self {
            hour,
            minute,
            second,
            period,
        }
    }

    /// Canonical value used when time text cannot be read.
    ///
    /// `12:00:00 AM` for the 12-hour cycle, `00:00:00` otherwise.
    pub fn fallback(config: FormatConfig) -> Self {
        if config.is_12_hour() {
            Self::new(12, 0, 0, Some(DayPeriod::Am))
        } else {
            Self::new(0, 0, 0, None)
        }
    }

    /// Converts a 24-hour clock reading into the configured cycle.
    pub fn from_wall_time(now: WallTime, config: FormatConfig) -> Self {
        if config.is_12_hour() {
            let hour = match now.hour % 12 {
                0 => 12,
                hour => hour,
            };
            Self::new(
                hour,
                now.minute,
                now.second,
                Some(DayPeriod::from_hour_of_day(now.hour)),
            )
        } else {
            Self::new(now.hour, now.minute, now.second, None)
        }
    }

    /// Reads `clock` and converts the reading into the configured cycle.
    pub fn now(clock: &dyn Clock, config: FormatConfig) -> Self {
        Self::from_wall_time(clock.now(), config)
    }

    /// Returns whether every field is inside the range the configuration
    /// allows.
    pub fn is_valid(&self, config: FormatConfig) -> bool {
        let hour_ok = if config.is_12_hour() {
            (1..=12).contains(&self.hour) && self.period.is_some()
        } else {
            self.hour <= 23 && self.period.is_none()
        };
        hour_ok && self.minute <= 59 && self.second <= 59
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HourCycle, TimeFormat};

    const H12: FormatConfig = FormatConfig::new(HourCycle::H12, TimeFormat::HourMinuteSecond);
    const H24: FormatConfig = FormatConfig::new(HourCycle::H24, TimeFormat::HourMinute);

    #[test]
    fn test_period_parsing_ignores_case() {
        assert_eq!("am".parse(), Ok(DayPeriod::Am));
        assert_eq!("Pm".parse(), Ok(DayPeriod::Pm));
        assert!("noon".parse::<DayPeriod>().is_err());
    }

    #[test]
    fn test_fallback_per_cycle() {
        assert_eq!(
            TimeValue::fallback(H12),
            TimeValue::new(12, 0, 0, Some(DayPeriod::Am))
        );
        assert_eq!(TimeValue::fallback(H24), TimeValue::new(0, 0, 0, None));
    }

    #[test]
    fn test_wall_time_to_12_hour() {
        let midnight = TimeValue::from_wall_time(WallTime::new(0, 15, 30), H12);
        assert_eq!(midnight, TimeValue::new(12, 15, 30, Some(DayPeriod::Am)));

        let noon = TimeValue::from_wall_time(WallTime::new(12, 0, 0), H12);
        assert_eq!(noon, TimeValue::new(12, 0, 0, Some(DayPeriod::Pm)));

        let evening = TimeValue::from_wall_time(WallTime::new(21, 45, 1), H12);
        assert_eq!(evening, TimeValue::new(9, 45, 1, Some(DayPeriod::Pm)));
    }

    #[test]
    fn test_wall_time_to_24_hour() {
        let value = TimeValue::from_wall_time(WallTime::new(21, 45, 1), H24);
        assert_eq!(value, TimeValue::new(21, 45, 1, None));
    }

    #[test]
    fn test_validity() {
        assert!(TimeValue::new(23, 59, 59, None).is_valid(H24));
        assert!(!TimeValue::new(24, 0, 0, None).is_valid(H24));
        assert!(!TimeValue::new(0, 0, 0, Some(DayPeriod::Am)).is_valid(H12));
        assert!(!TimeValue::new(12, 0, 0, None).is_valid(H12));
        assert!(!TimeValue::new(99, 99, 0, None).is_valid(H24));
    }
}
