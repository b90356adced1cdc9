//! Display format options for a time wheel.
//!
//! ## Usage
//!
//! Build a [`FormatConfig`] from the caller-facing `"12h"`/`"24h"` and
//! `"HH:mm"`/`"HH:mm:ss"` options. The configuration is fixed for the
//! lifetime of one editor.
use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error returned when a caller-facing option string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The hour cycle option was neither `12h` nor `24h`.
    #[error("unknown time type `{0}`, expected `12h` or `24h`")]
    HourCycle(String),
    /// The format option was neither `HH:mm` nor `HH:mm:ss`.
    #[error("unknown time format `{0}`, expected `HH:mm` or `HH:mm:ss`")]
    Format(String),
    /// The dimension name was not one of `hour`, `minute`, `second`, `period`.
    #[error("unknown dimension `{0}`")]
    Dimension(String),
}

/// Hour cycle used when displaying and parsing the hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HourCycle {
    /// Hours `1..=12` followed by an AM/PM period.
    #[cfg_attr(feature = "serde", serde(rename = "12h"))]
    H12,
    /// Hours `0..=23` without a period.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "24h"))]
    H24,
}

impl HourCycle {
    /// Number of hour candidates in this cycle.
    pub fn hours(self) -> u8 {
        match self {
            HourCycle::H12 => 12,
            HourCycle::H24 => 24,
        }
    }

    /// Caller-facing name of the cycle.
    pub fn as_str(self) -> &'static str {
        match self {
            HourCycle::H12 => "12h",
            HourCycle::H24 => "24h",
        }
    }
}

impl fmt::Display for HourCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for HourCycle {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "12h" => Ok(HourCycle::H12),
            "24h" => Ok(HourCycle::H24),
            other => Err(OptionError::HourCycle(other.to_string())),
        }
    }
}

/// Text layout of the time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeFormat {
    /// `HH:mm`
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "HH:mm"))]
    HourMinute,
    /// `HH:mm:ss`
    #[cfg_attr(feature = "serde", serde(rename = "HH:mm:ss"))]
    HourMinuteSecond,
}

impl TimeFormat {
    /// Caller-facing pattern of the format.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeFormat::HourMinute => "HH:mm",
            TimeFormat::HourMinuteSecond => "HH:mm:ss",
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TimeFormat {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HH:mm" => Ok(TimeFormat::HourMinute),
            "HH:mm:ss" => Ok(TimeFormat::HourMinuteSecond),
            other => Err(OptionError::Format(other.to_string())),
        }
    }
}

/// Immutable description of how a time value is displayed and parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatConfig {
    /// 12 or 24 hour display.
    pub hour_cycle: HourCycle,
    /// Whether the seconds field is shown and editable.
    pub show_seconds: bool,
}

impl FormatConfig {
    /// Creates a configuration from the caller-facing options.
    pub const fn new(hour_cycle: HourCycle, format: TimeFormat) -> Self {
        Self {
            hour_cycle,
            show_seconds: matches!(format, TimeFormat::HourMinuteSecond),
        }
    }

    /// Returns whether the hour is shown in the 12-hour cycle.
    pub fn is_12_hour(&self) -> bool {
        self.hour_cycle == HourCycle::H12
    }

    /// Returns the caller-facing format option.
    pub fn format(&self) -> TimeFormat {
        if self.show_seconds {
            TimeFormat::HourMinuteSecond
        } else {
            TimeFormat::HourMinute
        }
    }
}
