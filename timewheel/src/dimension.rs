//! Wheel dimensions and their candidate lists.
//!
//! ## Usage
//!
//! Each active dimension of a [`FormatConfig`] is rendered as one wheel. The
//! candidate order defines both the display order and the index used to
//! scroll the selected entry into view.
use std::{fmt, str::FromStr};

use smallvec::SmallVec;

use crate::{
    config::{FormatConfig, HourCycle, OptionError},
    value::{DayPeriod, TimeValue},
};

/// One independently selectable facet of a time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dimension {
    /// Hour wheel.
    Hour,
    /// Minute wheel.
    Minute,
    /// Second wheel, shown with `HH:mm:ss`.
    Second,
    /// AM/PM wheel, shown in the 12-hour cycle.
    Period,
}

/// Active dimensions in display order. At most four.
pub type Dimensions = SmallVec<[Dimension; 4]>;

impl Dimension {
    /// All dimensions in display order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Hour,
        Dimension::Minute,
        Dimension::Second,
        Dimension::Period,
    ];

    /// Returns whether this dimension is shown under `config`.
    pub fn is_active(self, config: FormatConfig) -> bool {
        match self {
            Dimension::Hour | Dimension::Minute => true,
            Dimension::Second => config.show_seconds,
            Dimension::Period => config.is_12_hour(),
        }
    }

    /// Returns the dimensions shown under `config`, in display order.
    pub fn active(config: FormatConfig) -> Dimensions {
        Self::ALL
            .into_iter()
            .filter(|dimension| dimension.is_active(config))
            .collect()
    }

    /// Returns the lowercase name of the dimension.
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Hour => "hour",
            Dimension::Minute => "minute",
            Dimension::Second => "second",
            Dimension::Period => "period",
        }
    }

    /// Returns the ordered candidates of this dimension.
    ///
    /// The 12-hour list starts at `12` so that midnight and noon sit at index 0.
    pub fn candidates(self, config: FormatConfig) -> Vec<Candidate> {
        match self {
            Dimension::Hour => match config.hour_cycle {
                HourCycle::H24 => (0..24).map(Candidate::Hour).collect(),
                HourCycle::H12 => std::iter::once(12)
                    .chain(1..12)
                    .map(Candidate::Hour)
                    .collect(),
            },
            Dimension::Minute => (0..60).map(Candidate::Minute).collect(),
            Dimension::Second => (0..60).map(Candidate::Second).collect(),
            Dimension::Period => vec![
                Candidate::Period(DayPeriod::Am),
                Candidate::Period(DayPeriod::Pm),
            ],
        }
    }

    /// Returns the index of `value`'s field in [`Dimension::candidates`].
    ///
    /// Fields are mapped arithmetically, so an out-of-range field yields an
    /// index past the end of the list.
    pub fn selected_index(self, value: &TimeValue, config: FormatConfig) -> usize {
        match self {
            Dimension::Hour => match config.hour_cycle {
                HourCycle::H24 => value.hour as usize,
                HourCycle::H12 if value.hour == 12 => 0,
                HourCycle::H12 => value.hour as usize,
            },
            Dimension::Minute => value.minute as usize,
            Dimension::Second => value.second as usize,
            Dimension::Period => match value.period.unwrap_or(DayPeriod::Am) {
                DayPeriod::Am => 0,
                DayPeriod::Pm => 1,
            },
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| OptionError::Dimension(s.to_string()))
    }
}

/// A selectable entry of one wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Candidate {
    /// An hour in the configured cycle.
    Hour(u8),
    /// A minute.
    Minute(u8),
    /// A second.
    Second(u8),
    /// AM or PM.
    Period(DayPeriod),
}

impl Candidate {
    /// Returns the dimension this candidate belongs to.
    pub fn dimension(self) -> Dimension {
        match self {
            Candidate::Hour(_) => Dimension::Hour,
            Candidate::Minute(_) => Dimension::Minute,
            Candidate::Second(_) => Dimension::Second,
            Candidate::Period(_) => Dimension::Period,
        }
    }

    /// Builds a candidate of `dimension` from its wheel label, e.g. `"07"` or
    /// `"pm"`.
    pub fn parse(dimension: Dimension, label: &str) -> Option<Self> {
        match dimension {
            Dimension::Hour => label.parse().ok().map(Candidate::Hour),
            Dimension::Minute => label.parse().ok().map(Candidate::Minute),
            Dimension::Second => label.parse().ok().map(Candidate::Second),
            Dimension::Period => label.parse().ok().map(Candidate::Period),
        }
    }
}

/// Zero-padded numbers, `AM`/`PM` for periods.
impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Hour(n) | Candidate::Minute(n) | Candidate::Second(n) => {
                write!(f, "{n:02}")
            }
            Candidate::Period(period) => write!(f, "{period}"),
        }
    }
}

/// Ordered candidates of one dimension and the position of the current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    /// Dimension the list belongs to.
    pub dimension: Dimension,
    /// Candidates in display order.
    pub items: Vec<Candidate>,
    /// Position of the current value in `items`. May be out of bounds for
    /// out-of-range values.
    pub selected_index: usize,
}

impl CandidateList {
    /// Returns the selected candidate when the index is in bounds.
    pub fn selected(&self) -> Option<Candidate> {
        self.items.get(self.selected_index).copied()
    }
}

/// Returns the candidate list of `dimension` for `value`, or `None` when the
/// dimension is not shown under `config`.
pub fn candidates(
    dimension: Dimension,
    value: &TimeValue,
    config: FormatConfig,
) -> Option<CandidateList> {
    dimension.is_active(config).then(|| CandidateList {
        dimension,
        items: dimension.candidates(config),
        selected_index: dimension.selected_index(value, config),
    })
}

impl TimeValue {
    /// Returns a copy with the field of `candidate`'s dimension replaced.
    pub fn with(mut self, candidate: Candidate) -> Self {
        match candidate {
            Candidate::Hour(hour) => self.hour = hour,
            Candidate::Minute(minute) => self.minute = minute,
            Candidate::Second(second) => self.second = second,
            Candidate::Period(period) => self.period = Some(period),
        }
        self
    }
}
