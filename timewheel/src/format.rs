//! Writing a [`TimeValue`] back to text.
use std::fmt;

use crate::{
    config::FormatConfig,
    value::{DayPeriod, TimeValue},
};

/// [`fmt::Display`] adapter returned by [`TimeValue::display`].
#[derive(Debug, Clone, Copy)]
pub struct FormattedTime {
    value: TimeValue,
    config: FormatConfig,
}

impl fmt::Display for FormattedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let TimeValue {
            hour,
            minute,
            second,
            period,
        } = self.value;
        write!(f, "{hour:02}:{minute:02}")?;
        if self.config.show_seconds {
            write!(f, ":{second:02}")?;
        }
        if self.config.is_12_hour() {
            write!(f, " {}", period.unwrap_or(DayPeriod::Am))?;
        }
        Ok(())
    }
}

impl TimeValue {
    /// Returns a displayable view of the value under `config`.
    pub fn display(&self, config: FormatConfig) -> FormattedTime {
        FormattedTime {
            value: *self,
            config,
        }
    }

    /// Formats the value as `HH:MM`, `HH:MM:SS`, with ` AM`/` PM` appended
    /// in the 12-hour cycle.
    pub fn format(&self, config: FormatConfig) -> String {
        self.display(config).to_string()
    }
}
