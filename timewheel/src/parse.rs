//! Reading time text into a [`TimeValue`].
//!
//! The accepted grammar depends on the [`FormatConfig`]:
//!
//! ```text
//! time   = hour ":" minute [ ":" second ] [ ws* period ]
//! hour   = 1*2DIGIT
//! minute = 2DIGIT
//! second = 2DIGIT          ; present exactly when seconds are shown
//! period = "AM" / "PM"     ; present exactly in the 12-hour cycle, any case
//! ```
//!
//! Digit groups are taken verbatim without range checks, so `99:99` reads as
//! hour 99, minute 99.
use thiserror::Error;
use tracing::debug;

use crate::{
    clock::Clock,
    config::FormatConfig,
    value::{DayPeriod, TimeValue},
};

/// Reason time text did not match the configured grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimeError {
    /// The text was empty.
    #[error("time text is empty")]
    Empty,
    /// The text ended before the grammar was complete.
    #[error("unexpected end of time text, expected {expected}")]
    UnexpectedEnd {
        /// What the matcher was looking for.
        expected: &'static str,
    },
    /// A character did not fit the grammar.
    #[error("unexpected `{found}` at byte {offset}, expected {expected}")]
    Unexpected {
        /// The offending character.
        found: char,
        /// Byte offset of `found`.
        offset: usize,
        /// What the matcher was looking for.
        expected: &'static str,
    },
}

struct Cursor<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn error(&self, expected: &'static str) -> ParseTimeError {
        match self.peek() {
            Some(found) => ParseTimeError::Unexpected {
                found,
                offset: self.offset,
                expected,
            },
            None => ParseTimeError::UnexpectedEnd { expected },
        }
    }

    fn colon(&mut self) -> Result<(), ParseTimeError> {
        if self.peek() == Some(':') {
            self.offset += 1;
            Ok(())
        } else {
            Err(self.error("`:`"))
        }
    }

    /// Reads between `min` and `max` ASCII digits.
    fn digits(
        &mut self,
        min: usize,
        max: usize,
        expected: &'static str,
    ) -> Result<u8, ParseTimeError> {
        let mut value = 0u8;
        let mut count = 0;
        while count < max {
            match self.peek() {
                Some(c) if c.is_ascii_digit() => {
                    value = value * 10 + (c as u8 - b'0');
                    self.offset += 1;
                    count += 1;
                }
                _ => break,
            }
        }
        if count < min {
            return Err(self.error(expected));
        }
        Ok(value)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.offset += c.len_utf8();
        }
    }

    fn period(&mut self) -> Result<DayPeriod, ParseTimeError> {
        let token = self.rest().get(..2).unwrap_or_default();
        match token.parse() {
            Ok(period) => {
                self.offset += 2;
                Ok(period)
            }
            Err(_) => Err(self.error("`AM` or `PM`")),
        }
    }

    fn finish(&self) -> Result<(), ParseTimeError> {
        match self.peek() {
            None => Ok(()),
            Some(_) => Err(self.error("end of text")),
        }
    }
}

impl TimeValue {
    /// Matches `text` against the grammar implied by `config`.
    ///
    /// Returns the exact reason the text was rejected; [`TimeValue::parse`]
    /// is the total variant used by the editor.
    pub fn parse_strict(text: &str, config: FormatConfig) -> Result<Self, ParseTimeError> {
        if text.is_empty() {
            return Err(ParseTimeError::Empty);
        }
        let mut cursor = Cursor::new(text);
        let hour = cursor.digits(1, 2, "hour digits")?;
        cursor.colon()?;
        let minute = cursor.digits(2, 2, "two minute digits")?;
        let second = if config.show_seconds {
            cursor.colon()?;
            cursor.digits(2, 2, "two second digits")?
        } else {
            0
        };
        let period = if config.is_12_hour() {
            cursor.skip_whitespace();
            Some(cursor.period()?)
        } else {
            None
        };
        cursor.finish()?;
        Ok(Self::new(hour, minute, second, period))
    }

    /// Reads `text` under `config`, never failing.
    ///
    /// Empty text yields the current time from `clock`. Text that does not
    /// match the grammar yields [`TimeValue::fallback`].
    pub fn parse(text: &str, config: FormatConfig, clock: &dyn Clock) -> Self {
        if text.is_empty() {
            return Self::now(clock, config);
        }
        match Self::parse_strict(text, config) {
            Ok(value) => value,
            Err(err) => {
                debug!(%err, text, "unreadable time text, using default");
                Self::fallback(config)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clock::FixedClock,
        config::{HourCycle, TimeFormat},
    };

    const H24: FormatConfig = FormatConfig::new(HourCycle::H24, TimeFormat::HourMinute);
    const H24_SECONDS: FormatConfig =
        FormatConfig::new(HourCycle::H24, TimeFormat::HourMinuteSecond);
    const H12: FormatConfig = FormatConfig::new(HourCycle::H12, TimeFormat::HourMinute);
    const H12_SECONDS: FormatConfig =
        FormatConfig::new(HourCycle::H12, TimeFormat::HourMinuteSecond);

    fn clock() -> FixedClock {
        FixedClock::at(17, 8, 42)
    }

    #[test]
    fn test_parse_24_hour() {
        assert_eq!(
            TimeValue::parse_strict("14:30", H24),
            Ok(TimeValue::new(14, 30, 0, None))
        );
        assert_eq!(
            TimeValue::parse_strict("7:05", H24),
            Ok(TimeValue::new(7, 5, 0, None))
        );
        assert_eq!(
            TimeValue::parse_strict("23:59:58", H24_SECONDS),
            Ok(TimeValue::new(23, 59, 58, None))
        );
    }

    #[test]
    fn test_parse_12_hour() {
        assert_eq!(
            TimeValue::parse_strict("02:15:09 PM", H12_SECONDS),
            Ok(TimeValue::new(2, 15, 9, Some(DayPeriod::Pm)))
        );
        assert_eq!(
            TimeValue::parse_strict("11:00 am", H12),
            Ok(TimeValue::new(11, 0, 0, Some(DayPeriod::Am)))
        );
        assert_eq!(
            TimeValue::parse_strict("9:41pM", H12),
            Ok(TimeValue::new(9, 41, 0, Some(DayPeriod::Pm)))
        );
        assert_eq!(
            TimeValue::parse_strict("12:00 \t AM", H12),
            Ok(TimeValue::new(12, 0, 0, Some(DayPeriod::Am)))
        );
    }

    #[test]
    fn test_groups_follow_config_exactly() {
        // seconds present but not configured
        assert!(TimeValue::parse_strict("14:30:00", H24).is_err());
        // seconds configured but absent
        assert!(TimeValue::parse_strict("14:30", H24_SECONDS).is_err());
        // period in a 24-hour config
        assert!(TimeValue::parse_strict("02:30 PM", H24).is_err());
        // 12-hour config without a period
        assert!(TimeValue::parse_strict("02:30", H12).is_err());
    }

    #[test]
    fn test_rejection_reasons() {
        assert_eq!(
            TimeValue::parse_strict("", H24),
            Err(ParseTimeError::Empty)
        );
        assert_eq!(
            TimeValue::parse_strict("123:45", H24),
            Err(ParseTimeError::Unexpected {
                found: '3',
                offset: 2,
                expected: "`:`",
            })
        );
        assert_eq!(
            TimeValue::parse_strict("14:3", H24),
            Err(ParseTimeError::UnexpectedEnd {
                expected: "two minute digits",
            })
        );
        assert_eq!(
            TimeValue::parse_strict("14:30 ", H24),
            Err(ParseTimeError::Unexpected {
                found: ' ',
                offset: 5,
                expected: "end of text",
            })
        );
        assert_eq!(
            TimeValue::parse_strict("02:30 XM", H12),
            Err(ParseTimeError::Unexpected {
                found: 'X',
                offset: 6,
                expected: "`AM` or `PM`",
            })
        );
    }

    #[test]
    fn test_out_of_range_digits_are_kept() {
        assert_eq!(
            TimeValue::parse_strict("99:99", H24),
            Ok(TimeValue::new(99, 99, 0, None))
        );
    }

    #[test]
    fn test_non_ascii_input_does_not_panic() {
        assert!(TimeValue::parse_strict("１２:３０", H24).is_err());
        assert!(TimeValue::parse_strict("02:30 é", H12).is_err());
        assert!(TimeValue::parse_strict("02:30 Aé", H12).is_err());
    }

    #[test]
    fn test_parse_empty_reads_clock() {
        assert_eq!(
            TimeValue::parse("", H24, &clock()),
            TimeValue::new(17, 8, 42, None)
        );
        assert_eq!(
            TimeValue::parse("", H12, &clock()),
            TimeValue::new(5, 8, 42, Some(DayPeriod::Pm))
        );
    }

    #[test]
    fn test_parse_garbage_uses_fallback_not_clock() {
        assert_eq!(
            TimeValue::parse("garbage", H24, &clock()),
            TimeValue::new(0, 0, 0, None)
        );
        assert_eq!(
            TimeValue::parse("garbage", H12_SECONDS, &clock()),
            TimeValue::new(12, 0, 0, Some(DayPeriod::Am))
        );
        assert_eq!(
            TimeValue::parse("   ", H24, &clock()),
            TimeValue::fallback(H24)
        );
    }
}
