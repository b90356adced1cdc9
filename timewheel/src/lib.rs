//! Scroll-wheel time-of-day picker core.
//!
//! # Usage
//!
//! A [`TimeWheel`] turns a caller-owned time text into independently
//! scrollable hour, minute, second and AM/PM wheels, keeps a draft while the
//! editing surface is open, and reports every change as formatted text.
//! Rendering is left to the host: it draws [`TimeWheel::wheels`], attaches a
//! [`ScrollSurface`] per wheel and forwards user gestures.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use parking_lot::Mutex;
//! use timewheel::{Candidate, HourCycle, TimeFormat, TimeWheel, TimeWheelArgs};
//!
//! let value = Arc::new(Mutex::new(String::from("14:30")));
//! let sink = Arc::clone(&value);
//! let args = TimeWheelArgs::default()
//!     .hour_cycle(HourCycle::H24)
//!     .format(TimeFormat::HourMinute)
//!     .on_change(move |text| *sink.lock() = text);
//!
//! let mut picker = TimeWheel::new(value.lock().clone(), args);
//! picker.open();
//! picker.select(Candidate::Minute(45));
//! assert_eq!(*value.lock(), "14:45");
//!
//! picker.set_value(value.lock().clone());
//! picker.confirm();
//! assert!(!picker.is_open());
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod callback;
pub mod clock;
pub mod config;
pub mod dimension;
pub mod format;
pub mod parse;
pub mod picker;
pub mod scroll;
pub mod state;
pub mod value;

pub use callback::OnChange;
pub use clock::{Clock, FixedClock, SystemClock, WallTime};
pub use config::{FormatConfig, HourCycle, OptionError, TimeFormat};
pub use dimension::{Candidate, CandidateList, Dimension, Dimensions, candidates};
pub use format::FormattedTime;
pub use parse::ParseTimeError;
pub use picker::{TimeWheel, TimeWheelArgs, Wheel, WheelItem, Wheels};
pub use scroll::{ScrollSurface, SharedScroller, WheelScroller, scroll_offset};
pub use state::TimeWheelState;
pub use value::{DayPeriod, ParsePeriodError, TimeValue};
