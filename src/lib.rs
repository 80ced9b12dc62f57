//! Classify date ranges and step through them.
//!
//! A range of calendar days is either *daily* (one day), *monthly* (one whole
//! month), *yearly* (one whole year) or *custom* (anything else). Stepping a
//! range moves it by one unit of its own granularity, so a month steps to the
//! adjacent month and a five-day window to the adjacent five days.
//!
//! ```
//! use soft_range::{DateRange, Granularity};
//!
//! let feb = "2024-02-01/2024-02-29".parse::<DateRange>()?;
//! assert_eq!(feb.granularity(), Granularity::Monthly);
//! assert_eq!(feb.next().map(|r| r.to_string()), Some("2024-03-01/2024-03-31".to_string()));
//! # Ok::<(), soft_range::RangeError>(())
//! ```
//!
//! Quick-select [`Preset`]s are evaluated against an injected "now", and
//! [`SoftRangePicker`] keeps the state a picker widget needs without
//! rendering anything.

mod calendar;
mod clock;
mod config;
mod consts;
mod format;
mod granularity;
mod picker;
mod prelude;
mod preset;
mod range;

pub use calendar::{IntoDay, truncate_to_day};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, PickerConfig};
pub use consts::*;
pub use format::{Locale, format_date, format_range};
pub use granularity::{Direction, Granularity};
pub use picker::{PresetOption, Selection, SoftRangePicker};
pub use preset::{DEFAULT_PRESETS, Preset, match_preset};
pub use range::{DateRange, RangeError, classify, step_range};

use crate::prelude::*;

/// Error parsing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Unknown preset: {_0}")]
    UnknownPreset(String),
    #[display(fmt = "Unknown granularity: {_0}")]
    UnknownGranularity(String),
}

impl std::error::Error for ParseError {}
