use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    RANGE_SEPARATOR,
    calendar::{
        IntoDay, elapsed_days, is_first_of_month, is_first_of_year, is_last_of_month,
        is_last_of_year, last_of_month, month_start_offset, shift_days, shift_years,
        truncate_to_day,
    },
    granularity::{Direction, Granularity},
    prelude::*,
};

/// An inclusive range of calendar days.
/// The start day must be less than or equal to the end day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: NaiveDate,
    end:   NaiveDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start day is after end day.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// One side of the range is not a valid `YYYY-MM-DD` date.
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

/// Classifies the range `[start, end]`, ignoring time of day.
///
/// Checks run in a fixed order and the first match wins: daily, then monthly,
/// then yearly, otherwise custom.
pub fn classify<S: IntoDay, E: IntoDay>(start: S, end: E) -> Granularity {
    let start = truncate_to_day(start);
    let end = truncate_to_day(end);

    if start == end {
        Granularity::Daily
    } else if is_whole_month(start, end) {
        Granularity::Monthly
    } else if is_whole_year(start, end) {
        Granularity::Yearly
    } else {
        Granularity::Custom
    }
}

fn is_whole_month(start: NaiveDate, end: NaiveDate) -> bool {
    start.year() == end.year()
        && start.month() == end.month()
        && is_first_of_month(start)
        && is_last_of_month(end)
}

fn is_whole_year(start: NaiveDate, end: NaiveDate) -> bool {
    start.year() == end.year() && is_first_of_year(start) && is_last_of_year(end)
}

/// Computes the neighbouring range of the same granularity.
///
/// * daily: the single day before or after `start`
/// * monthly: the whole month before or after
/// * yearly: both endpoints moved by one year
/// * custom: both endpoints moved by the window length in days
///
/// Returns `None` if the result falls outside the representable calendar.
pub fn step_range<S: IntoDay, E: IntoDay>(
    start: S,
    end: E,
    direction: Direction,
) -> Option<(NaiveDate, NaiveDate)> {
    let start = truncate_to_day(start);
    let end = truncate_to_day(end);
    let sign = direction.sign();

    match classify(start, end) {
        Granularity::Daily => {
            let day = shift_days(start, i64::from(sign))?;
            Some((day, day))
        },
        Granularity::Monthly => {
            let first = month_start_offset(start, sign)?;
            // Last day of the month adjacent to end's month.
            let last = last_of_month(month_start_offset(end, sign)?)?;
            Some((first, last))
        },
        Granularity::Yearly => Some((shift_years(start, sign)?, shift_years(end, sign)?)),
        Granularity::Custom => {
            let offset = window_days(start, end) * i64::from(sign);
            Some((shift_days(start, offset)?, shift_days(end, offset)?))
        },
    }
}

/// Window length counting both endpoints.
fn window_days(start: NaiveDate, end: NaiveDate) -> i64 {
    elapsed_days(start, end) + 1
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering one day.
    pub const fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    /// Builds a range from two days given in either order.
    pub fn ordered(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Builds a range from a slice holding exactly two values.
    /// Returns `None` for any other length.
    pub fn from_pair<D: IntoDay + Clone>(values: &[D]) -> Option<Self> {
        match values {
            [start, end] => Some(Self::ordered(truncate_to_day(start), truncate_to_day(end))),
            _ => None,
        }
    }

    /// Returns the start day of the range
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the end day of the range
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns both days as a tuple
    pub const fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    pub fn granularity(&self) -> Granularity {
        classify(self.start, self.end)
    }

    /// Number of days in the range, both endpoints included.
    pub fn interval_days(&self) -> i64 {
        window_days(self.start, self.end)
    }

    /// Checks if the range contains the day a value falls on
    pub fn contains<D: IntoDay>(&self, value: D) -> bool {
        let day = truncate_to_day(value);
        self.start <= day && day <= self.end
    }

    /// The adjacent range of the same granularity in `direction`.
    pub fn step(&self, direction: Direction) -> Option<Self> {
        step_range(self.start, self.end, direction).map(|(start, end)| Self::ordered(start, end))
    }

    pub fn previous(&self) -> Option<Self> {
        self.step(Direction::Backward)
    }

    pub fn next(&self) -> Option<Self> {
        self.step(Direction::Forward)
    }
}

impl From<NaiveDate> for DateRange {
    fn from(day: NaiveDate) -> Self {
        Self::single(day)
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = start_str.trim().parse::<NaiveDate>()?;
                let end = end_str.trim().parse::<NaiveDate>()?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
