use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    DAYS_IN_WEEK, DECEMBER, JANUARY, LAST_DAY_OF_DECEMBER, MIN_DAY, ParseError,
    calendar::{IntoDay, first_of_month, last_of_month, month_start_offset, shift_days, truncate_to_day, week_start},
    prelude::*,
    range::DateRange,
};

/// A quick-select range, computed fresh from "now" every time it is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Preset {
    #[display(fmt = "TODAY")]
    Today,
    /// Sunday through Saturday of the current week
    #[display(fmt = "THIS_WEEK")]
    ThisWeek,
    #[display(fmt = "THIS_MONTH")]
    ThisMonth,
    /// Sunday through Saturday of the week before the current one
    #[display(fmt = "PREV_WEEK")]
    PrevWeek,
    #[display(fmt = "PREV_MONTH")]
    PrevMonth,
    #[display(fmt = "THIS_YEAR")]
    ThisYear,
    /// Sentinel for any range that matches no other preset
    #[display(fmt = "CUSTOM")]
    Custom,
}

/// Presets offered when none are configured, in display order.
pub const DEFAULT_PRESETS: [Preset; 6] = [
    Preset::Today,
    Preset::ThisWeek,
    Preset::ThisMonth,
    Preset::PrevWeek,
    Preset::PrevMonth,
    Preset::ThisYear,
];

impl Preset {
    /// Every preset, `Custom` last.
    pub const ALL: [Self; 7] = [
        Self::Today,
        Self::ThisWeek,
        Self::ThisMonth,
        Self::PrevWeek,
        Self::PrevMonth,
        Self::ThisYear,
        Self::Custom,
    ];

    /// Key used to look up the preset's label in a [`Locale`](crate::Locale).
    pub const fn translate_key(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::ThisWeek => "thisWeek",
            Self::ThisMonth => "thisMonth",
            Self::PrevWeek => "prevWeek",
            Self::PrevMonth => "prevMonth",
            Self::ThisYear => "thisYear",
            Self::Custom => "custom",
        }
    }

    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom)
    }

    /// The range this preset stands for on the day `now` falls on.
    ///
    /// Returns `None` only when the range would leave the representable calendar.
    pub fn range<D: IntoDay>(self, now: D) -> Option<DateRange> {
        let today = truncate_to_day(now);
        match self {
            Self::Today | Self::Custom => Some(DateRange::single(today)),
            Self::ThisWeek => week_from(week_start(today)?),
            Self::PrevWeek => week_from(shift_days(week_start(today)?, -DAYS_IN_WEEK)?),
            Self::ThisMonth => Some(DateRange::ordered(first_of_month(today), last_of_month(today)?)),
            Self::PrevMonth => {
                let first = month_start_offset(today, -1)?;
                Some(DateRange::ordered(first, last_of_month(first)?))
            },
            Self::ThisYear => {
                let first = NaiveDate::from_ymd_opt(today.year(), JANUARY, MIN_DAY)?;
                let last = NaiveDate::from_ymd_opt(today.year(), DECEMBER, LAST_DAY_OF_DECEMBER)?;
                Some(DateRange::ordered(first, last))
            },
        }
    }
}

fn week_from(sunday: NaiveDate) -> Option<DateRange> {
    let saturday = shift_days(sunday, DAYS_IN_WEEK - 1)?;
    Some(DateRange::ordered(sunday, saturday))
}

impl FromStr for Preset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.to_string().eq_ignore_ascii_case(key) || preset.translate_key() == key)
            .ok_or_else(|| ParseError::UnknownPreset(s.to_owned()))
    }
}

/// Finds the first non-custom preset whose range on `now` is exactly
/// `[start, end]`, comparing whole days. Falls back to [`Preset::Custom`].
pub fn match_preset<S: IntoDay, E: IntoDay, N: IntoDay>(
    start: S,
    end: E,
    presets: &[Preset],
    now: N,
) -> Preset {
    let candidate = (truncate_to_day(start), truncate_to_day(end));
    let today = truncate_to_day(now);

    presets
        .iter()
        .copied()
        .filter(|preset| !preset.is_custom())
        .find(|preset| preset.range(today).is_some_and(|range| range.dates() == candidate))
        .unwrap_or(Preset::Custom)
}
