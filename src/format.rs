//! Display strings for ranges and preset labels.

use std::{collections::BTreeMap, fmt::Write};

use chrono::{
    Datelike, NaiveDate,
    format::{Item, StrftimeItems},
};
use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_DATE_FORMAT, DEFAULT_MONTH_NAMES, DISPLAY_RANGE_SEPARATOR, ISO_DATE_FORMAT,
    calendar::{IntoDay, truncate_to_day},
    granularity::Granularity,
    preset::Preset,
    range::classify,
};

/// Month names, the single-day pattern and preset labels used for display.
///
/// Anything missing falls back to English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    /// Month names, January first
    pub month_names: Vec<String>,

    /// chrono strftime pattern for a single day
    pub date_format: String,

    /// Preset labels keyed by [`Preset::translate_key`]
    pub labels: BTreeMap<String, String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            month_names: DEFAULT_MONTH_NAMES.iter().map(ToString::to_string).collect(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            labels:      Preset::ALL
                .into_iter()
                .map(|preset| (preset.translate_key().to_string(), default_label(preset).to_string()))
                .collect(),
        }
    }
}

impl Locale {
    /// Name of a 1-based month.
    pub fn month_name(&self, month: u32) -> &str {
        let index = month.saturating_sub(1) as usize;
        self.month_names
            .get(index)
            .map(String::as_str)
            .or_else(|| DEFAULT_MONTH_NAMES.get(index).copied())
            .unwrap_or_default()
    }

    /// Label shown for a preset.
    pub fn label(&self, preset: Preset) -> &str {
        self.labels
            .get(preset.translate_key())
            .map_or_else(|| default_label(preset), String::as_str)
    }
}

const fn default_label(preset: Preset) -> &'static str {
    match preset {
        Preset::Today => "Today",
        Preset::ThisWeek => "This Week",
        Preset::ThisMonth => "This Month",
        Preset::PrevWeek => "Previous Week",
        Preset::PrevMonth => "Previous Month",
        Preset::ThisYear => "This Year",
        Preset::Custom => "Custom",
    }
}

/// True if `pattern` parses and renders a calendar day.
/// Time and offset fields such as `%H` or `%z` parse but cannot render a day.
pub fn is_valid_date_format(pattern: &str) -> bool {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let mut out = String::new();
    write!(out, "{}", NaiveDate::MIN.format(pattern)).is_ok()
}

/// Formats one day with the locale's pattern, falling back to `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate, locale: &Locale) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(&locale.date_format)).is_err() {
        return date.format(ISO_DATE_FORMAT).to_string();
    }
    out
}

/// Formats `[start, end]` according to its granularity.
pub fn format_range<S: IntoDay, E: IntoDay>(start: S, end: E, locale: &Locale) -> String {
    let start = truncate_to_day(start);
    let end = truncate_to_day(end);

    match classify(start, end) {
        Granularity::Daily => format_date(start, locale),
        Granularity::Monthly => format!("{} {}", locale.month_name(start.month()), start.year()),
        Granularity::Yearly => start.year().to_string(),
        Granularity::Custom => format!(
            "{}{DISPLAY_RANGE_SEPARATOR}{}",
            format_date(start, locale),
            format_date(end, locale)
        ),
    }
}
