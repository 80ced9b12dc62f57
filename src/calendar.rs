use crate::consts::{DECEMBER, JANUARY, LAST_DAY_OF_DECEMBER, MIN_DAY, MS_PER_DAY};
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeZone};

/// A value that falls on a calendar day.
///
/// Implemented for plain dates and for anything carrying a time of day, which
/// is dropped. Every comparison in this crate goes through this conversion so
/// that the time of day never affects range logic.
pub trait IntoDay {
    /// Returns the calendar day this value falls on.
    fn into_day(self) -> NaiveDate;
}

impl IntoDay for NaiveDate {
    #[inline]
    fn into_day(self) -> NaiveDate {
        self
    }
}

impl IntoDay for NaiveDateTime {
    #[inline]
    fn into_day(self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> IntoDay for DateTime<Tz> {
    #[inline]
    fn into_day(self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: IntoDay + Clone> IntoDay for &T {
    #[inline]
    fn into_day(self) -> NaiveDate {
        self.clone().into_day()
    }
}

/// Drops the time of day, keeping only the calendar day.
#[inline]
pub fn truncate_to_day<D: IntoDay>(value: D) -> NaiveDate {
    value.into_day()
}

/// True if `date` is the first day of its month.
pub fn is_first_of_month(date: NaiveDate) -> bool {
    date.day() == MIN_DAY
}

/// True if `date` is the last day of its month.
pub fn is_last_of_month(date: NaiveDate) -> bool {
    date.succ_opt().is_none_or(|next| next.month() != date.month())
}

/// True if `date` is January 1st.
pub fn is_first_of_year(date: NaiveDate) -> bool {
    date.month() == JANUARY && date.day() == MIN_DAY
}

/// True if `date` is December 31st.
pub fn is_last_of_year(date: NaiveDate) -> bool {
    date.month() == DECEMBER && date.day() == LAST_DAY_OF_DECEMBER
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Stays inside the month, so this cannot leave the calendar.
    date - Days::new(u64::from(date.day0()))
}

/// Last day of the month containing `date`: the day before the next month starts.
/// `None` only for the final month of chrono's calendar.
pub fn last_of_month(date: NaiveDate) -> Option<NaiveDate> {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
}

/// First day of the month `offset` months away from the month containing `date`.
/// Rolls over year boundaries in both directions.
pub fn month_start_offset(date: NaiveDate, offset: i32) -> Option<NaiveDate> {
    let start = first_of_month(date);
    let months = Months::new(offset.unsigned_abs());
    if offset >= 0 {
        start.checked_add_months(months)
    } else {
        start.checked_sub_months(months)
    }
}

/// Shifts `date` by a signed number of days.
pub fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let delta = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(delta)
    } else {
        date.checked_sub_days(delta)
    }
}

/// Shifts the year of `date`, keeping month and day.
/// Returns `None` for February 29th landing on a non-leap year.
pub fn shift_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    date.year()
        .checked_add(years)
        .and_then(|year| date.with_year(year))
}

/// Sunday starting the week that contains `date`.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    let back = date.weekday().num_days_from_sunday();
    date.checked_sub_days(Days::new(u64::from(back)))
}

/// Whole days elapsed between two days, regardless of order.
pub fn elapsed_days(a: NaiveDate, b: NaiveDate) -> i64 {
    let millis = b.signed_duration_since(a).num_milliseconds().abs();
    millis / MS_PER_DAY
}
