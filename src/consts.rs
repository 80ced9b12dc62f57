/// First day of month, used for lower bounds
pub const MIN_DAY: u32 = 1;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Last day of December, used for the upper bound of a year
pub const LAST_DAY_OF_DECEMBER: u32 = 31;

/// Length of a week in days
pub const DAYS_IN_WEEK: i64 = 7;

/// Fixed length of a day in milliseconds, used to count elapsed days
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';

/// Separator between the two dates of a formatted custom range
pub const DISPLAY_RANGE_SEPARATOR: &str = " - ";

/// Default display pattern for a single day (en-US short date, e.g. `3/10/2024`)
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Pattern used when a configured date pattern cannot be rendered
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// English month names, January first
pub const DEFAULT_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
