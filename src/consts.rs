/// First BS year covered by the built-in calendar table (inclusive)
pub const MIN_BS_YEAR: u16 = 1970;

/// Last BS year covered by the built-in calendar table (inclusive)
pub const MAX_BS_YEAR: u16 = 2099;

/// Months in a BS (and AD) year
pub const MONTHS_IN_YEAR: u8 = 12;

/// First month of the year (Baisakh in BS, January in AD)
pub const FIRST_MONTH: u8 = 1;

/// Last month of the year (Chaitra in BS, December in AD)
pub const LAST_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Shortest and longest BS month lengths found in the table
pub const MIN_MONTH_LENGTH: u8 = 29;
pub const MAX_MONTH_LENGTH: u8 = 32;

/// Default zero-point year for cumulative BS day counting
pub const DEFAULT_EPOCH_YEAR: u16 = 1970;

/// BS side of the reference anchor: 2062-01-01 BS
pub const ANCHOR_BS: (u16, u8, u8) = (2062, 1, 1);

/// AD side of the reference anchor: 2005-04-14 AD (same day as `ANCHOR_BS`)
pub const ANCHOR_AD: jiff::civil::Date = jiff::civil::date(2005, 4, 14);

/// Date component separator in the canonical `YYYY-MM-DD` form
pub const DATE_SEPARATOR: char = '-';

/// Digit counts accepted by the normalizer
pub const COMPACT_DIGITS: usize = 8;
pub const SHORT_DIGITS: usize = 7;

/// Digits in the year field of a normalized date
pub const YEAR_DIGITS: usize = 4;

/// Approximations used only by the human-readable diff
pub const APPROX_DAYS_PER_YEAR: i64 = 365;
pub const APPROX_DAYS_PER_MONTH: i64 = 30;

pub const HOURS_PER_DAY: i64 = 24;
pub const MINUTES_PER_HOUR: i64 = 60;
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Default format template
pub const DEFAULT_TEMPLATE: &str = "Y-m-d";
