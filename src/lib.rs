//! Gregorian (AD) ↔ Bikram Sambat (BS) date conversion.
//!
//! BS month lengths vary from year to year and follow no formula, so
//! conversion is driven by a fixed table of month lengths per BS year
//! (1970..=2099 BS) and a single reference day known in both calendars
//! (2062-01-01 BS = 2005-04-14 AD).
//!
//! ```
//! use nepali_date::{Calendar, Converter, Locale};
//!
//! let converter = Converter::default();
//! assert_eq!(converter.bs_to_ad("2082-01-15").unwrap(), "2025-04-28");
//! assert_eq!(converter.ad_to_bs("2025-04-28").unwrap(), "2082-01-15");
//! assert!(converter.is_valid_bs_date("2082-01-15"));
//! assert_eq!(converter.weekday("2082-01-15", Calendar::Bs, Locale::En).unwrap(), "Monday");
//! assert_eq!(converter.format_bs("2082-01-15", "Y-m-d", Locale::Np).unwrap(), "२०८२-०१-१५");
//! ```

mod consts;
mod converter;
mod error;
mod format;
mod locale;
mod normalize;
mod prelude;
mod query;
mod table;
mod types;
mod validate;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use converter::{Converter, ConverterConfig};
pub use error::ConvertError;
pub use locale::{to_nepali_digits, Labels, Locale, AD_MONTHS, ENGLISH, NEPALI};
pub use normalize::normalize;
pub use query::{today_ad, CalendarDiff, DateInfo, DiffUnit};
pub use table::{CalendarTable, MonthLengths};
pub use types::{BsDate, Calendar};
