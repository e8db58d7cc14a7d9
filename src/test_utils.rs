//! Shared helpers for unit tests.

use jiff::civil::Date;

use crate::{BsDate, Converter, ConverterConfig};

/// A "today" pinned to the anchor's real-world twin: 2025-04-14 AD, 2082-01-01 BS.
pub const FIXED_TODAY: Date = jiff::civil::date(2025, 4, 14);

pub fn converter() -> Converter {
    Converter::default()
}

pub fn converter_with_epoch(epoch_year: u16) -> Converter {
    Converter::new(ConverterConfig { epoch_year }).expect("epoch year should be accepted")
}

pub fn bs(year: u16, month: u8, day: u8) -> BsDate {
    BsDate::new(year, month, day).expect("test BS date should be valid")
}

pub fn ad(year: i16, month: i8, day: i8) -> Date {
    Date::new(year, month, day).expect("test AD date should be valid")
}
