use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{FIRST_MONTH, LAST_MONTH, MIN_DAY};
use crate::normalize::normalize_parts;
use crate::prelude::*;
use crate::table::CalendarTable;
use crate::ConvertError;

/// Calendar system a date string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    /// Gregorian
    #[display(fmt = "AD")]
    Ad,
    /// Bikram Sambat
    #[display(fmt = "BS")]
    Bs,
}

impl FromStr for Calendar {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ad" | "en" => Ok(Self::Ad),
            "bs" | "np" | "ne" => Ok(Self::Bs),
            _ => Err(ConvertError::InvalidFormat(format!("unknown calendar: {s}"))),
        }
    }
}

/// A Bikram Sambat calendar date.
///
/// Values built through [`BsDate::new`] or parsing are checked against a
/// calendar table. Gregorian dates are kept as [`jiff::civil::Date`] so the
/// two systems never share a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct BsDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl BsDate {
    /// Creates a BS date validated against the built-in table.
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the year is not covered and
    /// `ConvertError::InvalidDate` if month or day fall outside the year.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ConvertError> {
        Self::new_in(CalendarTable::bikram_sambat(), year, month, day)
    }

    /// Creates a BS date validated against `table`.
    ///
    /// # Errors
    /// Same as [`BsDate::new`].
    pub fn new_in(table: &CalendarTable, year: u16, month: u8, day: u8) -> Result<Self, ConvertError> {
        if !(FIRST_MONTH..=LAST_MONTH).contains(&month) {
            return Err(ConvertError::invalid_date(Self::unchecked(year, month, day)));
        }
        let max_day = table.month_length(i32::from(year), month)?;
        if day < MIN_DAY || day > max_day {
            return Err(ConvertError::invalid_date(Self::unchecked(year, month, day)));
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date without consulting any table. Callers must hold a
    /// (year, month, day) already known to be in range.
    pub(crate) const fn unchecked(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// (year, month, day) triple
    pub const fn to_parts(&self) -> (u16, u8, u8) {
        (self.year, self.month, self.day)
    }
}

impl TryFrom<(u16, u8, u8)> for BsDate {
    type Error = ConvertError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<BsDate> for (u16, u8, u8) {
    fn from(date: BsDate) -> Self {
        date.to_parts()
    }
}

impl FromStr for BsDate {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = normalize_parts(s, Calendar::Bs)?;
        Self::new(year, month, day)
    }
}

impl Serialize for BsDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BsDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Formats a Gregorian date in the canonical `YYYY-MM-DD` form.
pub(crate) fn ad_string(date: jiff::civil::Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}
