//! Bikram Sambat calendar table.
//!
//! BS month lengths follow no formula, so each supported year carries its
//! twelve month lengths (Baisakh..Chaitra) and the year total. The table is
//! a versioned dataset: extending the supported range means replacing the
//! rows, not the algorithms built on top of them.

use std::ops::RangeInclusive;

use crate::consts::{FIRST_MONTH, MAX_BS_YEAR, MIN_BS_YEAR, MONTHS_IN_YEAR};
use crate::ConvertError;

/// Month lengths of one BS year plus the year total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthLengths {
    days:  [u8; MONTHS_IN_YEAR as usize],
    total: u16,
}

impl MonthLengths {
    pub const fn new(days: [u8; MONTHS_IN_YEAR as usize], total: u16) -> Self {
        Self { days, total }
    }

    /// Lengths of months 1..=12, in order
    pub const fn days(&self) -> &[u8; MONTHS_IN_YEAR as usize] {
        &self.days
    }

    /// Recorded number of days in the year
    pub const fn total(&self) -> u16 {
        self.total
    }

    /// Length of a 1-indexed month, `None` outside 1..=12
    pub fn month(&self, month: u8) -> Option<u8> {
        let index = usize::from(month.checked_sub(FIRST_MONTH)?);
        self.days.get(index).copied()
    }
}

/// Immutable mapping from a contiguous range of BS years to their month lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarTable {
    first_year: u16,
    years:      &'static [MonthLengths],
}

impl CalendarTable {
    /// Builds a table whose first row describes `first_year`.
    ///
    /// Rows that would describe a year past `u16::MAX` stay unreachable
    /// through [`CalendarTable::last_year`], which saturates.
    pub const fn new(first_year: u16, years: &'static [MonthLengths]) -> Self {
        Self { first_year, years }
    }

    /// The built-in dataset, covering BS 1970..=2099.
    pub fn bikram_sambat() -> &'static Self {
        &BIKRAM_SAMBAT
    }

    pub const fn first_year(&self) -> u16 {
        self.first_year
    }

    /// Last covered year, saturating at `u16::MAX`. Equals `first_year - 1`
    /// for an empty table.
    pub const fn last_year(&self) -> u16 {
        if self.years.is_empty() {
            return self.first_year.saturating_sub(1);
        }
        let last = self.first_year as usize + (self.years.len() - 1);
        if last > u16::MAX as usize { u16::MAX } else { last as u16 }
    }

    pub const fn years(&self) -> RangeInclusive<u16> {
        self.first_year()..=self.last_year()
    }

    pub fn has_year(&self, year: i32) -> bool {
        self.index(year).is_some()
    }

    /// Row for `year`.
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the year is not in the table.
    pub fn year(&self, year: i32) -> Result<&MonthLengths, ConvertError> {
        self.index(year)
            .map(|i| &self.years[i])
            .ok_or_else(|| ConvertError::out_of_range(year))
    }

    /// Number of days in a 1-indexed month of `year`.
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the year is not in the table and
    /// `ConvertError::InvalidDate` if the month is outside 1..=12.
    pub fn month_length(&self, year: i32, month: u8) -> Result<u8, ConvertError> {
        self.year(year)?
            .month(month)
            .ok_or_else(|| ConvertError::InvalidDate(format!("BS month {month} of year {year}")))
    }

    /// Total days in `year`.
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the year is not in the table.
    pub fn year_total(&self, year: i32) -> Result<u16, ConvertError> {
        Ok(self.year(year)?.total())
    }

    fn index(&self, year: i32) -> Option<usize> {
        let offset = usize::try_from(year.checked_sub(i32::from(self.first_year))?).ok()?;
        (offset < self.years.len() && year <= i32::from(self.last_year())).then_some(offset)
    }
}

const fn year(days: [u8; MONTHS_IN_YEAR as usize], total: u16) -> MonthLengths {
    MonthLengths::new(days, total)
}

static BIKRAM_SAMBAT: CalendarTable = CalendarTable::new(MIN_BS_YEAR, &BS_YEARS);

static BS_YEARS: [MonthLengths; (MAX_BS_YEAR - MIN_BS_YEAR + 1) as usize] = [
    /* 1970 */ year([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 365),
    /* 1971 */ year([31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 1972 */ year([31, 31, 32, 32, 31, 29, 31, 29, 30, 30, 29, 31], 366),
    /* 1973 */ year([31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 1974 */ year([31, 31, 32, 31, 31, 30, 30, 29, 30, 30, 29, 31], 365),
    /* 1975 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 1976 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 1977 */ year([30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], 365),
    /* 1978 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 1979 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 1980 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 1981 */ year([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], 365),
    /* 1982 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 1983 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 1984 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 1985 */ year([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], 365),
    /* 1986 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 1987 */ year([31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 1988 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 1989 */ year([31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 1990 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 1991 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], 365),
    /* 1992 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 366),
    /* 1993 */ year([31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 1994 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 1995 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], 365),
    /* 1996 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 366),
    /* 1997 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 1998 */ year([31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 1999 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2000 */ year([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 365),
    /* 2001 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2002 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2003 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2004 */ year([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 365),
    /* 2005 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2006 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2007 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2008 */ year([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], 365),
    /* 2009 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2010 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2011 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2012 */ year([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], 365),
    /* 2013 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2014 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2015 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2016 */ year([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], 365),
    /* 2017 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2018 */ year([31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2019 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 366),
    /* 2020 */ year([31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2021 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2022 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], 365),
    /* 2023 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 366),
    /* 2024 */ year([31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2025 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2026 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2027 */ year([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 365),
    /* 2028 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2029 */ year([31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2030 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2031 */ year([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 365),
    /* 2032 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2033 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2034 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2035 */ year([30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], 365),
    /* 2036 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2037 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2038 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2039 */ year([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], 365),
    /* 2040 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2041 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2042 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2043 */ year([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], 365),
    /* 2044 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2045 */ year([31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2046 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2047 */ year([31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2048 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2049 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], 365),
    /* 2050 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 366),
    /* 2051 */ year([31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2052 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2053 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], 365),
    /* 2054 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 366),
    /* 2055 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2056 */ year([31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2057 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2058 */ year([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 365),
    /* 2059 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2060 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2061 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2062 */ year([31, 31, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], 365),
    /* 2063 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2064 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2065 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2066 */ year([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], 365),
    /* 2067 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2068 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2069 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2070 */ year([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], 365),
    /* 2071 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2072 */ year([31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2073 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2074 */ year([31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2075 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2076 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], 365),
    /* 2077 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 366),
    /* 2078 */ year([31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2079 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2080 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], 365),
    /* 2081 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 366),
    /* 2082 */ year([31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2083 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2084 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2085 */ year([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 365),
    /* 2086 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2087 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2088 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2089 */ year([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 365),
    /* 2090 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2091 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2092 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2093 */ year([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], 365),
    /* 2094 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2095 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
    /* 2096 */ year([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366),
    /* 2097 */ year([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], 365),
    /* 2098 */ year([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365),
    /* 2099 */ year([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_MONTH_LENGTH, MIN_MONTH_LENGTH};

    #[test]
    fn test_table_covers_declared_range() {
        let table = CalendarTable::bikram_sambat();
        assert_eq!(table.first_year(), MIN_BS_YEAR);
        assert_eq!(table.last_year(), MAX_BS_YEAR);
        assert_eq!(table.years(), 1970..=2099);
    }

    #[test]
    fn test_every_year_sums_to_its_total() {
        let table = CalendarTable::bikram_sambat();
        for y in table.years() {
            let row = table.year(i32::from(y)).unwrap();
            let sum: u16 = row.days().iter().map(|&d| u16::from(d)).sum();
            assert_eq!(sum, row.total(), "BS {y}: months sum to {sum}, recorded {}", row.total());
            assert!(row.total() == 365 || row.total() == 366, "BS {y} has {} days", row.total());
        }
    }

    #[test]
    fn test_every_month_length_in_bounds() {
        let table = CalendarTable::bikram_sambat();
        for y in table.years() {
            for (i, &len) in table.year(i32::from(y)).unwrap().days().iter().enumerate() {
                assert!(
                    (MIN_MONTH_LENGTH..=MAX_MONTH_LENGTH).contains(&len),
                    "BS {y} month {} has {len} days",
                    i + 1
                );
            }
        }
    }

    #[test]
    fn test_lookups() {
        let table = CalendarTable::bikram_sambat();
        assert_eq!(table.month_length(2080, 12), Ok(30));
        assert_eq!(table.month_length(2081, 12), Ok(31));
        assert_eq!(table.month_length(2062, 7), Ok(29));
        assert_eq!(table.year_total(2081), Ok(366));
        assert_eq!(table.year_total(2082), Ok(365));
    }

    #[test]
    fn test_out_of_range_years() {
        let table = CalendarTable::bikram_sambat();
        assert!(table.has_year(1970));
        assert!(table.has_year(2099));
        assert!(!table.has_year(1969));
        assert!(!table.has_year(2100));
        assert!(!table.has_year(-1));
        assert!(!table.has_year(i32::MIN));
        assert!(!table.has_year(i32::MAX));
        assert_eq!(table.year_total(i32::MIN), Err(ConvertError::OutOfRange { year: i32::MIN }));
        assert_eq!(table.month_length(i32::MAX, 1), Err(ConvertError::OutOfRange { year: i32::MAX }));
        assert_eq!(table.year_total(2100), Err(ConvertError::OutOfRange { year: 2100 }));
        assert_eq!(table.month_length(1969, 1), Err(ConvertError::OutOfRange { year: 1969 }));
    }

    #[test]
    fn test_month_outside_year_is_rejected() {
        let table = CalendarTable::bikram_sambat();
        assert!(matches!(table.month_length(2080, 0), Err(ConvertError::InvalidDate(_))));
        assert!(matches!(table.month_length(2080, 13), Err(ConvertError::InvalidDate(_))));
    }

    #[test]
    fn test_custom_table() {
        static ROWS: [MonthLengths; 1] = [year([31, 31, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], 365)];
        let table = CalendarTable::new(2062, &ROWS);
        assert_eq!(table.years(), 2062..=2062);
        assert_eq!(table.month_length(2062, 4), Ok(32));
        assert!(!table.has_year(2063));
    }

    #[test]
    fn test_table_at_end_of_year_space() {
        static ROWS: [MonthLengths; 3] = [
            year([31, 31, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], 365),
            year([31, 31, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], 365),
            year([31, 31, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], 365),
        ];
        let table = CalendarTable::new(u16::MAX - 1, &ROWS);
        assert_eq!(table.last_year(), u16::MAX);
        assert!(table.has_year(i32::from(u16::MAX)));
        assert!(!table.has_year(i32::from(u16::MAX) + 1));

        let empty = CalendarTable::new(2062, &[]);
        assert_eq!(empty.last_year(), 2061);
        assert!(!empty.has_year(2062));
    }
}
