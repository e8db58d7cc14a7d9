//! BS ↔ AD conversion.
//!
//! Both directions are measured from a single reference anchor, a BS date
//! and an AD date known to be the same day. BS → AD counts BS days between
//! the anchor and the target and applies that as a Gregorian offset.
//! AD → BS takes the Gregorian offset and walks the BS table from the anchor.

use jiff::civil::Date;
use jiff::ToSpan;
use serde::{Deserialize, Serialize};

use crate::consts::{ANCHOR_AD, ANCHOR_BS, DEFAULT_EPOCH_YEAR, FIRST_MONTH, LAST_MONTH, MIN_DAY};
use crate::normalize::{gregorian, normalize_parts};
use crate::table::CalendarTable;
use crate::types::ad_string;
use crate::{BsDate, Calendar, ConvertError};

/// Settings fixed when a [`Converter`] is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// BS year day counting starts from. Must be in the table and no later
    /// than the anchor year. Conversion results do not depend on it.
    pub epoch_year: u16,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self { epoch_year: DEFAULT_EPOCH_YEAR }
    }
}

/// Immutable BS ↔ AD converter bound to one calendar table and epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    table:      &'static CalendarTable,
    epoch_year: u16,
    anchor_bs:  BsDate,
    anchor_ad:  Date,
}

impl Default for Converter {
    fn default() -> Self {
        let (year, month, day) = ANCHOR_BS;
        Self {
            table:      CalendarTable::bikram_sambat(),
            epoch_year: DEFAULT_EPOCH_YEAR,
            anchor_bs:  BsDate::unchecked(year, month, day),
            anchor_ad:  ANCHOR_AD,
        }
    }
}

impl Converter {
    /// Builds a converter over the built-in BS table.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidConfig` if the epoch year is not in the
    /// table or comes after the anchor year.
    pub fn new(config: ConverterConfig) -> Result<Self, ConvertError> {
        Self::with_table(config, CalendarTable::bikram_sambat())
    }

    /// Builds a converter over a caller-supplied table.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidConfig` if the table does not contain the
    /// reference anchor, or the epoch year is rejected as in [`Converter::new`].
    pub fn with_table(config: ConverterConfig, table: &'static CalendarTable) -> Result<Self, ConvertError> {
        let (year, month, day) = ANCHOR_BS;
        let anchor_bs = BsDate::new_in(table, year, month, day).map_err(|err| {
            ConvertError::InvalidConfig(format!("calendar table lacks the reference date: {err}"))
        })?;

        let epoch = config.epoch_year;
        if !table.has_year(i32::from(epoch)) {
            return Err(ConvertError::InvalidConfig(format!(
                "epoch year {epoch} is outside the calendar table ({}-{})",
                table.first_year(),
                table.last_year()
            )));
        }
        if epoch > anchor_bs.year() {
            return Err(ConvertError::InvalidConfig(format!(
                "epoch year {epoch} is after the reference year {}",
                anchor_bs.year()
            )));
        }

        log::debug!(
            "converter ready: BS {}-{}, epoch {epoch}, anchor {anchor_bs} = {}",
            table.first_year(),
            table.last_year(),
            ad_string(ANCHOR_AD)
        );
        Ok(Self { table, epoch_year: epoch, anchor_bs, anchor_ad: ANCHOR_AD })
    }

    pub const fn table(&self) -> &'static CalendarTable {
        self.table
    }

    pub const fn epoch_year(&self) -> u16 {
        self.epoch_year
    }

    pub const fn config(&self) -> ConverterConfig {
        ConverterConfig { epoch_year: self.epoch_year }
    }

    /// Days elapsed from the first day of the epoch year to BS `(year, month, day)`.
    ///
    /// Years before the epoch count negatively, so the result is strictly
    /// increasing in `(year, month, day)` order across the whole table.
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if any year between the epoch and
    /// `year` is missing from the table, and `ConvertError::InvalidDate` if
    /// the month is outside 1..=12.
    pub fn total_days_since_epoch(&self, year: u16, month: u8, day: u8) -> Result<i64, ConvertError> {
        if !(FIRST_MONTH..=LAST_MONTH).contains(&month) {
            return Err(ConvertError::invalid_date(BsDate::unchecked(year, month, day)));
        }
        let year = i32::from(year);
        let epoch = i32::from(self.epoch_year);

        let mut days = 0i64;
        for y in epoch..year {
            days += i64::from(self.table.year_total(y)?);
        }
        for y in year..epoch {
            days -= i64::from(self.table.year_total(y)?);
        }

        let row = self.table.year(year)?;
        days += row.days()[..usize::from(month - 1)]
            .iter()
            .map(|&len| i64::from(len))
            .sum::<i64>();

        Ok(days + i64::from(day) - 1)
    }

    /// Converts a loosely formatted BS date string to an AD `YYYY-MM-DD` string.
    ///
    /// # Errors
    /// `InvalidFormat` for a bad digit run, `OutOfRange` for a year outside the
    /// table, `InvalidDate` for a month or day that the year does not have.
    pub fn bs_to_ad(&self, bs_date: &str) -> Result<String, ConvertError> {
        let date = self.parse_bs(bs_date)?;
        Ok(ad_string(self.bs_date_to_ad(date)?))
    }

    /// Converts a BS date to its Gregorian equivalent.
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the date's year is not in this
    /// converter's table.
    pub fn bs_date_to_ad(&self, date: BsDate) -> Result<Date, ConvertError> {
        let target = self.total_days_since_epoch(date.year(), date.month(), date.day())?;
        let (ay, am, ad) = self.anchor_bs.to_parts();
        let delta = target - self.total_days_since_epoch(ay, am, ad)?;
        log::trace!("bs_to_ad {date}: {delta} days from anchor");
        Ok(self.anchor_ad.checked_add(delta.days())?)
    }

    /// Converts a loosely formatted AD date string to a BS `YYYY-MM-DD` string.
    ///
    /// # Errors
    /// `InvalidFormat` or `InvalidDate` for bad input, `OutOfRange` if the
    /// result falls outside the table.
    pub fn ad_to_bs(&self, ad_date: &str) -> Result<String, ConvertError> {
        Ok(self.ad_to_bs_date(ad_date)?.to_string())
    }

    /// Same as [`Converter::ad_to_bs`], returning the structured date.
    ///
    /// # Errors
    /// Same as [`Converter::ad_to_bs`].
    pub fn ad_to_bs_date(&self, ad_date: &str) -> Result<BsDate, ConvertError> {
        let (year, month, day) = normalize_parts(ad_date, Calendar::Ad)?;
        self.ad_date_to_bs(gregorian(year, month, day)?)
    }

    /// Converts a Gregorian date to BS.
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the walk leaves the table.
    pub fn ad_date_to_bs(&self, date: Date) -> Result<BsDate, ConvertError> {
        let diff = i64::from(self.anchor_ad.until(date)?.get_days());
        log::trace!("ad_to_bs {}: {diff} days from anchor", ad_string(date));
        self.walk(self.anchor_bs, diff)
    }

    /// Moves `days` days from `start` through the table, one day at a time.
    /// Whole years are skipped while standing on the first day of a year,
    /// which lands on the same date the single-day steps would reach.
    fn walk(&self, start: BsDate, days: i64) -> Result<BsDate, ConvertError> {
        let table = self.table;
        let (mut year, mut month, mut day) = (i32::from(start.year()), start.month(), start.day());
        let mut remaining = days;

        while remaining != 0 {
            if month == FIRST_MONTH && day == MIN_DAY {
                if remaining > 0 {
                    let total = i64::from(table.year_total(year)?);
                    if remaining >= total {
                        year += 1;
                        table.year(year)?;
                        remaining -= total;
                        continue;
                    }
                } else {
                    let total = i64::from(table.year_total(year - 1)?);
                    if -remaining >= total {
                        year -= 1;
                        remaining += total;
                        continue;
                    }
                }
            }

            if remaining > 0 {
                day += 1;
                if day > table.month_length(year, month)? {
                    day = MIN_DAY;
                    if month == LAST_MONTH {
                        month = FIRST_MONTH;
                        year += 1;
                        table.year(year)?;
                    } else {
                        month += 1;
                    }
                }
                remaining -= 1;
            } else {
                if day == MIN_DAY {
                    if month == FIRST_MONTH {
                        month = LAST_MONTH;
                        year -= 1;
                    } else {
                        month -= 1;
                    }
                    day = table.month_length(year, month)?;
                } else {
                    day -= 1;
                }
                remaining += 1;
            }
        }

        let year = u16::try_from(year).map_err(|_| ConvertError::out_of_range(year))?;
        Ok(BsDate::unchecked(year, month, day))
    }

    /// Parses a BS string, checking the year against the table before the
    /// month and day.
    pub(crate) fn parse_bs(&self, bs_date: &str) -> Result<BsDate, ConvertError> {
        let (year, month, day) = normalize_parts(bs_date, Calendar::Bs)?;
        if !self.table.has_year(i32::from(year)) {
            return Err(ConvertError::out_of_range(year));
        }
        BsDate::new_in(self.table, year, month, day)
    }

    /// Resolves a date string in either calendar to its Gregorian date.
    pub(crate) fn to_gregorian(&self, date: &str, calendar: Calendar) -> Result<Date, ConvertError> {
        match calendar {
            Calendar::Ad => {
                let (year, month, day) = normalize_parts(date, Calendar::Ad)?;
                gregorian(year, month, day)
            }
            Calendar::Bs => self.bs_date_to_ad(self.parse_bs(date)?),
        }
    }
}
