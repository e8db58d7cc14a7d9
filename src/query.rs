//! Queries composed from conversion and day counting: weekdays, per-date
//! info, date differences and "today".

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::Timestamp;
use serde::Serialize;

use crate::consts::{
    APPROX_DAYS_PER_MONTH, APPROX_DAYS_PER_YEAR, FIRST_MONTH, HOURS_PER_DAY, MIN_DAY, MINUTES_PER_HOUR,
    MONTHS_IN_YEAR, SECONDS_PER_MINUTE,
};
use crate::format::weekday_of;
use crate::{BsDate, Calendar, ConvertError, Converter, Locale};

/// Current date in UTC.
pub fn today_ad() -> Date {
    Timestamp::now().to_zoned(TimeZone::UTC).date()
}

/// Details about one date, seen from both calendars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateInfo {
    pub bs:                   BsDate,
    pub ad:                   Date,
    /// English weekday name
    pub weekday:              &'static str,
    /// Days in the BS year of this date
    pub total_days_in_year:   u16,
    /// 1-based position of the date in its BS year
    pub day_of_year:          u16,
    /// BS day count from today to this date; negative for past dates
    pub diff_days_from_today: i64,
}

/// Unit selector for [`CalendarDiff::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffUnit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

/// Distance between two dates.
///
/// `years` and `months` come from subtracting calendar fields, so
/// Feb 1 to Mar 1 is one month whatever its length. The remaining figures are
/// elapsed time. All values are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDiff {
    pub years:   i64,
    pub months:  i64,
    pub days:    i64,
    pub hours:   i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CalendarDiff {
    pub const fn get(&self, unit: DiffUnit) -> i64 {
        match unit {
            DiffUnit::Years => self.years,
            DiffUnit::Months => self.months,
            DiffUnit::Days => self.days,
            DiffUnit::Hours => self.hours,
            DiffUnit::Minutes => self.minutes,
            DiffUnit::Seconds => self.seconds,
        }
    }
}

impl Converter {
    /// Sunday-based weekday index (0 = Sunday) of a date in either calendar.
    ///
    /// # Errors
    /// Propagates normalization and conversion errors.
    pub fn weekday_index(&self, date: &str, calendar: Calendar) -> Result<u8, ConvertError> {
        Ok(weekday_of(self.to_gregorian(date, calendar)?))
    }

    /// Weekday name of a date in either calendar.
    ///
    /// # Errors
    /// Propagates normalization and conversion errors.
    pub fn weekday(&self, date: &str, calendar: Calendar, locale: Locale) -> Result<&'static str, ConvertError> {
        let index = self.weekday_index(date, calendar)?;
        locale
            .labels()
            .weekday(index)
            .ok_or_else(|| ConvertError::InvalidDate(format!("no weekday label at index {index}")))
    }

    /// Info for a date in either calendar, relative to the current UTC date.
    /// Invalid input yields `None` rather than an error.
    pub fn date_info(&self, date: &str, calendar: Calendar) -> Option<DateInfo> {
        self.date_info_on(date, calendar, today_ad())
    }

    /// Same as [`Converter::date_info`] with an explicit "today".
    pub fn date_info_on(&self, date: &str, calendar: Calendar, today: Date) -> Option<DateInfo> {
        match calendar {
            Calendar::Bs => self.bs_info_on(date, today),
            Calendar::Ad => self.ad_info_on(date, today),
        }
    }

    pub fn bs_info(&self, bs_date: &str) -> Option<DateInfo> {
        self.bs_info_on(bs_date, today_ad())
    }

    pub fn bs_info_on(&self, bs_date: &str, today: Date) -> Option<DateInfo> {
        if !self.is_valid_bs_date(bs_date) {
            return None;
        }
        let info = self.parse_bs(bs_date).and_then(|bs| {
            let ad = self.bs_date_to_ad(bs)?;
            self.info(bs, ad, today)
        });
        soft(bs_date, info)
    }

    pub fn ad_info(&self, ad_date: &str) -> Option<DateInfo> {
        self.ad_info_on(ad_date, today_ad())
    }

    pub fn ad_info_on(&self, ad_date: &str, today: Date) -> Option<DateInfo> {
        if !self.is_valid_ad_date(ad_date) {
            return None;
        }
        let info = self.to_gregorian(ad_date, Calendar::Ad).and_then(|ad| {
            let bs = self.ad_date_to_bs(ad)?;
            self.info(bs, ad, today)
        });
        soft(ad_date, info)
    }

    fn info(&self, bs: BsDate, ad: Date, today: Date) -> Result<DateInfo, ConvertError> {
        let (year, month, day) = bs.to_parts();
        let days = self.total_days_since_epoch(year, month, day)?;
        let year_start = self.total_days_since_epoch(year, FIRST_MONTH, MIN_DAY)?;

        let today_bs = self.ad_date_to_bs(today)?;
        let (ty, tm, td) = today_bs.to_parts();
        let today_days = self.total_days_since_epoch(ty, tm, td)?;

        let weekday = Locale::En
            .labels()
            .weekday(weekday_of(ad))
            .ok_or_else(|| ConvertError::invalid_date(bs))?;
        let day_of_year = u16::try_from(days - year_start + 1).map_err(|_| ConvertError::invalid_date(bs))?;

        Ok(DateInfo {
            bs,
            ad,
            weekday,
            total_days_in_year: self.table().year_total(i32::from(year))?,
            day_of_year,
            diff_days_from_today: days - today_days,
        })
    }

    /// Distance between two dates written in the same calendar.
    ///
    /// # Errors
    /// Propagates normalization and conversion errors for either input.
    pub fn calendar_diff(&self, date1: &str, date2: &str, calendar: Calendar) -> Result<CalendarDiff, ConvertError> {
        let first = self.to_gregorian(date1, calendar)?;
        let second = self.to_gregorian(date2, calendar)?;

        let years = i64::from(first.year()) - i64::from(second.year());
        let months = years * i64::from(MONTHS_IN_YEAR) + i64::from(first.month()) - i64::from(second.month());
        let days = i64::from(second.until(first)?.get_days()).abs();
        let hours = days * HOURS_PER_DAY;
        let minutes = hours * MINUTES_PER_HOUR;

        Ok(CalendarDiff {
            years: years.abs(),
            months: months.abs(),
            days,
            hours,
            minutes,
            seconds: minutes * SECONDS_PER_MINUTE,
        })
    }

    /// Human-readable distance, e.g. `"1 year, 2 months, 5 days"`.
    ///
    /// The day remainder uses 365-day years and 30-day months and is clamped
    /// at zero, so it is an approximation.
    ///
    /// # Errors
    /// Same as [`Converter::calendar_diff`].
    pub fn human_diff(
        &self,
        date1: &str,
        date2: &str,
        calendar: Calendar,
        locale: Locale,
    ) -> Result<String, ConvertError> {
        let diff = self.calendar_diff(date1, date2, calendar)?;
        let years = diff.years;
        let months = diff.months % i64::from(MONTHS_IN_YEAR);
        let days = (diff.days - years * APPROX_DAYS_PER_YEAR - months * APPROX_DAYS_PER_MONTH).max(0);

        let labels = locale.labels();
        let part = |count: i64, unit: &str| {
            let suffix = if count > 1 { labels.plural } else { "" };
            format!("{} {unit}{suffix}", labels.digits_of(&count.to_string()))
        };

        let mut parts = Vec::with_capacity(3);
        if years > 0 {
            parts.push(part(years, labels.year));
        }
        if months > 0 {
            parts.push(part(months, labels.month));
        }
        if days > 0 || parts.is_empty() {
            parts.push(part(days, labels.day));
        }
        Ok(parts.join(", "))
    }

    /// Today's BS date (from the current UTC date).
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` once today leaves the table.
    pub fn today_bs(&self) -> Result<BsDate, ConvertError> {
        self.ad_date_to_bs(today_ad())
    }

    /// Formats today: as BS for `np`, as AD for `en`.
    ///
    /// # Errors
    /// Same as [`Converter::format_bs`] and [`Converter::format_ad`].
    pub fn today(&self, locale: Locale, template: &str) -> Result<String, ConvertError> {
        self.today_on(today_ad(), locale, template)
    }

    fn today_on(&self, today: Date, locale: Locale, template: &str) -> Result<String, ConvertError> {
        match locale {
            Locale::Np => self.format_bs(&self.ad_date_to_bs(today)?.to_string(), template, locale),
            Locale::En => self.format_ad(&crate::types::ad_string(today), template, locale),
        }
    }
}

fn soft(input: &str, info: Result<DateInfo, ConvertError>) -> Option<DateInfo> {
    info.inspect_err(|err| log::debug!("no info for {input}: {err}")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ad, bs, converter, FIXED_TODAY};
    use crate::{CalendarTable, ConverterConfig, MonthLengths};

    #[test]
    fn test_weekday() {
        let c = converter();
        assert_eq!(c.weekday("2005-04-14", Calendar::Ad, Locale::En).unwrap(), "Thursday");
        assert_eq!(c.weekday("2062-01-01", Calendar::Bs, Locale::En).unwrap(), "Thursday");
        assert_eq!(c.weekday("2062-01-01", Calendar::Bs, Locale::Np).unwrap(), "बिहीवार");
        assert_eq!(c.weekday_index("2081-12-31", Calendar::Bs).unwrap(), 0);
        assert!(matches!(c.weekday("2021-02-30", Calendar::Ad, Locale::En), Err(ConvertError::InvalidDate(_))));
        assert!(matches!(c.weekday("2100-01-01", Calendar::Bs, Locale::En), Err(ConvertError::OutOfRange { .. })));
    }

    #[test]
    fn test_bs_info() {
        let c = converter();
        let info = c.bs_info_on("2082-01-15", FIXED_TODAY).unwrap();
        assert_eq!(info.bs, bs(2082, 1, 15));
        assert_eq!(info.ad, ad(2025, 4, 28));
        assert_eq!(info.weekday, "Monday");
        assert_eq!(info.total_days_in_year, 365);
        assert_eq!(info.day_of_year, 15);
        // FIXED_TODAY is BS 2082-01-01.
        assert_eq!(info.diff_days_from_today, 14);
    }

    #[test]
    fn test_ad_info() {
        let c = converter();
        let info = c.ad_info_on("2024-04-12", FIXED_TODAY).unwrap();
        assert_eq!(info.bs, bs(2080, 12, 30));
        assert_eq!(info.weekday, "Friday");
        assert_eq!(info.total_days_in_year, 365);
        assert_eq!(info.day_of_year, 365);
        assert_eq!(info.diff_days_from_today, -367);
    }

    #[test]
    fn test_date_info_dispatch() {
        let c = converter();
        assert_eq!(
            c.date_info_on("2062-01-01", Calendar::Bs, FIXED_TODAY),
            c.date_info_on("2005-04-14", Calendar::Ad, FIXED_TODAY)
        );
    }

    #[test]
    fn test_info_soft_fails() {
        let c = converter();
        assert_eq!(c.bs_info_on("2082-13-01", FIXED_TODAY), None);
        assert_eq!(c.bs_info_on("20820115", FIXED_TODAY), None);
        assert_eq!(c.ad_info_on("2021-02-30", FIXED_TODAY), None);
        assert_eq!(c.date_info_on("2100-01-01", Calendar::Bs, FIXED_TODAY), None);
        // A "today" outside the table also degrades to None.
        assert_eq!(c.bs_info_on("2082-01-15", ad(2050, 1, 1)), None);
    }

    #[test]
    fn test_info_serializes_snake_case() {
        let c = converter();
        let info = c.bs_info_on("2082-01-15", FIXED_TODAY).unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["bs"], "2082-01-15");
        assert_eq!(json["ad"], "2025-04-28");
        assert_eq!(json["day_of_year"], 15);
        assert_eq!(json["diff_days_from_today"], 14);
    }

    #[test]
    fn test_calendar_diff_fields() {
        let c = converter();
        let diff = c.calendar_diff("2024-02-01", "2024-03-01", Calendar::Ad).unwrap();
        assert_eq!(diff.years, 0);
        assert_eq!(diff.months, 1);
        assert_eq!(diff.days, 29);
        assert_eq!(diff.hours, 29 * 24);
        assert_eq!(diff.minutes, 29 * 24 * 60);
        assert_eq!(diff.seconds, 29 * 24 * 60 * 60);
        assert_eq!(diff.get(DiffUnit::Days), 29);

        // Order does not matter.
        assert_eq!(c.calendar_diff("2024-03-01", "2024-02-01", Calendar::Ad).unwrap(), diff);
    }

    #[test]
    fn test_calendar_diff_bs() {
        let c = converter();
        // 2080-12-30 BS = 2024-04-12, 2082-01-15 BS = 2025-04-28.
        let diff = c.calendar_diff("2082-01-15", "2080-12-30", Calendar::Bs).unwrap();
        assert_eq!(diff.years, 1);
        assert_eq!(diff.months, 12);
        assert_eq!(diff.days, 381);
    }

    #[test]
    fn test_calendar_diff_errors() {
        let c = converter();
        assert!(matches!(
            c.calendar_diff("2021-02-30", "2021-03-01", Calendar::Ad),
            Err(ConvertError::InvalidDate(_))
        ));
        assert!(matches!(
            c.calendar_diff("2082-01-01", "2100-01-01", Calendar::Bs),
            Err(ConvertError::OutOfRange { .. })
        ));
        assert!(matches!(c.calendar_diff("x", "2021-03-01", Calendar::Ad), Err(ConvertError::InvalidFormat(_))));
    }

    #[test]
    fn test_human_diff_english() {
        struct TestCase {
            from:     &'static str,
            to:       &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase { from: "2024-01-01", to: "2024-01-01", expected: "0 day" },
            TestCase { from: "2024-01-01", to: "2024-01-02", expected: "1 day" },
            TestCase { from: "2024-01-01", to: "2024-01-06", expected: "5 days" },
            TestCase { from: "2024-01-01", to: "2024-02-01", expected: "1 month, 1 day" },
            TestCase { from: "2024-01-01", to: "2025-03-11", expected: "1 year, 2 months, 10 days" },
            TestCase { from: "2020-01-01", to: "2022-01-01", expected: "2 years, 1 day" },
        ];

        let c = converter();
        for case in &cases {
            assert_eq!(
                c.human_diff(case.from, case.to, Calendar::Ad, Locale::En).unwrap(),
                case.expected,
                "{} -> {}",
                case.from,
                case.to
            );
        }
    }

    #[test]
    fn test_human_diff_clamps_negative_remainder() {
        let c = converter();
        // Jan 31 to Mar 1: two calendar months but only 30 days.
        assert_eq!(c.human_diff("2023-01-31", "2023-03-01", Calendar::Ad, Locale::En).unwrap(), "2 months");
    }

    #[test]
    fn test_human_diff_nepali() {
        let c = converter();
        assert_eq!(
            c.human_diff("2024-01-01", "2025-03-11", Calendar::Ad, Locale::Np).unwrap(),
            "१ वर्ष, २ महिना, १० दिन"
        );
        assert_eq!(
            c.human_diff("2082-01-01", "2082-01-15", Calendar::Bs, Locale::Np).unwrap(),
            "१४ दिन"
        );
    }

    #[test]
    fn test_today_on() {
        let c = converter();
        assert_eq!(c.today_on(FIXED_TODAY, Locale::En, "Y-m-d").unwrap(), "2025-04-14");
        assert_eq!(c.today_on(FIXED_TODAY, Locale::Np, "Y-m-d").unwrap(), "२०८२-०१-०१");
    }

    #[test]
    fn test_diff_unit_selection() {
        let diff = CalendarDiff { years: 1, months: 13, days: 400, hours: 9600, minutes: 576_000, seconds: 34_560_000 };
        assert_eq!(diff.get(DiffUnit::Years), 1);
        assert_eq!(diff.get(DiffUnit::Months), 13);
        assert_eq!(diff.get(DiffUnit::Hours), 9600);
        assert_eq!(diff.get(DiffUnit::Seconds), 34_560_000);
    }

    #[test]
    fn test_info_follows_converter_table() {
        let builtin = CalendarTable::bikram_sambat();
        let mut rows: Vec<MonthLengths> = (2062..=2099).map(|y| *builtin.year(y).unwrap()).collect();
        let last = *builtin.year(2099).unwrap();
        rows.extend([last, last]);
        let table: &'static CalendarTable =
            Box::leak(Box::new(CalendarTable::new(2062, Box::leak(rows.into_boxed_slice()))));
        let c = Converter::with_table(ConverterConfig { epoch_year: 2062 }, table).unwrap();
        let today = ad(2030, 1, 1);

        assert!(c.is_valid_bs_date("2100-01-01"));
        let expected_ad = c.bs_to_ad("2100-01-01").unwrap();

        let info = c.bs_info_on("2100-01-01", today).unwrap();
        assert_eq!(info.bs.to_parts(), (2100, 1, 1));
        assert_eq!(info.ad.to_string(), expected_ad);
        assert_eq!(info.day_of_year, 1);
        assert_eq!(info.total_days_in_year, 365);
        assert_eq!(c.date_info_on("2100-01-01", Calendar::Bs, today), Some(info));

        // The built-in table stops at 2099.
        assert_eq!(converter().bs_info_on("2100-01-01", today), None);
    }
}
