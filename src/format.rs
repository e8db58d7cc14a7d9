//! Template formatting.
//!
//! Templates are scanned once, left to right. Each `Y`, `m`, `d`, `F` and `l`
//! character is replaced by the year, two-digit month, two-digit day, month
//! name and weekday name; every other character is copied. There is no
//! escape, so a literal `Y` or `l` anywhere in the template is replaced too.

use jiff::civil::Date;

use crate::locale::{AD_MONTHS, Labels};
use crate::normalize::{canonical, gregorian, normalize_parts};
use crate::{BsDate, Calendar, ConvertError, Converter, Locale};

/// Values substituted for each template token.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tokens<'a> {
    year:       String,
    month:      String,
    day:        String,
    month_name: &'a str,
    weekday:    &'a str,
}

impl<'a> Tokens<'a> {
    fn numeric(labels: &Labels, year: u16, month: u8, day: u8, month_name: &'a str, weekday: &'a str) -> Self {
        Self {
            year: labels.digits_of(&format!("{year:04}")),
            month: labels.digits_of(&format!("{month:02}")),
            day: labels.digits_of(&format!("{day:02}")),
            month_name,
            weekday,
        }
    }

    fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 16);
        for c in template.chars() {
            match c {
                'Y' => out.push_str(&self.year),
                'm' => out.push_str(&self.month),
                'd' => out.push_str(&self.day),
                'F' => out.push_str(self.month_name),
                'l' => out.push_str(self.weekday),
                other => out.push(other),
            }
        }
        out
    }
}

/// Sunday-based weekday index (0 = Sunday) of a Gregorian date.
pub(crate) fn weekday_of(date: Date) -> u8 {
    date.weekday().to_sunday_zero_offset().unsigned_abs()
}

fn missing_label(what: &str, index: u8) -> ConvertError {
    ConvertError::InvalidDate(format!("no {what} label at index {index}"))
}

impl Converter {
    /// Formats a BS date.
    ///
    /// `en` yields ASCII digits, the Latin BS month name and the English
    /// weekday; `np` yields Devanagari digits and Nepali names.
    ///
    /// `F` under `en` is the transliterated name ("Baisakh"), not the
    /// Devanagari "वैशाख" that older JavaScript converters emit for both
    /// locales.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidFormat` for a bad digit run and
    /// `ConvertError::InvalidDate` unless the date passes
    /// [`Converter::is_valid_bs_date`].
    pub fn format_bs(&self, bs_date: &str, template: &str, locale: Locale) -> Result<String, ConvertError> {
        let (year, month, day) = normalize_parts(bs_date, Calendar::Bs)?;
        let normalized = canonical(year, month, day);
        if !self.is_valid_bs_date(&normalized) {
            return Err(ConvertError::InvalidDate(normalized));
        }

        let date = BsDate::unchecked(year, month, day);
        let weekday = weekday_of(self.bs_date_to_ad(date)?);
        self.render_bs(date, weekday, template, locale)
    }

    /// Formats an AD date.
    ///
    /// `en` renders the Gregorian fields with English month and weekday
    /// names. `np` converts to BS first and renders it in Devanagari.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidFormat` for a bad digit run and
    /// `ConvertError::InvalidDate` unless the date passes
    /// [`Converter::is_valid_ad_date`].
    pub fn format_ad(&self, ad_date: &str, template: &str, locale: Locale) -> Result<String, ConvertError> {
        let (year, month, day) = normalize_parts(ad_date, Calendar::Ad)?;
        let normalized = canonical(year, month, day);
        if !self.is_valid_ad_date(&normalized) {
            return Err(ConvertError::InvalidDate(normalized));
        }

        let date = gregorian(year, month, day)?;
        let weekday = weekday_of(date);
        match locale {
            Locale::En => {
                let labels = locale.labels();
                let month_name = AD_MONTHS
                    .get(usize::from(month - 1))
                    .copied()
                    .ok_or_else(|| missing_label("month", month))?;
                let weekday_name = labels.weekday(weekday).ok_or_else(|| missing_label("weekday", weekday))?;
                Ok(Tokens::numeric(labels, year, month, day, month_name, weekday_name).render(template))
            }
            Locale::Np => self.render_bs(self.ad_date_to_bs(date)?, weekday, template, locale),
        }
    }

    fn render_bs(&self, date: BsDate, weekday: u8, template: &str, locale: Locale) -> Result<String, ConvertError> {
        let labels = locale.labels();
        let month_name = labels.bs_month(date.month()).ok_or_else(|| missing_label("month", date.month()))?;
        let weekday_name = labels.weekday(weekday).ok_or_else(|| missing_label("weekday", weekday))?;
        let (year, month, day) = date.to_parts();
        Ok(Tokens::numeric(labels, year, month, day, month_name, weekday_name).render(template))
    }
}
