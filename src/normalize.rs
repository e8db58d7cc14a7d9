//! Loose date-string normalization.
//!
//! Every non-digit character is dropped; the remaining run must be 7 or 8
//! digits long. Eight digits read as `YYYYMMDD`. Seven digits leave the
//! month/day split ambiguous: a leading digit above 1 is a single-digit
//! month (`YYYYMDD`), anything else is a two-digit month followed by a
//! single-digit day (`YYYYMMD`). That heuristic misreads inputs such as
//! `2082-1-15` (read as month 11, day 5); the ambiguity is inherent in
//! the digit-run format.

use crate::consts::{COMPACT_DIGITS, DATE_SEPARATOR, SHORT_DIGITS, YEAR_DIGITS};
use crate::{Calendar, ConvertError};

/// Normalizes `input` to `YYYY-MM-DD`.
///
/// AD input must also name a real Gregorian date. BS input is only reshaped;
/// its validity against the calendar table is checked later.
///
/// # Errors
/// Returns `ConvertError::InvalidFormat` unless the input holds 7 or 8
/// digits, and `ConvertError::InvalidDate` for a nonexistent AD date.
pub fn normalize(input: &str, calendar: Calendar) -> Result<String, ConvertError> {
    let (year, month, day) = normalize_parts(input, calendar)?;
    Ok(canonical(year, month, day))
}

/// Same as [`normalize`], returning the numeric fields.
pub(crate) fn normalize_parts(input: &str, calendar: Calendar) -> Result<(u16, u8, u8), ConvertError> {
    let digits: Vec<u8> = input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    let (year_digits, rest) = match digits.len() {
        COMPACT_DIGITS | SHORT_DIGITS => digits.split_at(YEAR_DIGITS),
        _ => return Err(ConvertError::InvalidFormat(input.to_owned())),
    };

    let year = year_digits.iter().fold(0u16, |acc, &d| acc * 10 + u16::from(d));
    let (month, day) = match *rest {
        [m1, m2, d1, d2] => (m1 * 10 + m2, d1 * 10 + d2),
        [m, d1, d2] if m > 1 => (m, d1 * 10 + d2),
        [m1, m2, d] => (m1 * 10 + m2, d),
        _ => return Err(ConvertError::InvalidFormat(input.to_owned())),
    };

    if calendar == Calendar::Ad {
        gregorian(year, month, day)?;
    }
    Ok((year, month, day))
}

/// Builds the Gregorian date for already-split fields.
///
/// # Errors
/// Returns `ConvertError::InvalidDate` if the fields do not name a real date.
pub(crate) fn gregorian(year: u16, month: u8, day: u8) -> Result<jiff::civil::Date, ConvertError> {
    let invalid = || ConvertError::InvalidDate(canonical(year, month, day));
    let year = i16::try_from(year).map_err(|_| invalid())?;
    let month = i8::try_from(month).map_err(|_| invalid())?;
    let day = i8::try_from(day).map_err(|_| invalid())?;
    jiff::civil::Date::new(year, month, day).map_err(|_| invalid())
}

pub(crate) fn canonical(year: u16, month: u8, day: u8) -> String {
    format!("{year:04}{DATE_SEPARATOR}{month:02}{DATE_SEPARATOR}{day:02}")
}

/// Splits a strict `YYYY-MM-DD` string, `None` for any other shape.
pub(crate) fn split_canonical(s: &str) -> Option<(u16, u8, u8)> {
    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == DATE_SEPARATOR as u8,
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return None;
    }
    let year = s[0..4].parse().ok()?;
    let month = s[5..7].parse().ok()?;
    let day = s[8..10].parse().ok()?;
    Some((year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_digits() {
        struct TestCase {
            input:    &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase { input: "2082-01-15", expected: "2082-01-15" },
            TestCase { input: "20820115", expected: "2082-01-15" },
            TestCase { input: "2082/01/15", expected: "2082-01-15" },
            TestCase { input: " 2082 . 01 . 15 ", expected: "2082-01-15" },
            TestCase { input: "2082-0115", expected: "2082-01-15" },
        ];

        for case in &cases {
            assert_eq!(normalize(case.input, Calendar::Bs).unwrap(), case.expected, "input {}", case.input);
        }
    }

    #[test]
    fn test_seven_digits_single_digit_month() {
        assert_eq!(normalize("2082-2-15", Calendar::Bs).unwrap(), "2082-02-15");
        assert_eq!(normalize("2082915", Calendar::Bs).unwrap(), "2082-09-15");
    }

    #[test]
    fn test_seven_digits_two_digit_month() {
        assert_eq!(normalize("2082-12-5", Calendar::Bs).unwrap(), "2082-12-05");
        assert_eq!(normalize("2082-10-1", Calendar::Bs).unwrap(), "2082-10-01");
    }

    #[test]
    fn test_seven_digits_ambiguity_is_preserved() {
        // A leading 1 always starts a two-digit month.
        assert_eq!(normalize("2082-1-15", Calendar::Bs).unwrap(), "2082-11-05");
        assert_eq!(normalize("2082-0-15", Calendar::Bs).unwrap(), "2082-01-05");
    }

    #[test]
    fn test_wrong_digit_count() {
        for input in ["", "2082", "2082-1-1", "208201150", "abcd-ef-gh", "2082-01-15-1"] {
            assert!(
                matches!(normalize(input, Calendar::Bs), Err(ConvertError::InvalidFormat(_))),
                "expected InvalidFormat for {input:?}"
            );
        }
    }

    #[test]
    fn test_ad_requires_real_gregorian_date() {
        assert_eq!(normalize("2024-02-29", Calendar::Ad).unwrap(), "2024-02-29");
        assert!(matches!(normalize("2021-02-30", Calendar::Ad), Err(ConvertError::InvalidDate(_))));
        assert!(matches!(normalize("2023-02-29", Calendar::Ad), Err(ConvertError::InvalidDate(_))));
        assert!(matches!(normalize("2023-13-01", Calendar::Ad), Err(ConvertError::InvalidDate(_))));
        assert!(matches!(normalize("1900-02-29", Calendar::Ad), Err(ConvertError::InvalidDate(_))));
    }

    #[test]
    fn test_bs_is_not_gregorian_checked() {
        // Month 4 of many BS years has 32 days.
        assert_eq!(normalize("2082-04-32", Calendar::Bs).unwrap(), "2082-04-32");
        assert_eq!(normalize("2082-13-40", Calendar::Bs).unwrap(), "2082-13-40");
    }

    #[test]
    fn test_split_canonical() {
        assert_eq!(split_canonical("2082-01-15"), Some((2082, 1, 15)));
        assert_eq!(split_canonical("2082-1-15"), None);
        assert_eq!(split_canonical("2082/01/15"), None);
        assert_eq!(split_canonical("20820115"), None);
        assert_eq!(split_canonical("2082-01-1x"), None);
    }
}
