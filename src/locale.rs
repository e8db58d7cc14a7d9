//! Label dataset for the two supported scripts.
//!
//! The conversion core never defines names itself; it looks them up here by
//! index. Latin labels use ASCII digits and the common transliteration of BS
//! month names; Devanagari labels use Nepali names and digit glyphs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{FIRST_MONTH, MONTHS_IN_YEAR};
use crate::prelude::*;
use crate::ConvertError;

/// Output script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Latin script, ASCII digits
    #[default]
    #[display(fmt = "en")]
    En,
    /// Devanagari script
    #[display(fmt = "np")]
    Np,
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Self::En => &ENGLISH,
            Self::Np => &NEPALI,
        }
    }
}

impl FromStr for Locale {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "np" | "ne" => Ok(Self::Np),
            _ => Err(ConvertError::UnknownLocale(s.to_owned())),
        }
    }
}

/// Names and glyphs for one script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    /// BS month names, Baisakh first
    pub bs_months: [&'static str; MONTHS_IN_YEAR as usize],
    /// Weekday names, Sunday first
    pub weekdays:  [&'static str; 7],
    /// Glyphs for digits 0..=9
    pub digits:    [&'static str; 10],
    pub year:      &'static str,
    pub month:     &'static str,
    pub day:       &'static str,
    /// Appended to a unit label when the count is above one
    pub plural:    &'static str,
}

impl Labels {
    pub fn bs_month(&self, month: u8) -> Option<&'static str> {
        let index = usize::from(month.checked_sub(FIRST_MONTH)?);
        self.bs_months.get(index).copied()
    }

    /// Weekday name for a Sunday-based index (0 = Sunday).
    pub fn weekday(&self, index: u8) -> Option<&'static str> {
        self.weekdays.get(usize::from(index)).copied()
    }

    /// Replaces each ASCII digit in `s` with this script's glyph.
    pub fn digits_of(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c.to_digit(10) {
                Some(d) => out.push_str(self.digits[d as usize]),
                None => out.push(c),
            }
        }
        out
    }
}

/// English names of the Gregorian months, January first.
pub const AD_MONTHS: [&str; MONTHS_IN_YEAR as usize] = [
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

pub static ENGLISH: Labels = Labels {
    bs_months: [
        "Baisakh", "Jestha", "Ashar", "Shrawan", "Bhadra", "Ashoj", "Kartik", "Mangsir", "Poush", "Magh",
        "Falgun", "Chaitra",
    ],
    weekdays:  ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
    digits:    ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],
    year:      "year",
    month:     "month",
    day:       "day",
    plural:    "s",
};

pub static NEPALI: Labels = Labels {
    bs_months: [
        "वैशाख",
        "जेठ",
        "असार",
        "साउन",
        "भदौ",
        "असोज",
        "कार्तिक",
        "मंसिर",
        "पुष",
        "माघ",
        "फाल्गुन",
        "चैत्र",
    ],
    weekdays:  ["आइतवार", "सोमवार", "मंगलबार", "बुधवार", "बिहीवार", "शुक्रवार", "शनिवार"],
    digits:    ["०", "१", "२", "३", "४", "५", "६", "७", "८", "९"],
    year:      "वर्ष",
    month:     "महिना",
    day:       "दिन",
    plural:    "",
};

/// Replaces ASCII digits in `s` with Devanagari digits.
pub fn to_nepali_digits(s: &str) -> String {
    NEPALI.digits_of(s)
}
