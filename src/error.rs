use crate::consts::{MAX_BS_YEAR, MIN_BS_YEAR};

/// Error type shared by normalization, conversion and formatting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Input does not reduce to 7 or 8 digits.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Digits reduce to a date that does not exist.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A referenced BS year is missing from the calendar table.
    #[error("BS year {year} is out of range (supported {min}-{max})", min = MIN_BS_YEAR, max = MAX_BS_YEAR)]
    OutOfRange { year: i32 },

    /// Locale code other than the two supported scripts.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Converter configuration rejected at construction.
    #[error("Invalid converter configuration: {0}")]
    InvalidConfig(String),
}

impl ConvertError {
    pub(crate) fn out_of_range(year: impl Into<i32>) -> Self {
        Self::OutOfRange { year: year.into() }
    }

    pub(crate) fn invalid_date(date: impl std::fmt::Display) -> Self {
        Self::InvalidDate(date.to_string())
    }
}

impl From<jiff::Error> for ConvertError {
    fn from(err: jiff::Error) -> Self {
        Self::InvalidDate(err.to_string())
    }
}
