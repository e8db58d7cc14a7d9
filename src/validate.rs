//! Boolean validity checks.
//!
//! A date is valid when it is structurally in range *and* survives a round
//! trip through both conversion directions unchanged. These checks never
//! return an error: every failure reads as `false`.

use crate::normalize::{gregorian, split_canonical};
use crate::{BsDate, Converter};

impl Converter {
    /// `true` if `bs_date` is a strict `YYYY-MM-DD` BS date present in the
    /// table that converts to AD and back to itself.
    pub fn is_valid_bs_date(&self, bs_date: &str) -> bool {
        let Some((year, month, day)) = split_canonical(bs_date) else {
            return false;
        };
        if BsDate::new_in(self.table(), year, month, day).is_err() {
            return false;
        }

        match self.bs_to_ad(bs_date).and_then(|ad| self.ad_to_bs(&ad)) {
            Ok(back) if back == bs_date => true,
            Ok(back) => {
                log::debug!("BS {bs_date} round-tripped to {back}");
                false
            }
            Err(err) => {
                log::debug!("BS {bs_date} failed round trip: {err}");
                false
            }
        }
    }

    /// `true` if `ad_date` is a strict `YYYY-MM-DD` Gregorian date whose BS
    /// equivalent is in the table and converts back to itself.
    pub fn is_valid_ad_date(&self, ad_date: &str) -> bool {
        let Some((year, month, day)) = split_canonical(ad_date) else {
            return false;
        };
        if gregorian(year, month, day).is_err() {
            return false;
        }

        match self.ad_to_bs(ad_date).and_then(|bs| self.bs_to_ad(&bs)) {
            Ok(back) if back == ad_date => true,
            Ok(back) => {
                log::debug!("AD {ad_date} round-tripped to {back}");
                false
            }
            Err(err) => {
                log::debug!("AD {ad_date} failed round trip: {err}");
                false
            }
        }
    }
}
