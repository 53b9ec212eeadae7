use crate::error::IntacctError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar date as the API exchanges it.
///
/// Requests carry dates as `<year>`, `<month>` and `<day>` children; some
/// responses flatten them to `MM/DD/YYYY` text. Both forms map onto this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IntacctDate(NaiveDate);

impl IntacctDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, IntacctError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                IntacctError::InvalidArgument(format!("{year}-{month}-{day} is not a valid date"))
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for IntacctDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for IntacctDate {
    type Err = IntacctError;

    /// Accepts ISO `YYYY-MM-DD` and the API's `MM/DD/YYYY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
            .map(Self)
            .map_err(|_| IntacctError::InvalidArgument(format!("unrecognized date '{s}'")))
    }
}

impl fmt::Display for IntacctDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%m/%d/%Y"))
    }
}
