//! Canonical date keys.
//!
//! A [`DateKey`] identifies one calendar day and always renders as
//! `YYYY-MM-DD`. It is the key type of every attendance and leave record.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AttendanceError, AttendanceResult};

/// Format used for the textual form of a [`DateKey`].
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// A calendar day used as the unique identifier of attendance records.
///
/// There is exactly one canonical string per calendar day; no time of day or
/// timezone is carried.
///
/// # Example
///
/// ```
/// use office_attendance::models::DateKey;
///
/// let key: DateKey = "2024-05-06".parse().unwrap();
/// assert_eq!(key.to_string(), "2024-05-06");
/// assert!("2024-5-6".parse::<DateKey>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Wraps a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a key from its parts, returning `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses a `YYYY-MM-DD` string.
    ///
    /// Only the canonical form is accepted: unpadded fields and signed years
    /// are rejected even though they name a real day.
    pub fn parse(value: &str) -> AttendanceResult<Self> {
        let invalid = || AttendanceError::InvalidDateKey {
            value: value.to_string(),
        };
        if value.len() != 10 {
            return Err(invalid());
        }
        let key = NaiveDate::parse_from_str(value, DATE_KEY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())?;
        if key.to_string() != value {
            return Err(invalid());
        }
        Ok(key)
    }

    /// Returns the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DateKey> for NaiveDate {
    fn from(key: DateKey) -> Self {
        key.0
    }
}

impl TryFrom<String> for DateKey {
    type Error = AttendanceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}
