//! Month scope model.
//!
//! A [`MonthScope`] is the `(year, month)` window over which working days,
//! attendance counts and rates are computed.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AttendanceError, AttendanceResult};

use super::DateKey;

const MONTH_NAMES: [&str; 12] = [
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

/// A calendar month.
///
/// Serializes as `yyyy-MM`, which is also the string prefix shared by every
/// [`DateKey`] inside the month.
///
/// # Example
///
/// ```
/// use office_attendance::models::MonthScope;
///
/// let may = MonthScope::new(2024, 5).unwrap();
/// assert_eq!(may.to_string(), "2024-05");
/// assert_eq!(may.days_in_month(), 31);
/// assert_eq!(may.next().to_string(), "2024-06");
/// assert_eq!(may.label(), "May 2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthScope {
    year: i32,
    month: u32,
}

/// Earliest year a month scope can name.
pub const MIN_YEAR: i32 = 0;
/// Latest year a month scope can name; later years have no four-digit form.
pub const MAX_YEAR: i32 = 9999;

impl MonthScope {
    /// Creates a month scope, rejecting months outside 1..=12 and years
    /// outside [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn new(year: i32, month: u32) -> AttendanceResult<Self> {
        if !(1..=12).contains(&month) || !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(AttendanceError::InvalidMonth {
                value: format!("{:04}-{:02}", year, month),
            });
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parses a `yyyy-MM` string.
    pub fn parse(value: &str) -> AttendanceResult<Self> {
        let invalid = || AttendanceError::InvalidMonth {
            value: value.to_string(),
        };
        let (year, month) = value.split_once('-').ok_or_else(invalid)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }

    /// The four-digit year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number, 1 through 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // Validated in the constructor.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        if self.month == 12 {
            return NaiveDate::from_ymd_opt(self.year, 12, 31).unwrap_or_else(|| self.first_day());
        }
        self.next()
            .first_day()
            .pred_opt()
            .unwrap_or_else(|| self.first_day())
    }

    /// Number of calendar days in the month.
    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// The `yyyy-MM` prefix of every date key in this month.
    pub fn prefix(&self) -> String {
        self.to_string()
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Whether the date key falls inside this month, by `yyyy-MM` prefix.
    pub fn contains_key(&self, key: &DateKey) -> bool {
        key.to_string().starts_with(&self.prefix())
    }

    /// The following month, rolling over into the next year after December.
    ///
    /// December of [`MAX_YEAR`] has no successor and returns itself.
    pub fn next(&self) -> Self {
        if self.month == 12 && self.year >= MAX_YEAR {
            *self
        } else if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month, rolling back into the previous year before January.
    ///
    /// January of [`MIN_YEAR`] has no predecessor and returns itself.
    pub fn previous(&self) -> Self {
        if self.month == 1 && self.year <= MIN_YEAR {
            *self
        } else if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Human readable month and year, e.g. `"May 2024"`.
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

impl fmt::Display for MonthScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthScope {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthScope {
    type Error = AttendanceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthScope> for String {
    fn from(month: MonthScope) -> Self {
        month.to_string()
    }
}
