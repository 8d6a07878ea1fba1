//! Per-day models: marking status, calendar classification and the
//! weekday selector used for bulk marking.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::AttendanceError;

use super::DateKey;

/// What the user has recorded for a single day.
///
/// A day carries exactly one status, so a day can never be both attended and
/// on leave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Nothing recorded.
    #[default]
    Unmarked,
    /// The user attended the office.
    Attended,
    /// The user took annual leave.
    OnLeave,
}

/// Calendar classification of a day, independent of what the user recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday to Friday and not a bank holiday.
    Working,
    /// Saturday or Sunday.
    Weekend,
    /// A weekday listed in the bank holiday table.
    BankHoliday,
}

/// A fully classified day, as handed to the display layer.
///
/// # Example
///
/// ```
/// use office_attendance::models::{CalendarDay, DateKey, DayKind, DayStatus};
///
/// let day = CalendarDay {
///     date: DateKey::from_ymd(2024, 5, 6).unwrap(),
///     kind: DayKind::BankHoliday,
///     status: DayStatus::Unmarked,
///     holiday_name: Some("Early May Bank Holiday".to_string()),
/// };
/// assert!(!day.is_markable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The day.
    pub date: DateKey,
    /// Weekend, bank holiday or working day.
    pub kind: DayKind,
    /// What the user recorded for the day.
    pub status: DayStatus,
    /// Bank holiday title, when the date is in the holiday table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
}

impl CalendarDay {
    /// Only working days accept attendance or leave marks.
    pub fn is_markable(&self) -> bool {
        self.kind == DayKind::Working
    }
}

/// A working weekday, Monday through Friday.
///
/// Used to select which weekday a bulk attendance mark applies to. Weekend
/// days are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Workday {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
}

impl Workday {
    /// All workdays in week order.
    pub const ALL: [Workday; 5] = [
        Workday::Monday,
        Workday::Tuesday,
        Workday::Wednesday,
        Workday::Thursday,
        Workday::Friday,
    ];

    /// The matching chrono weekday.
    pub fn weekday(&self) -> Weekday {
        match self {
            Workday::Monday => Weekday::Mon,
            Workday::Tuesday => Weekday::Tue,
            Workday::Wednesday => Weekday::Wed,
            Workday::Thursday => Weekday::Thu,
            Workday::Friday => Weekday::Fri,
        }
    }

    /// Converts a chrono weekday, returning `None` for Saturday and Sunday.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(Workday::Monday),
            Weekday::Tue => Some(Workday::Tuesday),
            Weekday::Wed => Some(Workday::Wednesday),
            Weekday::Thu => Some(Workday::Thursday),
            Weekday::Fri => Some(Workday::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }

    /// Whether `date` falls on this weekday.
    pub fn matches(&self, date: NaiveDate) -> bool {
        date.weekday() == self.weekday()
    }

    /// Lowercase English name, the form used in URLs and the store file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Workday::Monday => "monday",
            Workday::Tuesday => "tuesday",
            Workday::Wednesday => "wednesday",
            Workday::Thursday => "thursday",
            Workday::Friday => "friday",
        }
    }
}

impl fmt::Display for Workday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Workday {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Workday::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AttendanceError::InvalidWeekday {
                value: s.to_string(),
            })
    }
}
