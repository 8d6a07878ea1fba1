//! Calendar day classification.
//!
//! This module decides whether a date is a weekend, a bank holiday or a
//! working day, enumerates the days of a month and builds the Monday-first
//! display grid.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{CalendarDay, DateKey, DayKind, DayStatus, MonthScope};

use super::HolidayLookup;

/// Result of a bank holiday check.
///
/// # Example
///
/// ```
/// use office_attendance::calendar::{HolidayTable, is_bank_holiday};
/// use chrono::NaiveDate;
///
/// let table = HolidayTable::england();
/// let check = is_bank_holiday(&table, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
/// assert!(check.is_holiday);
/// assert_eq!(check.name.as_deref(), Some("Christmas Day"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCheck {
    /// Whether the date is a bank holiday.
    pub is_holiday: bool,
    /// The holiday title when `is_holiday` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Returns true for Saturday and Sunday.
///
/// # Example
///
/// ```
/// use office_attendance::calendar::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2024-05-04 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()));
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Looks `date` up in the holiday table.
///
/// Years absent from the table have no holidays.
pub fn is_bank_holiday<L: HolidayLookup + ?Sized>(lookup: &L, date: NaiveDate) -> HolidayCheck {
    match lookup.holiday_on(date) {
        Some(holiday) => HolidayCheck {
            is_holiday: true,
            name: Some(holiday.title.clone()),
        },
        None => HolidayCheck::default(),
    }
}

/// Weekend or bank holiday.
pub fn is_non_working_day<L: HolidayLookup + ?Sized>(lookup: &L, date: NaiveDate) -> bool {
    is_weekend(date) || lookup.holiday_on(date).is_some()
}

/// Every day of the month from the 1st to the last, ascending.
///
/// # Example
///
/// ```
/// use office_attendance::calendar::enumerate_month_days;
/// use office_attendance::models::MonthScope;
///
/// let days = enumerate_month_days(MonthScope::new(2024, 2).unwrap());
/// assert_eq!(days.len(), 29);
/// assert_eq!(days[0].to_string(), "2024-02-01");
/// ```
pub fn enumerate_month_days(month: MonthScope) -> Vec<NaiveDate> {
    month
        .first_day()
        .iter_days()
        .take_while(|day| *day <= month.last_day())
        .collect()
}

/// Number of days in the month that are neither weekend nor bank holiday.
///
/// # Example
///
/// ```
/// use office_attendance::calendar::{HolidayTable, count_working_days_in_month};
/// use office_attendance::models::MonthScope;
///
/// let table = HolidayTable::england();
/// // May 2024: 23 weekdays, one of which is the Early May Bank Holiday.
/// // The Spring Bank Holiday on the 27th is also a weekday.
/// assert_eq!(count_working_days_in_month(&table, MonthScope::new(2024, 5).unwrap()), 21);
/// ```
pub fn count_working_days_in_month<L: HolidayLookup + ?Sized>(lookup: &L, month: MonthScope) -> u32 {
    enumerate_month_days(month)
        .into_iter()
        .filter(|day| !is_non_working_day(lookup, *day))
        .count() as u32
}

/// The month's days preceded by empty slots so the 1st lands under its
/// weekday column, with weeks starting on Monday.
///
/// Display only; no effect on attendance figures.
pub fn generate_calendar_grid(month: MonthScope) -> Vec<Option<NaiveDate>> {
    let leading = month.first_day().weekday().num_days_from_monday() as usize;
    std::iter::repeat_n(None, leading)
        .chain(enumerate_month_days(month).into_iter().map(Some))
        .collect()
}

/// Classifies a day for display, attaching the user's recorded status.
///
/// A bank holiday falling on a weekend is reported as a weekend but keeps its
/// holiday name.
pub fn classify_day<L: HolidayLookup + ?Sized>(
    lookup: &L,
    date: NaiveDate,
    status: DayStatus,
) -> CalendarDay {
    let holiday = lookup.holiday_on(date);
    let kind = if is_weekend(date) {
        DayKind::Weekend
    } else if holiday.is_some() {
        DayKind::BankHoliday
    } else {
        DayKind::Working
    };

    CalendarDay {
        date: DateKey::new(date),
        kind,
        status,
        holiday_name: holiday.map(|h| h.title.clone()),
    }
}
