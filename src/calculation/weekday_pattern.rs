//! Weekday pattern selection for bulk attendance marking.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::calendar::{HolidayLookup, is_non_working_day};
use crate::models::{DateKey, Workday};

/// Selects every date in `month_days` that falls on `weekday` and can be
/// marked attended.
///
/// Weekends, bank holidays and dates already on leave are skipped. The result
/// is meant to be unioned into the existing attendance, never to replace it.
///
/// # Arguments
///
/// * `lookup` - Bank holiday source
/// * `weekday` - The weekday to select, Monday through Friday
/// * `month_days` - The days to choose from, usually a whole month
/// * `leave` - Dates currently marked as annual leave
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use office_attendance::calculation::mark_weekday_pattern;
/// use office_attendance::calendar::{HolidayTable, enumerate_month_days};
/// use office_attendance::models::{MonthScope, Workday};
///
/// let table = HolidayTable::england();
/// let days = enumerate_month_days(MonthScope::new(2024, 5).unwrap());
/// let mondays = mark_weekday_pattern(&table, Workday::Monday, &days, &BTreeSet::new());
///
/// // Mondays in May 2024: 6th and 27th are bank holidays, leaving 13th and 20th.
/// let keys: Vec<String> = mondays.iter().map(|k| k.to_string()).collect();
/// assert_eq!(keys, vec!["2024-05-13", "2024-05-20"]);
/// ```
pub fn mark_weekday_pattern<L: HolidayLookup + ?Sized>(
    lookup: &L,
    weekday: Workday,
    month_days: &[NaiveDate],
    leave: &BTreeSet<DateKey>,
) -> BTreeSet<DateKey> {
    month_days
        .iter()
        .copied()
        .filter(|day| weekday.matches(*day))
        .filter(|day| !is_non_working_day(lookup, *day))
        .map(DateKey::new)
        .filter(|key| !leave.contains(key))
        .collect()
}
