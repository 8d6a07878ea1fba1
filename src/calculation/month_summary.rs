//! Monthly attendance summary.
//!
//! Combines the working day count with the month's attendance and leave
//! records into a single [`MonthSummary`] for the display layer.

use std::collections::BTreeSet;

use tracing::debug;

use crate::calendar::{HolidayLookup, count_working_days_in_month};
use crate::models::{DateKey, MonthScope, MonthSummary, RateBand};

use super::attendance_rate::{
    attendance_rate, available_working_days, days_needed_for_rate, rate_percent,
};

/// Computes the attendance summary for `month`.
///
/// Keys outside `month` are ignored, so whole-history sets can be passed in.
/// The attended and leave sets are trusted to be disjoint; a date present in
/// both is counted in both.
///
/// # Arguments
///
/// * `lookup` - Bank holiday source
/// * `month` - The month to summarise
/// * `attended` - Dates marked attended
/// * `leave` - Dates marked as annual leave
/// * `min_rate` - Target rate, e.g. [`super::DEFAULT_MIN_RATE`]
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use office_attendance::calculation::{summarize_month, DEFAULT_MIN_RATE};
/// use office_attendance::calendar::HolidayTable;
/// use office_attendance::models::MonthScope;
///
/// let table = HolidayTable::england();
/// let month = MonthScope::new(2024, 5).unwrap();
/// let summary = summarize_month(&table, month, &BTreeSet::new(), &BTreeSet::new(), DEFAULT_MIN_RATE);
///
/// assert_eq!(summary.working_days, 21);
/// assert_eq!(summary.attendance_rate, 0.0);
/// assert_eq!(summary.days_needed, 9);
/// assert!(!summary.target_reached);
/// ```
pub fn summarize_month<L: HolidayLookup + ?Sized>(
    lookup: &L,
    month: MonthScope,
    attended: &BTreeSet<DateKey>,
    leave: &BTreeSet<DateKey>,
    min_rate: f64,
) -> MonthSummary {
    let working_days = count_working_days_in_month(lookup, month);
    let attended_days = count_in_month(attended, month);
    let leave_days = count_in_month(leave, month);

    let available = available_working_days(working_days, leave_days);
    let rate = attendance_rate(attended_days, available);
    let days_needed = days_needed_for_rate(attended_days, available, min_rate);

    debug!(
        month = %month,
        working_days,
        attended_days,
        leave_days,
        available,
        rate,
        days_needed,
        "Summarised month"
    );

    MonthSummary {
        month,
        label: month.label(),
        total_days: month.days_in_month(),
        working_days,
        attended_days,
        leave_days,
        available_working_days: available,
        attendance_rate: rate,
        rate_percent: rate_percent(rate),
        days_needed,
        min_rate,
        target_reached: rate >= min_rate,
        rate_band: RateBand::classify(rate, min_rate),
    }
}

fn count_in_month(keys: &BTreeSet<DateKey>, month: MonthScope) -> u32 {
    keys.iter().filter(|key| month.contains_key(key)).count() as u32
}
