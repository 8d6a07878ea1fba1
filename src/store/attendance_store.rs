//! The attendance store.
//!
//! [`AttendanceStore`] is the only mutable state in the engine: the month
//! being viewed, what the user recorded for each day, and the last weekday
//! used for a bulk mark. The caller owns it and passes it by reference to
//! whatever needs it.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::{mark_weekday_pattern, summarize_month};
use crate::calendar::{HolidayLookup, classify_day, enumerate_month_days, is_non_working_day};
use crate::models::{
    CalendarDay, DateKey, DayStatus, LeaveMonth, LeaveSummary, MonthScope, MonthSummary, Workday,
};

/// Why a toggle was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleRejection {
    /// The day is a weekend or bank holiday.
    NonWorkingDay,
    /// The day is on annual leave and cannot be marked attended.
    OnLeave,
}

/// The result of toggling a day.
///
/// # Example
///
/// ```
/// use office_attendance::calendar::HolidayTable;
/// use office_attendance::models::{DateKey, DayStatus, MonthScope};
/// use office_attendance::store::{AttendanceStore, ToggleOutcome};
///
/// let table = HolidayTable::england();
/// let mut store = AttendanceStore::new(MonthScope::new(2024, 5).unwrap());
/// let tuesday = DateKey::parse("2024-05-07").unwrap();
///
/// assert_eq!(
///     store.toggle_attendance(&table, tuesday),
///     ToggleOutcome::Updated { status: DayStatus::Attended }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// The day now has `status`.
    Updated {
        /// The day's new status.
        status: DayStatus,
    },
    /// Nothing changed.
    Rejected {
        /// Why the toggle was refused.
        reason: ToggleRejection,
    },
}

/// Caller-owned attendance state.
///
/// Each date carries at most one recorded [`DayStatus`], so a day cannot be
/// attended and on leave at once. Unmarked days are not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceStore {
    current_month: MonthScope,
    days: BTreeMap<DateKey, DayStatus>,
    selected_weekday: Option<Workday>,
}

impl AttendanceStore {
    /// Creates an empty store viewing `current_month`.
    pub fn new(current_month: MonthScope) -> Self {
        Self {
            current_month,
            days: BTreeMap::new(),
            selected_weekday: None,
        }
    }

    pub(crate) fn from_parts(
        current_month: MonthScope,
        days: BTreeMap<DateKey, DayStatus>,
        selected_weekday: Option<Workday>,
    ) -> Self {
        let days = days
            .into_iter()
            .filter(|(_, status)| *status != DayStatus::Unmarked)
            .collect();
        Self {
            current_month,
            days,
            selected_weekday,
        }
    }

    /// The month currently being viewed.
    pub fn current_month(&self) -> MonthScope {
        self.current_month
    }

    /// The weekday used by the most recent bulk mark.
    pub fn selected_weekday(&self) -> Option<Workday> {
        self.selected_weekday
    }

    /// Switches the viewed month.
    pub fn set_month(&mut self, month: MonthScope) {
        self.current_month = month;
    }

    /// Moves the view forward one month.
    pub fn next_month(&mut self) -> MonthScope {
        self.current_month = self.current_month.next();
        self.current_month
    }

    /// Moves the view back one month.
    pub fn previous_month(&mut self) -> MonthScope {
        self.current_month = self.current_month.previous();
        self.current_month
    }

    /// What was recorded for `date`.
    pub fn status(&self, date: DateKey) -> DayStatus {
        self.days.get(&date).copied().unwrap_or_default()
    }

    /// Every recorded day with its status, in date order.
    pub fn recorded_days(&self) -> impl Iterator<Item = (DateKey, DayStatus)> + '_ {
        self.days.iter().map(|(key, status)| (*key, *status))
    }

    /// Flips a day between attended and unmarked.
    ///
    /// Weekends, bank holidays and leave days are left untouched.
    pub fn toggle_attendance<L: HolidayLookup + ?Sized>(
        &mut self,
        lookup: &L,
        date: DateKey,
    ) -> ToggleOutcome {
        if is_non_working_day(lookup, date.date()) {
            debug!(date = %date, "Attendance toggle rejected on non-working day");
            return ToggleOutcome::Rejected {
                reason: ToggleRejection::NonWorkingDay,
            };
        }

        let status = match self.status(date) {
            DayStatus::OnLeave => {
                debug!(date = %date, "Attendance toggle rejected on leave day");
                return ToggleOutcome::Rejected {
                    reason: ToggleRejection::OnLeave,
                };
            }
            DayStatus::Attended => DayStatus::Unmarked,
            DayStatus::Unmarked => DayStatus::Attended,
        };

        self.set_status(date, status);
        ToggleOutcome::Updated { status }
    }

    /// Flips a day between annual leave and unmarked.
    ///
    /// Putting an attended day on leave removes the attendance. Weekends and
    /// bank holidays are left untouched.
    pub fn toggle_leave<L: HolidayLookup + ?Sized>(
        &mut self,
        lookup: &L,
        date: DateKey,
    ) -> ToggleOutcome {
        if is_non_working_day(lookup, date.date()) {
            debug!(date = %date, "Leave toggle rejected on non-working day");
            return ToggleOutcome::Rejected {
                reason: ToggleRejection::NonWorkingDay,
            };
        }

        let status = match self.status(date) {
            DayStatus::OnLeave => DayStatus::Unmarked,
            DayStatus::Attended | DayStatus::Unmarked => DayStatus::OnLeave,
        };

        self.set_status(date, status);
        ToggleOutcome::Updated { status }
    }

    /// Marks every working `weekday` of the current month as attended,
    /// skipping leave days.
    ///
    /// Existing attendance elsewhere is kept. Returns how many days were newly
    /// marked.
    pub fn mark_weekday<L: HolidayLookup + ?Sized>(&mut self, lookup: &L, weekday: Workday) -> usize {
        let month_days = enumerate_month_days(self.current_month);
        let leave = self.leave_in(self.current_month);
        let selected = mark_weekday_pattern(lookup, weekday, &month_days, &leave);

        let mut added = 0;
        for date in selected {
            if self.days.insert(date, DayStatus::Attended) != Some(DayStatus::Attended) {
                added += 1;
            }
        }
        self.selected_weekday = Some(weekday);

        debug!(
            month = %self.current_month,
            weekday = %weekday,
            added,
            "Marked weekday pattern"
        );
        added
    }

    /// Clears attendance and leave for every day of the current month.
    ///
    /// Returns how many records were removed.
    pub fn reset_month(&mut self) -> usize {
        let month = self.current_month;
        let before = self.days.len();
        self.days.retain(|date, _| !month.contains_key(date));
        before - self.days.len()
    }

    /// Dates in `month` marked attended.
    pub fn attended_in(&self, month: MonthScope) -> BTreeSet<DateKey> {
        self.keys_with_status(month, DayStatus::Attended)
    }

    /// Dates in `month` marked as annual leave.
    pub fn leave_in(&self, month: MonthScope) -> BTreeSet<DateKey> {
        self.keys_with_status(month, DayStatus::OnLeave)
    }

    /// Attendance figures for the current month.
    pub fn summary<L: HolidayLookup + ?Sized>(&self, lookup: &L, min_rate: f64) -> MonthSummary {
        self.summary_for(lookup, self.current_month, min_rate)
    }

    /// Attendance figures for any month.
    pub fn summary_for<L: HolidayLookup + ?Sized>(
        &self,
        lookup: &L,
        month: MonthScope,
        min_rate: f64,
    ) -> MonthSummary {
        summarize_month(
            lookup,
            month,
            &self.attended_in(month),
            &self.leave_in(month),
            min_rate,
        )
    }

    /// Every day of `month`, classified and carrying its recorded status.
    pub fn calendar<L: HolidayLookup + ?Sized>(&self, lookup: &L, month: MonthScope) -> Vec<CalendarDay> {
        enumerate_month_days(month)
            .into_iter()
            .map(|day| classify_day(lookup, day, self.status(DateKey::new(day))))
            .collect()
    }

    /// All leave grouped by month, current month first and the rest newest
    /// first.
    pub fn leave_summary(&self) -> LeaveSummary {
        let mut by_month: BTreeMap<MonthScope, Vec<DateKey>> = BTreeMap::new();
        for (date, status) in &self.days {
            if *status == DayStatus::OnLeave {
                by_month
                    .entry(MonthScope::containing(date.date()))
                    .or_default()
                    .push(*date);
            }
        }

        let total_days = by_month.values().map(Vec::len).sum::<usize>() as u32;
        let current = self.current_month;
        let mut months: Vec<LeaveMonth> = by_month
            .into_iter()
            .map(|(month, days)| LeaveMonth {
                month,
                label: month.label(),
                days,
            })
            .collect();
        months.sort_by(|a, b| {
            (b.month == current)
                .cmp(&(a.month == current))
                .then_with(|| b.month.cmp(&a.month))
        });

        LeaveSummary { total_days, months }
    }

    fn set_status(&mut self, date: DateKey, status: DayStatus) {
        if status == DayStatus::Unmarked {
            self.days.remove(&date);
        } else {
            self.days.insert(date, status);
        }
    }

    fn keys_with_status(&self, month: MonthScope, wanted: DayStatus) -> BTreeSet<DateKey> {
        self.days
            .range(DateKey::new(month.first_day())..=DateKey::new(month.last_day()))
            .filter(|(_, status)| **status == wanted)
            .map(|(date, _)| *date)
            .collect()
    }
}
