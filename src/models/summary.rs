//! Summary models returned to the display layer.

use serde::{Deserialize, Serialize};

use super::{DateKey, MonthScope};

/// Threshold below which a rate is shown as well short of target.
pub const NEAR_TARGET_FLOOR: f64 = 0.3;

/// Coarse progress band for an attendance rate.
///
/// # Example
///
/// ```
/// use office_attendance::models::RateBand;
///
/// assert_eq!(RateBand::classify(0.2, 0.4), RateBand::BelowTarget);
/// assert_eq!(RateBand::classify(0.35, 0.4), RateBand::NearTarget);
/// assert_eq!(RateBand::classify(0.4, 0.4), RateBand::OnTarget);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBand {
    /// Rate below 30%.
    BelowTarget,
    /// At least 30% but still under the minimum rate.
    NearTarget,
    /// At or above the minimum rate.
    OnTarget,
}

impl RateBand {
    /// Places `rate` into a band relative to `min_rate`.
    pub fn classify(rate: f64, min_rate: f64) -> Self {
        if rate >= min_rate {
            RateBand::OnTarget
        } else if rate >= NEAR_TARGET_FLOOR {
            RateBand::NearTarget
        } else {
            RateBand::BelowTarget
        }
    }
}

/// Attendance figures for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// The month summarised.
    pub month: MonthScope,
    /// Display label, e.g. "May 2024".
    pub label: String,
    /// Calendar days in the month.
    pub total_days: u32,
    /// Days that are neither weekend nor bank holiday.
    pub working_days: u32,
    /// Days marked attended in the month.
    pub attended_days: u32,
    /// Days marked as annual leave in the month.
    pub leave_days: u32,
    /// Working days minus leave days. Negative only when leave exceeds
    /// working days.
    pub available_working_days: i64,
    /// Attended divided by available, in `[0, 1]`.
    pub attendance_rate: f64,
    /// The rate as a rounded whole percentage.
    pub rate_percent: u32,
    /// Further attended days required to reach `min_rate`.
    pub days_needed: u32,
    /// The target rate the summary was computed against.
    pub min_rate: f64,
    /// Whether `attendance_rate` meets `min_rate`.
    pub target_reached: bool,
    /// Progress band for the rate.
    pub rate_band: RateBand,
}

impl MonthSummary {
    /// Available working days clamped at zero for display.
    pub fn available_for_display(&self) -> u32 {
        self.available_working_days.max(0) as u32
    }
}

/// Leave days recorded in a single month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveMonth {
    /// The month.
    pub month: MonthScope,
    /// Display label, e.g. "May 2024".
    pub label: String,
    /// Leave days in ascending order.
    pub days: Vec<DateKey>,
}

/// All recorded annual leave grouped by month.
///
/// The current month comes first, the remaining months newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSummary {
    /// Total leave days across every month.
    pub total_days: u32,
    /// Per-month groups.
    pub months: Vec<LeaveMonth>,
}
