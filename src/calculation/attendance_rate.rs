//! Attendance rate calculation.
//!
//! This module provides the arithmetic at the heart of the engine: how many
//! working days remain available once leave is removed, what share of them
//! were attended, and how many more attended days are needed to reach a
//! target rate.
//!
//! All functions are total. Zero or negative availability has a defined
//! result instead of an error.

/// Default minimum attendance rate (40%).
pub const DEFAULT_MIN_RATE: f64 = 0.4;

/// Returns the working days left once annual leave is taken out.
///
/// The raw difference is preserved, so the result is negative when leave
/// exceeds working days. Displays should clamp it at zero.
///
/// # Arguments
///
/// * `working_days` - Days in the month that are neither weekend nor holiday
/// * `leave_days` - Days in the month marked as annual leave
///
/// # Examples
///
/// ```
/// use office_attendance::calculation::available_working_days;
///
/// assert_eq!(available_working_days(22, 5), 17);
/// assert_eq!(available_working_days(22, 22), 0);
/// ```
pub fn available_working_days(working_days: u32, leave_days: u32) -> i64 {
    i64::from(working_days) - i64::from(leave_days)
}

/// Returns the share of available working days that were attended.
///
/// When no working days are available the target is met vacuously and the
/// rate is `1.0`. Otherwise the rate is `attended / available`, capped at
/// `1.0`.
///
/// # Arguments
///
/// * `attended_days` - Days in the month marked attended
/// * `available_days` - Result of [`available_working_days`]
///
/// # Returns
///
/// A rate in `[0.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use office_attendance::calculation::attendance_rate;
///
/// assert_eq!(attendance_rate(0, 22), 0.0);
/// assert_eq!(attendance_rate(11, 22), 0.5);
/// assert_eq!(attendance_rate(0, 0), 1.0);
/// ```
pub fn attendance_rate(attended_days: u32, available_days: i64) -> f64 {
    if available_days <= 0 {
        return 1.0;
    }
    (f64::from(attended_days) / available_days as f64).min(1.0)
}

/// Returns how many more attended days are needed to reach `min_rate`.
///
/// The target is `ceil(available * min_rate)` days. The result never asks for
/// more days than remain available, so `days_needed + attended <= available`
/// holds whenever `attended <= available`.
///
/// # Arguments
///
/// * `attended_days` - Days in the month already marked attended
/// * `available_days` - Result of [`available_working_days`]
/// * `min_rate` - Target rate, e.g. [`DEFAULT_MIN_RATE`]
///
/// # Examples
///
/// ```
/// use office_attendance::calculation::{days_needed_for_rate, DEFAULT_MIN_RATE};
///
/// // ceil(22 * 0.4) = 9
/// assert_eq!(days_needed_for_rate(0, 22, DEFAULT_MIN_RATE), 9);
/// assert_eq!(days_needed_for_rate(9, 22, DEFAULT_MIN_RATE), 0);
/// assert_eq!(days_needed_for_rate(0, 0, DEFAULT_MIN_RATE), 0);
/// ```
pub fn days_needed_for_rate(attended_days: u32, available_days: i64, min_rate: f64) -> u32 {
    if available_days <= 0 {
        return 0;
    }

    let attended = i64::from(attended_days);
    let target = (available_days as f64 * min_rate).ceil() as i64;
    let needed = (target - attended).max(0);
    let remaining = available_days - attended;

    needed.min(remaining).max(0) as u32
}

/// Rounds a rate to a whole percentage for display.
///
/// # Examples
///
/// ```
/// use office_attendance::calculation::rate_percent;
///
/// assert_eq!(rate_percent(9.0 / 22.0), 41);
/// assert_eq!(rate_percent(1.0), 100);
/// ```
pub fn rate_percent(rate: f64) -> u32 {
    (rate.clamp(0.0, 1.0) * 100.0).round() as u32
}
