//! Calculation logic for the office attendance engine.
//!
//! This module contains the attendance arithmetic: available working days,
//! attendance rate, days needed to reach a target rate, weekday pattern
//! selection for bulk marking, and the monthly summary that bundles them.

mod attendance_rate;
mod month_summary;
mod weekday_pattern;

pub use attendance_rate::{
    DEFAULT_MIN_RATE, attendance_rate, available_working_days, days_needed_for_rate, rate_percent,
};
pub use month_summary::summarize_month;
pub use weekday_pattern::mark_weekday_pattern;
