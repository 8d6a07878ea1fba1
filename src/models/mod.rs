//! Core data models for the office attendance engine.
//!
//! This module contains the domain models shared by the classifier, the
//! calculator, the store and the HTTP API.

mod date_key;
mod day;
mod holiday;
mod month;
mod summary;

pub use date_key::{DATE_KEY_FORMAT, DateKey};
pub use day::{CalendarDay, DayKind, DayStatus, Workday};
pub use holiday::BankHoliday;
pub use month::MonthScope;
pub use summary::{LeaveMonth, LeaveSummary, MonthSummary, NEAR_TARGET_FLOOR, RateBand};
