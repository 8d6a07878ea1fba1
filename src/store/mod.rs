//! Attendance state for the office attendance engine.
//!
//! This module provides the caller-owned [`AttendanceStore`] with the
//! mutations that keep attendance and leave mutually exclusive, and its JSON
//! persistence.
//!
//! # Example
//!
//! ```
//! use office_attendance::calculation::DEFAULT_MIN_RATE;
//! use office_attendance::calendar::HolidayTable;
//! use office_attendance::models::{MonthScope, Workday};
//! use office_attendance::store::AttendanceStore;
//!
//! let table = HolidayTable::england();
//! let mut store = AttendanceStore::new(MonthScope::new(2024, 5).unwrap());
//! store.mark_weekday(&table, Workday::Tuesday);
//! store.mark_weekday(&table, Workday::Wednesday);
//!
//! let summary = store.summary(&table, DEFAULT_MIN_RATE);
//! assert_eq!(summary.attended_days, 9);
//! assert!(summary.target_reached);
//! ```

mod attendance_store;
mod snapshot;

pub use attendance_store::{AttendanceStore, ToggleOutcome, ToggleRejection};
pub use snapshot::StoreSnapshot;
