//! Calendar day classification for the office attendance engine.
//!
//! This module classifies dates as weekends, bank holidays or working days,
//! enumerates month days, counts working days and builds the display grid.
//! Holiday data comes from a [`HolidayLookup`] rather than being hardcoded.

mod classifier;
mod holidays;

pub use classifier::{
    HolidayCheck, classify_day, count_working_days_in_month, enumerate_month_days,
    generate_calendar_grid, is_bank_holiday, is_non_working_day, is_weekend,
};
pub use holidays::{HolidayLookup, HolidayTable};
