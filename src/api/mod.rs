//! HTTP API module for the office attendance engine.
//!
//! This module exposes the attendance store over a small REST interface:
//! month views, day toggles, bulk weekday marking, navigation, bank holiday
//! lookup and the leave summary.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{RateQuery, SetMonthRequest};
pub use response::{
    ApiError, ApiErrorResponse, HolidaysResponse, MarkWeekdayResponse, MonthView, ResetResponse,
    SaveResponse, ToggleResponse,
};
pub use state::AppState;
