//! Response types for the office attendance API.
//!
//! This module defines the JSON bodies returned by the endpoints, the error
//! response structure, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calendar::{HolidayLookup, generate_calendar_grid};
use crate::error::AttendanceError;
use crate::models::{BankHoliday, CalendarDay, DateKey, MonthScope, MonthSummary, Workday};
use crate::store::{AttendanceStore, ToggleOutcome};

/// Everything the display layer needs to draw one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthView {
    /// Attendance figures for the month.
    pub summary: MonthSummary,
    /// Available working days clamped at zero.
    pub available_days_display: u32,
    /// Every day of the month, classified.
    pub days: Vec<CalendarDay>,
    /// Monday-first grid; `null` entries are padding before the 1st.
    pub grid: Vec<Option<DateKey>>,
}

impl MonthView {
    /// Builds the view of `month` from the store.
    pub fn build<L: HolidayLookup + ?Sized>(
        store: &AttendanceStore,
        lookup: &L,
        month: MonthScope,
        min_rate: f64,
    ) -> Self {
        let summary = store.summary_for(lookup, month, min_rate);
        Self {
            available_days_display: summary.available_for_display(),
            summary,
            days: store.calendar(lookup, month),
            grid: generate_calendar_grid(month)
                .into_iter()
                .map(|slot| slot.map(DateKey::new))
                .collect(),
        }
    }
}

/// Response to toggling a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleResponse {
    /// The day toggled.
    pub date: DateKey,
    /// What happened.
    #[serde(flatten)]
    pub outcome: ToggleOutcome,
    /// Figures for the day's month after the toggle.
    pub summary: MonthSummary,
}

/// Response to a weekday pattern mark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkWeekdayResponse {
    /// The weekday marked.
    pub weekday: Workday,
    /// Number of days newly marked attended.
    pub added: usize,
    /// Figures for the current month after marking.
    pub summary: MonthSummary,
}

/// Response to resetting the current month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetResponse {
    /// The month cleared.
    pub month: MonthScope,
    /// Number of records removed.
    pub removed: usize,
    /// Figures for the month after clearing.
    pub summary: MonthSummary,
}

/// Bank holidays for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaysResponse {
    /// The year requested.
    pub year: i32,
    /// Holidays in table order; empty for years the table does not cover.
    pub holidays: Vec<BankHoliday>,
}

/// Response to an explicit save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    /// Whether anything was written.
    pub saved: bool,
    /// The file written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid year error response.
    pub fn invalid_year(value: &str) -> Self {
        Self::with_details(
            "INVALID_YEAR",
            format!("Invalid year '{}'", value),
            "Years must be written as four digits, e.g. 2024",
        )
    }

    /// Creates an invalid target rate error response.
    pub fn invalid_min_rate(value: f64) -> Self {
        Self::with_details(
            "INVALID_MIN_RATE",
            format!("Invalid min_rate {}", value),
            "min_rate must be between 0 and 1",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<AttendanceError> for ApiErrorResponse {
    fn from(error: AttendanceError) -> Self {
        let message = error.to_string();
        match error {
            AttendanceError::ConfigNotFound { .. }
            | AttendanceError::ConfigParseError { .. }
            | AttendanceError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            AttendanceError::InvalidDateKey { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_DATE", message))
            }
            AttendanceError::InvalidMonth { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_MONTH", message))
            }
            AttendanceError::InvalidWeekday { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_WEEKDAY", message))
            }
            AttendanceError::StoreIo { .. } | AttendanceError::StoreParse { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "STORE_ERROR",
                        "Attendance store error",
                        message,
                    ),
                }
            }
        }
    }
}
