//! HTTP request handlers for the office attendance API.
//!
//! This module contains the handler functions for all API endpoints. Path
//! segments arrive as raw strings and are parsed here so malformed dates,
//! months and weekdays map onto the API's own error codes.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::HolidayLookup;
use crate::models::{DateKey, MonthScope, Workday};
use crate::store::ToggleOutcome;

use super::request::{RateQuery, SetMonthRequest};
use super::response::{
    ApiError, ApiErrorResponse, HolidaysResponse, MarkWeekdayResponse, MonthView, ResetResponse,
    SaveResponse, ToggleResponse,
};
use super::state::AppState;

type HandlerResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/months/:month", get(month_view_handler))
        .route(
            "/current",
            get(current_view_handler)
                .put(set_month_handler)
                .delete(reset_month_handler),
        )
        .route("/current/next", post(next_month_handler))
        .route("/current/previous", post(previous_month_handler))
        .route("/current/weekdays/:weekday", post(mark_weekday_handler))
        .route("/days/:date/attendance", post(toggle_attendance_handler))
        .route("/days/:date/leave", post(toggle_leave_handler))
        .route("/holidays/:year", get(holidays_handler))
        .route("/leave", get(leave_summary_handler))
        .route("/save", post(save_handler))
        .with_state(state)
}

/// Handler for GET /months/:month.
async fn month_view_handler(
    State(state): State<AppState>,
    Path(month): Path<String>,
    query: Result<Query<RateQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, month = %month, "Processing month view request");
    respond(correlation_id, month_view(&state, &month, query).await)
}

async fn month_view(
    state: &AppState,
    month: &str,
    query: Result<Query<RateQuery>, QueryRejection>,
) -> HandlerResult<MonthView> {
    let month = MonthScope::parse(month)?;
    let min_rate = resolve_min_rate(state, query)?;
    let store = state.store().read().await;
    Ok(MonthView::build(&store, state.config().holidays(), month, min_rate))
}

/// Handler for GET /current.
async fn current_view_handler(
    State(state): State<AppState>,
    query: Result<Query<RateQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing current month view request");
    respond(correlation_id, current_view(&state, query).await)
}

async fn current_view(
    state: &AppState,
    query: Result<Query<RateQuery>, QueryRejection>,
) -> HandlerResult<MonthView> {
    let min_rate = resolve_min_rate(state, query)?;
    let store = state.store().read().await;
    let month = store.current_month();
    Ok(MonthView::build(&store, state.config().holidays(), month, min_rate))
}

/// Handler for PUT /current.
async fn set_month_handler(
    State(state): State<AppState>,
    payload: Result<Json<SetMonthRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing set month request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let mut store = state.store().write().await;
    store.set_month(request.month);
    info!(correlation_id = %correlation_id, month = %request.month, "Current month set");

    let view = MonthView::build(
        &store,
        state.config().holidays(),
        request.month,
        state.config().min_rate(),
    );
    respond(correlation_id, Ok(view))
}

/// Handler for POST /current/next.
async fn next_month_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let mut store = state.store().write().await;
    let month = store.next_month();
    info!(correlation_id = %correlation_id, month = %month, "Moved to next month");

    let view = MonthView::build(&store, state.config().holidays(), month, state.config().min_rate());
    respond(correlation_id, Ok(view))
}

/// Handler for POST /current/previous.
async fn previous_month_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let mut store = state.store().write().await;
    let month = store.previous_month();
    info!(correlation_id = %correlation_id, month = %month, "Moved to previous month");

    let view = MonthView::build(&store, state.config().holidays(), month, state.config().min_rate());
    respond(correlation_id, Ok(view))
}

/// Handler for DELETE /current.
///
/// Clears attendance and leave for the current month only.
async fn reset_month_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let mut store = state.store().write().await;
    let month = store.current_month();
    let removed = store.reset_month();
    info!(correlation_id = %correlation_id, month = %month, removed, "Reset month");

    let summary = store.summary(state.config().holidays(), state.config().min_rate());
    respond(
        correlation_id,
        Ok(ResetResponse {
            month,
            removed,
            summary,
        }),
    )
}

/// Handler for POST /current/weekdays/:weekday.
async fn mark_weekday_handler(
    State(state): State<AppState>,
    Path(weekday): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, weekday = %weekday, "Processing weekday mark request");
    respond(correlation_id, mark_weekday(&state, &weekday, correlation_id).await)
}

async fn mark_weekday(
    state: &AppState,
    weekday: &str,
    correlation_id: Uuid,
) -> HandlerResult<MarkWeekdayResponse> {
    let weekday: Workday = weekday.parse()?;
    let mut store = state.store().write().await;
    let added = store.mark_weekday(state.config().holidays(), weekday);
    info!(
        correlation_id = %correlation_id,
        month = %store.current_month(),
        weekday = %weekday,
        added,
        "Weekday pattern marked"
    );
    Ok(MarkWeekdayResponse {
        weekday,
        added,
        summary: store.summary(state.config().holidays(), state.config().min_rate()),
    })
}

/// Handler for POST /days/:date/attendance.
async fn toggle_attendance_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Processing attendance toggle request");
    respond(
        correlation_id,
        toggle_day(&state, &date, DayToggle::Attendance, correlation_id).await,
    )
}

/// Handler for POST /days/:date/leave.
async fn toggle_leave_handler(State(state): State<AppState>, Path(date): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Processing leave toggle request");
    respond(
        correlation_id,
        toggle_day(&state, &date, DayToggle::Leave, correlation_id).await,
    )
}

#[derive(Debug, Clone, Copy)]
enum DayToggle {
    Attendance,
    Leave,
}

async fn toggle_day(
    state: &AppState,
    date: &str,
    toggle: DayToggle,
    correlation_id: Uuid,
) -> HandlerResult<ToggleResponse> {
    let date = DateKey::parse(date)?;
    let holidays = state.config().holidays();
    let mut store = state.store().write().await;

    let outcome = match toggle {
        DayToggle::Attendance => store.toggle_attendance(holidays, date),
        DayToggle::Leave => store.toggle_leave(holidays, date),
    };
    match outcome {
        ToggleOutcome::Updated { status } => {
            info!(correlation_id = %correlation_id, date = %date, status = ?status, "Day updated");
        }
        ToggleOutcome::Rejected { reason } => {
            info!(correlation_id = %correlation_id, date = %date, reason = ?reason, "Toggle rejected");
        }
    }

    let month = MonthScope::containing(date.date());
    Ok(ToggleResponse {
        date,
        outcome,
        summary: store.summary_for(holidays, month, state.config().min_rate()),
    })
}

/// Handler for GET /holidays/:year.
///
/// Years the table does not cover return an empty list.
async fn holidays_handler(State(state): State<AppState>, Path(year): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();

    let result = match parse_year(&year) {
        Some(parsed) => Ok(HolidaysResponse {
            year: parsed,
            holidays: state.config().holidays().holidays_for_year(parsed).to_vec(),
        }),
        None => Err(ApiErrorResponse::bad_request(ApiError::invalid_year(&year))),
    };

    respond(correlation_id, result)
}

/// Handler for GET /leave.
async fn leave_summary_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let summary = state.store().read().await.leave_summary();
    info!(correlation_id = %correlation_id, total_days = summary.total_days, "Leave summary built");
    respond(correlation_id, Ok(summary))
}

/// Handler for POST /save.
async fn save_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = state
        .save()
        .await
        .map(|path| SaveResponse {
            saved: path.is_some(),
            path: path.map(|p| p.display().to_string()),
        })
        .map_err(ApiErrorResponse::from);
    respond(correlation_id, result)
}

/// Picks the request's target rate, falling back to the configured one.
fn resolve_min_rate(
    state: &AppState,
    query: Result<Query<RateQuery>, QueryRejection>,
) -> HandlerResult<f64> {
    let Query(query) = query.map_err(|rejection| {
        ApiErrorResponse::bad_request(ApiError::new("INVALID_QUERY", rejection.body_text()))
    })?;

    match query.min_rate {
        None => Ok(state.config().min_rate()),
        Some(rate) if (0.0..=1.0).contains(&rate) => Ok(rate),
        Some(rate) => Err(ApiErrorResponse::bad_request(ApiError::invalid_min_rate(rate))),
    }
}

fn parse_year(value: &str) -> Option<i32> {
    if value.len() != 4 || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else if body_text.contains("Invalid month") {
                ApiError::new("INVALID_MONTH", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn respond<T: Serialize>(correlation_id: Uuid, result: HandlerResult<T>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(api_error) => {
            warn!(
                correlation_id = %correlation_id,
                code = %api_error.error.code,
                error = %api_error.error.message,
                "Request failed"
            );
            api_error.into_response()
        }
    }
}
