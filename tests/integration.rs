//! Integration tests for the office attendance engine.
//!
//! This test suite drives the HTTP API end to end:
//! - Monthly attendance figures for May 2024
//! - Attendance and leave toggling, including rejected toggles
//! - Bulk weekday marking
//! - Month navigation and reset
//! - Bank holiday lookup and the leave summary
//! - Store persistence
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Datelike, Weekday};
use serde_json::{Value, json};
use tower::ServiceExt;

use office_attendance::api::{AppState, create_router};
use office_attendance::config::ConfigLoader;
use office_attendance::models::{DateKey, DayStatus, MonthScope};
use office_attendance::store::AttendanceStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn may_2024() -> MonthScope {
    MonthScope::new(2024, 5).unwrap()
}

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/england").expect("Failed to load config");
    AppState::new(config, AttendanceStore::new(may_2024()))
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn toggle_attendance(router: &Router, date: &str) -> Value {
    let (status, json) = send(router, "POST", &format!("/days/{date}/attendance"), None).await;
    assert_eq!(status, StatusCode::OK);
    json
}

async fn toggle_leave(router: &Router, date: &str) -> Value {
    let (status, json) = send(router, "POST", &format!("/days/{date}/leave"), None).await;
    assert_eq!(status, StatusCode::OK);
    json
}

/// Every working day of May 2024 under the England table.
fn may_2024_working_days() -> Vec<String> {
    let holidays = ["2024-05-06", "2024-05-27"];
    (1..=31)
        .filter_map(|day| DateKey::from_ymd(2024, 5, day))
        .filter(|key| !matches!(key.date().weekday(), Weekday::Sat | Weekday::Sun))
        .map(|key| key.to_string())
        .filter(|key| !holidays.contains(&key.as_str()))
        .collect()
}

// =============================================================================
// Monthly Figures
// =============================================================================

#[tokio::test]
async fn test_fresh_month_needs_nine_days() {
    let router = create_router_for_test();
    let (status, json) = send(&router, "GET", "/current", None).await;

    assert_eq!(status, StatusCode::OK);
    let summary = &json["summary"];
    assert_eq!(summary["label"], "May 2024");
    assert_eq!(summary["total_days"], 31);
    assert_eq!(summary["working_days"], 21);
    assert_eq!(summary["attended_days"], 0);
    assert_eq!(summary["attendance_rate"], 0.0);
    assert_eq!(summary["days_needed"], 9);
    assert_eq!(summary["target_reached"], false);
    assert_eq!(summary["rate_band"], "below_target");
}

#[tokio::test]
async fn test_month_view_classifies_days() {
    let router = create_router_for_test();
    let (_, json) = send(&router, "GET", "/months/2024-05", None).await;

    let days = json["days"].as_array().unwrap();
    assert_eq!(days.len(), 31);
    assert_eq!(days[0]["date"], "2024-05-01");
    assert_eq!(days[0]["kind"], "working");
    assert_eq!(days[3]["kind"], "weekend");
    assert_eq!(days[5]["kind"], "bank_holiday");
    assert_eq!(days[5]["holiday_name"], "Early May Bank Holiday");

    // 1 May 2024 is a Wednesday: two leading blanks.
    let grid = json["grid"].as_array().unwrap();
    assert_eq!(grid[0], Value::Null);
    assert_eq!(grid[1], Value::Null);
    assert_eq!(grid[2], "2024-05-01");
}

#[tokio::test]
async fn test_tuesdays_and_wednesdays_reach_target() {
    let router = create_router_for_test();
    send(&router, "POST", "/current/weekdays/tuesday", None).await;
    let (status, json) = send(&router, "POST", "/current/weekdays/wednesday", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["weekday"], "wednesday");
    assert_eq!(json["added"], 5);

    let summary = &json["summary"];
    assert_eq!(summary["attended_days"], 9);
    assert_eq!(summary["rate_percent"], 43);
    assert_eq!(summary["days_needed"], 0);
    assert_eq!(summary["target_reached"], true);
    assert_eq!(summary["rate_band"], "on_target");
}

#[tokio::test]
async fn test_leave_reduces_available_days() {
    let router = create_router_for_test();
    for date in ["2024-05-07", "2024-05-08", "2024-05-09", "2024-05-10", "2024-05-13"] {
        toggle_leave(&router, date).await;
    }

    let (_, json) = send(&router, "GET", "/current", None).await;
    let summary = &json["summary"];
    assert_eq!(summary["leave_days"], 5);
    assert_eq!(summary["available_working_days"], 16);
    // ceil(16 * 0.4) = 7
    assert_eq!(summary["days_needed"], 7);
}

#[tokio::test]
async fn test_whole_month_on_leave_counts_as_full_attendance() {
    let router = create_router_for_test();
    for date in may_2024_working_days() {
        toggle_leave(&router, &date).await;
    }

    let (_, json) = send(&router, "GET", "/current", None).await;
    let summary = &json["summary"];
    assert_eq!(summary["available_working_days"], 0);
    assert_eq!(summary["attendance_rate"], 1.0);
    assert_eq!(summary["days_needed"], 0);
    assert_eq!(summary["target_reached"], true);
    assert_eq!(json["available_days_display"], 0);
}

#[tokio::test]
async fn test_month_without_holiday_data_counts_weekdays() {
    let router = create_router_for_test();
    let (status, json) = send(&router, "GET", "/months/2030-12", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"]["working_days"], 22);
}

// =============================================================================
// Toggling
// =============================================================================

#[tokio::test]
async fn test_toggle_attendance_round_trip() {
    let router = create_router_for_test();

    let json = toggle_attendance(&router, "2024-05-14").await;
    assert_eq!(json["status"], "attended");
    assert_eq!(json["summary"]["attended_days"], 1);

    let json = toggle_attendance(&router, "2024-05-14").await;
    assert_eq!(json["status"], "unmarked");
    assert_eq!(json["summary"]["attended_days"], 0);
}

#[tokio::test]
async fn test_weekend_and_holiday_toggles_are_rejected() {
    let router = create_router_for_test();

    let json = toggle_attendance(&router, "2024-05-04").await;
    assert_eq!(json["outcome"], "rejected");
    assert_eq!(json["reason"], "non_working_day");

    let json = toggle_leave(&router, "2024-05-06").await;
    assert_eq!(json["outcome"], "rejected");
    assert_eq!(json["summary"]["leave_days"], 0);
}

#[tokio::test]
async fn test_attendance_and_leave_are_exclusive() {
    let state = create_test_state();
    let router = create_router(state.clone());

    toggle_attendance(&router, "2024-05-09").await;
    let json = toggle_leave(&router, "2024-05-09").await;
    assert_eq!(json["status"], "on_leave");
    assert_eq!(json["summary"]["attended_days"], 0);
    assert_eq!(json["summary"]["leave_days"], 1);

    let json = toggle_attendance(&router, "2024-05-09").await;
    assert_eq!(json["outcome"], "rejected");
    assert_eq!(json["reason"], "on_leave");

    let store = state.store().read().await;
    assert_eq!(
        store.status(DateKey::parse("2024-05-09").unwrap()),
        DayStatus::OnLeave
    );
}

#[tokio::test]
async fn test_toggle_outside_current_month_reports_that_month() {
    let router = create_router_for_test();
    let json = toggle_attendance(&router, "2024-06-04").await;

    assert_eq!(json["summary"]["month"], "2024-06");
    assert_eq!(json["summary"]["attended_days"], 1);

    let (_, current) = send(&router, "GET", "/current", None).await;
    assert_eq!(current["summary"]["attended_days"], 0);
}

#[tokio::test]
async fn test_mark_weekday_skips_leave_and_keeps_existing() {
    let router = create_router_for_test();
    toggle_attendance(&router, "2024-05-07").await;
    toggle_leave(&router, "2024-05-17").await;

    let (_, json) = send(&router, "POST", "/current/weekdays/friday", None).await;
    // Fridays: 3, 10, 17 (leave), 24, 31
    assert_eq!(json["added"], 4);
    assert_eq!(json["summary"]["attended_days"], 5);
    assert_eq!(json["summary"]["leave_days"], 1);
}

// =============================================================================
// Navigation and Reset
// =============================================================================

#[tokio::test]
async fn test_month_navigation_rolls_over_year() {
    let router = create_router_for_test();

    let (status, json) = send(&router, "PUT", "/current", Some(json!({ "month": "2024-12" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"]["month"], "2024-12");

    let (_, json) = send(&router, "POST", "/current/next", None).await;
    assert_eq!(json["summary"]["month"], "2025-01");
    assert_eq!(json["summary"]["label"], "January 2025");

    send(&router, "POST", "/current/previous", None).await;
    let (_, json) = send(&router, "POST", "/current/previous", None).await;
    assert_eq!(json["summary"]["month"], "2024-11");
}

#[tokio::test]
async fn test_reset_clears_only_current_month() {
    let router = create_router_for_test();
    toggle_attendance(&router, "2024-05-07").await;
    toggle_leave(&router, "2024-05-08").await;
    toggle_attendance(&router, "2024-06-04").await;

    let (status, json) = send(&router, "DELETE", "/current", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["month"], "2024-05");
    assert_eq!(json["removed"], 2);
    assert_eq!(json["summary"]["attended_days"], 0);
    assert_eq!(json["summary"]["leave_days"], 0);

    let (_, june) = send(&router, "GET", "/months/2024-06", None).await;
    assert_eq!(june["summary"]["attended_days"], 1);
}

// =============================================================================
// Holidays and Leave
// =============================================================================

#[tokio::test]
async fn test_holidays_for_known_year() {
    let router = create_router_for_test();
    let (status, json) = send(&router, "GET", "/holidays/2024", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["year"], 2024);
    let holidays = json["holidays"].as_array().unwrap();
    assert_eq!(holidays.len(), 8);
    assert_eq!(holidays[0]["title"], "New Year's Day");
    assert_eq!(holidays[0]["date"], "2024-01-01");
}

#[tokio::test]
async fn test_holidays_for_unknown_year_is_empty() {
    let router = create_router_for_test();
    let (status, json) = send(&router, "GET", "/holidays/2030", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["holidays"], json!([]));
}

#[tokio::test]
async fn test_leave_summary_groups_by_month() {
    let router = create_router_for_test();
    toggle_leave(&router, "2024-03-04").await;
    toggle_leave(&router, "2024-05-07").await;
    toggle_leave(&router, "2024-05-08").await;
    toggle_leave(&router, "2024-04-02").await;

    let (status, json) = send(&router, "GET", "/leave", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_days"], 4);

    let months: Vec<&str> = json["months"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["month"].as_str().unwrap())
        .collect();
    assert_eq!(months, vec!["2024-05", "2024-04", "2024-03"]);
    assert_eq!(json["months"][0]["days"], json!(["2024-05-07", "2024-05-08"]));
}

// =============================================================================
// Persistence
// =============================================================================

#[tokio::test]
async fn test_save_writes_store_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("attendance.json");
    let state = create_test_state().with_store_path(&path);
    let router = create_router(state);

    toggle_attendance(&router, "2024-05-07").await;
    toggle_leave(&router, "2024-05-08").await;

    let (status, json) = send(&router, "POST", "/save", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["saved"], true);

    let loaded = AttendanceStore::load(&path, MonthScope::new(2000, 1).unwrap()).unwrap();
    assert_eq!(loaded.current_month(), may_2024());
    assert_eq!(
        loaded.status(DateKey::parse("2024-05-07").unwrap()),
        DayStatus::Attended
    );
    assert_eq!(
        loaded.status(DateKey::parse("2024-05-08").unwrap()),
        DayStatus::OnLeave
    );
}

// =============================================================================
// Error Cases
// =============================================================================

#[tokio::test]
async fn test_invalid_path_segments_return_400() {
    let router = create_router_for_test();

    let cases = [
        ("GET", "/months/2024-5", "INVALID_MONTH"),
        ("GET", "/months/May-2024", "INVALID_MONTH"),
        ("POST", "/days/2024-13-01/attendance", "INVALID_DATE"),
        ("POST", "/days/yesterday/leave", "INVALID_DATE"),
        ("POST", "/current/weekdays/sunday", "INVALID_WEEKDAY"),
        ("GET", "/holidays/twenty", "INVALID_YEAR"),
    ];

    for (method, uri, code) in cases {
        let (status, json) = send(&router, method, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(json["code"], code, "{method} {uri}");
    }
}

#[tokio::test]
async fn test_set_month_with_invalid_month_returns_400() {
    let router = create_router_for_test();
    let (status, json) = send(&router, "PUT", "/current", Some(json!({ "month": "2024-00" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_MONTH");
}
