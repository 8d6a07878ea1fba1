//! Performance benchmarks for the office attendance engine.
//!
//! Covers the hot paths behind every screen refresh:
//! - Month summary over a populated store
//! - Classified calendar for a month
//! - Summaries for a range of months
//! - Full month view through the HTTP router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::BTreeSet;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use office_attendance::api::{AppState, create_router};
use office_attendance::calculation::{DEFAULT_MIN_RATE, summarize_month};
use office_attendance::calendar::HolidayTable;
use office_attendance::config::ConfigLoader;
use office_attendance::models::{DateKey, MonthScope, Workday};
use office_attendance::store::AttendanceStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a store with two years of Tuesday/Wednesday attendance and some
/// leave.
fn create_populated_store(table: &HolidayTable) -> AttendanceStore {
    let mut store = AttendanceStore::new(MonthScope::new(2024, 1).unwrap());
    for _ in 0..24 {
        store.mark_weekday(table, Workday::Tuesday);
        store.mark_weekday(table, Workday::Wednesday);
        store.next_month();
    }
    for day in [8, 9, 10, 11, 12] {
        if let Some(date) = DateKey::from_ymd(2024, 7, day) {
            store.toggle_leave(table, date);
        }
    }
    store.set_month(MonthScope::new(2024, 5).unwrap());
    store
}

/// Benchmark: Summary for one month from pre-built sets.
fn bench_summarize_month(c: &mut Criterion) {
    let table = HolidayTable::england();
    let store = create_populated_store(&table);
    let month = MonthScope::new(2024, 7).unwrap();
    let attended = store.attended_in(month);
    let leave = store.leave_in(month);

    c.bench_function("summarize_month", |b| {
        b.iter(|| {
            black_box(summarize_month(
                &table,
                black_box(month),
                &attended,
                &leave,
                DEFAULT_MIN_RATE,
            ))
        })
    });

    let empty = BTreeSet::new();
    c.bench_function("summarize_month_empty", |b| {
        b.iter(|| black_box(summarize_month(&table, black_box(month), &empty, &empty, DEFAULT_MIN_RATE)))
    });
}

/// Benchmark: Classified calendar for the current month.
fn bench_calendar(c: &mut Criterion) {
    let table = HolidayTable::england();
    let store = create_populated_store(&table);
    let month = store.current_month();

    c.bench_function("calendar", |b| {
        b.iter(|| black_box(store.calendar(&table, black_box(month))))
    });
}

/// Benchmark: Store summaries over increasing month ranges.
fn bench_summary_scaling(c: &mut Criterion) {
    let table = HolidayTable::england();
    let store = create_populated_store(&table);

    let mut group = c.benchmark_group("summary_scaling");

    for month_count in [1usize, 3, 6, 12, 24].iter() {
        let months: Vec<MonthScope> = std::iter::successors(MonthScope::new(2024, 1).ok(), |m| {
            Some(m.next())
        })
        .take(*month_count)
        .collect();

        group.throughput(Throughput::Elements(*month_count as u64));
        group.bench_with_input(BenchmarkId::new("months", month_count), &months, |b, months| {
            b.iter(|| {
                for month in months {
                    black_box(store.summary_for(&table, *month, DEFAULT_MIN_RATE));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark: GET /current through the router.
fn bench_month_view_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/england").expect("Failed to load config");
    let store = create_populated_store(config.holidays());
    let router = create_router(AppState::new(config, store));

    c.bench_function("month_view_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/current")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_summarize_month,
    bench_calendar,
    bench_summary_scaling,
    bench_month_view_request,
);
criterion_main!(benches);
