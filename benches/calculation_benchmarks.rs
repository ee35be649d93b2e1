//! Performance benchmarks for the Leave Engine.
//!
//! Covers the day-counting core over growing ranges, holiday set
//! construction from the configured calendars, and the full HTTP path.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use leave_engine::api::{AppState, create_router};
use leave_engine::calculation::{build_holiday_set, calculate_leave_days};
use leave_engine::config::ConfigLoader;
use leave_engine::models::{DateRange, DayPortion};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/university").expect("Failed to load config");
    AppState::new(config)
}

fn range_of(days: u64) -> DateRange {
    let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let end = start.checked_add_days(Days::new(days - 1)).unwrap();
    DateRange::new(start, end).unwrap()
}

/// Benchmark: Day counting as the range grows, against configured holidays.
fn bench_leave_days_scaling(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/university").expect("Failed to load config");

    let mut group = c.benchmark_group("leave_days");

    for days in [1u64, 5, 30, 180, 365].iter() {
        let range = range_of(*days);
        let holidays = config.holidays_for_range(&range);

        group.throughput(Throughput::Elements(*days));
        group.bench_with_input(BenchmarkId::new("days", days), &range, |b, range| {
            b.iter(|| {
                calculate_leave_days(
                    black_box(range),
                    DayPortion::Afternoon,
                    DayPortion::Morning,
                    black_box(&holidays),
                )
            })
        });
    }

    group.finish();
}

/// Benchmark: Expanding every configured holiday interval into a set.
fn bench_build_holiday_set(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/university").expect("Failed to load config");
    let holidays = config.holidays();

    c.bench_function("build_holiday_set", |b| {
        b.iter(|| build_holiday_set(black_box(&holidays)))
    });
}

/// Benchmark: A week of annual leave through the HTTP API.
fn bench_calculate_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "start_date": "2025-09-29",
        "end_date": "2025-10-10",
        "start_portion": "afternoon",
        "end_portion": "full",
        "leave_type": "annual",
        "remaining_balance": "10"
    })
    .to_string();

    c.bench_function("calculate_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 requests with varying ranges and leave types.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();

    let requests: Vec<String> = (0..100u64)
        .map(|i| {
            let first = start.checked_add_days(Days::new(i)).unwrap();
            let last = first.checked_add_days(Days::new(i % 14)).unwrap();
            serde_json::json!({
                "start_date": first,
                "end_date": last,
                "start_portion": if i % 2 == 0 { "full" } else { "afternoon" },
                "end_portion": "full",
                "leave_type": if i % 3 == 0 { "sick" } else { "annual" }
            })
            .to_string()
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_leave_days_scaling,
    bench_build_holiday_set,
    bench_calculate_request,
    bench_batch_100,
);
criterion_main!(benches);
