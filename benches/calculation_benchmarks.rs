//! Performance benchmarks for the novated lease engine.
//!
//! Covers a full quote analysis through the library and through the HTTP
//! router, scaling with lease term, and batches of saved quotes compared side
//! by side.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use novated_lease_engine::api::{AppState, create_router};
use novated_lease_engine::calculation::{analyze_quote, compare_quotes};
use novated_lease_engine::config::ConfigLoader;
use novated_lease_engine::import::default_quote;
use novated_lease_engine::models::{QuoteInput, SavedQuote};

use axum::{body::Body, http::Request};
use chrono::Utc;
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/au_2025_26").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a quote with the given term and price.
fn create_quote(duration_years: u32, price: i64) -> QuoteInput {
    let mut quote = default_quote();
    quote.lease_terms.duration_years = duration_years;
    quote.vehicle.purchase_price = Decimal::from(price);
    quote
}

/// Benchmark: Single analysis through the library.
fn bench_analyze_quote(c: &mut Criterion) {
    let state = create_test_state();
    let quote = create_quote(3, 50_000);

    c.bench_function("analyze_quote", |b| {
        b.iter(|| black_box(analyze_quote(black_box(&quote), state.policy())))
    });
}

/// Benchmark: Single analysis through POST /calculate.
fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::to_string(&create_quote(3, 50_000)).unwrap();

    c.bench_function("calculate_endpoint", |b| {
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

/// Benchmark: Lease terms from 1 to 7 years to understand scaling behavior.
fn bench_term_scaling(c: &mut Criterion) {
    let state = create_test_state();

    let mut group = c.benchmark_group("term_scaling");

    for years in [1u32, 2, 3, 4, 5, 7].iter() {
        let quote = create_quote(*years, 50_000);

        group.throughput(Throughput::Elements(u64::from(*years)));
        group.bench_with_input(BenchmarkId::new("years", years), years, |b, _| {
            b.iter(|| black_box(analyze_quote(&quote, state.policy())))
        });
    }

    group.finish();
}

/// Benchmark: Comparing 100 saved quotes.
fn bench_compare_100(c: &mut Criterion) {
    let state = create_test_state();

    let saved: Vec<SavedQuote> = (0..100)
        .map(|i| SavedQuote {
            id: format!("quote_bench_{:03}", i),
            name: format!("Quote {}", i),
            data: create_quote(1 + i % 5, 30_000 + i64::from(i) * 500),
            saved_at: Utc::now(),
            notes: None,
        })
        .collect();

    let mut group = c.benchmark_group("quote_comparison");
    group.throughput(Throughput::Elements(100));

    group.bench_function("compare_100", |b| {
        b.iter(|| black_box(compare_quotes(black_box(&saved), state.policy())))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_analyze_quote,
    bench_calculate_endpoint,
    bench_term_scaling,
    bench_compare_100,
);
criterion_main!(benches);
