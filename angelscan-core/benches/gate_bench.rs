//! Criterion benchmarks for the screening hot paths.
//!
//! Benchmarks:
//! 1. Full gate pipeline (short-circuit and exhaustive) on a 300-bar series
//! 2. The Fallen-Angel gate alone (alignment + RS math dominates)
//! 3. Dynamic tightness window resolution

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use angelscan_core::gates::{evaluate_symbol, fallen_angel, tightness, EvalMode};
use angelscan_core::params::ScanParams;
use angelscan_core::synthetic::{benchmark, fallen_angel_stock};

fn end_date() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
}

fn bench_pipeline(c: &mut Criterion) {
    let stock = fallen_angel_stock("WIN", end_date());
    let bench = benchmark("QQQ", end_date());
    let params = ScanParams::default();

    c.bench_function("pipeline_short_circuit", |b| {
        b.iter(|| {
            evaluate_symbol(
                black_box(&stock),
                black_box(&bench),
                &params,
                EvalMode::ShortCircuit,
            )
        })
    });

    c.bench_function("pipeline_exhaustive", |b| {
        b.iter(|| {
            evaluate_symbol(
                black_box(&stock),
                black_box(&bench),
                &params,
                EvalMode::Exhaustive,
            )
        })
    });
}

fn bench_fallen_angel(c: &mut Criterion) {
    let stock = fallen_angel_stock("WIN", end_date());
    let bench = benchmark("QQQ", end_date());
    let params = ScanParams::default();

    c.bench_function("fallen_angel_gate", |b| {
        b.iter(|| fallen_angel::evaluate(black_box(&stock), black_box(&bench), &params))
    });
}

fn bench_tightness_window(c: &mut Criterion) {
    let opens: Vec<f64> = (0..10).map(|i| 100.0 + (i as f64 * 0.7).sin()).collect();
    let closes: Vec<f64> = (0..10).map(|i| 100.0 + (i as f64 * 0.9).cos()).collect();

    c.bench_function("tightness_resolve_window", |b| {
        b.iter(|| {
            tightness::resolve_window(black_box(&opens), black_box(&closes), 0.04, 0.035)
        })
    });
}

criterion_group!(
    benches,
    bench_pipeline,
    bench_fallen_angel,
    bench_tightness_window
);
criterion_main!(benches);
