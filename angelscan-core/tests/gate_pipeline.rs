//! End-to-end gate pipeline tests on the synthetic fixtures.
//!
//! The golden fallen-angel shape must clear every gate; targeted
//! modifications must fail exactly the gate they were built to break.

use chrono::NaiveDate;

use angelscan_core::gates::{evaluate_symbol, EvalMode};
use angelscan_core::params::ScanParams;
use angelscan_core::synthetic::{
    benchmark, fallen_angel_stock, flat_stock, series_from_columns, FIXTURE_DAYS,
};

fn end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
}

fn gate<'a>(
    eval: &'a angelscan_core::gates::SymbolEvaluation,
    name: &str,
) -> &'a angelscan_core::gates::GateOutcome {
    eval.gates
        .iter()
        .find(|g| g.name == name)
        .unwrap_or_else(|| panic!("gate {name} not evaluated"))
}

#[test]
fn golden_symbol_clears_the_whole_chain() {
    let stock = fallen_angel_stock("WIN", end_date());
    let bench = benchmark("QQQ", end_date());
    let eval = evaluate_symbol(&stock, &bench, &ScanParams::default(), EvalMode::ShortCircuit);

    assert!(eval.passed);
    assert_eq!(eval.gates.len(), 8);

    // A full pass carries a fully-populated feature bundle
    assert!(eval.features.leader_peak_excess.unwrap() > 15.0);
    assert!(eval.features.rs_near_high_pct.unwrap() >= 92.0);
    assert!(eval.features.rs_dd_vs_price_dd.unwrap() <= 0.60);
    assert!(eval.features.rs_ma20_slope.unwrap() > 0.0);
}

#[test]
fn constant_volume_breaks_only_the_dry_up_gate() {
    let golden = fallen_angel_stock("WIN", end_date());
    let stock = series_from_columns(
        "WIN",
        end_date(),
        &golden.closes(),
        &vec![1_000_000; FIXTURE_DAYS],
    );
    let bench = benchmark("QQQ", end_date());
    let eval = evaluate_symbol(&stock, &bench, &ScanParams::default(), EvalMode::Exhaustive);

    assert!(!eval.passed);
    assert!(!gate(&eval, "volume_dryup").passed);
    // Everything the volume change cannot touch still passes
    for name in ["history", "liquidity", "position_52w", "consolidation", "trend", "tightness"] {
        assert!(gate(&eval, name).passed, "{name} unexpectedly failed");
    }
}

#[test]
fn noisy_final_window_breaks_the_tightness_gate() {
    let golden = fallen_angel_stock("WIN", end_date());
    let mut closes = golden.closes();
    let volumes: Vec<u64> = golden.bars().iter().map(|b| b.volume).collect();
    // ~6% close range over the last 10 days, with no overnight gaps
    let wiggle = [90.0, 93.0, 96.0, 93.0, 90.0, 93.0, 96.0, 93.0, 90.0, 96.0];
    let n = closes.len();
    closes[n - 10..].copy_from_slice(&wiggle);

    let stock = series_from_columns("WIN", end_date(), &closes, &volumes);
    let bench = benchmark("QQQ", end_date());
    let eval = evaluate_symbol(&stock, &bench, &ScanParams::default(), EvalMode::Exhaustive);

    assert!(!eval.passed);
    assert!(!gate(&eval, "tightness").passed);
}

#[test]
fn flat_symbol_fails_fast_under_short_circuit() {
    let stock = flat_stock("DUD", end_date());
    let bench = benchmark("QQQ", end_date());
    let eval = evaluate_symbol(&stock, &bench, &ScanParams::default(), EvalMode::ShortCircuit);

    assert!(!eval.passed);
    // Short-circuit stops at the first failure, so the chain is truncated
    assert!(eval.gates.len() < 8);
    assert!(!eval.gates.last().unwrap().passed);
    assert!(eval.gates[..eval.gates.len() - 1].iter().all(|g| g.passed));
}

#[test]
fn short_history_fails_every_gate_without_panicking() {
    for len in [0, 1, 2, 59, 199, 259] {
        let stock = series_from_columns(
            "SHORT",
            end_date(),
            &vec![100.0; len],
            &vec![1_000_000; len],
        );
        let bench = benchmark("QQQ", end_date());
        let eval = evaluate_symbol(&stock, &bench, &ScanParams::default(), EvalMode::Exhaustive);
        assert!(!eval.passed);
        assert_eq!(eval.gates.len(), 8);
        assert!(
            eval.gates.iter().all(|g| !g.passed),
            "some gate passed at len {len}"
        );
    }
}

#[test]
fn diagnostic_mode_reports_every_gate_for_a_passing_symbol() {
    let stock = fallen_angel_stock("WIN", end_date());
    let bench = benchmark("QQQ", end_date());
    let short = evaluate_symbol(&stock, &bench, &ScanParams::default(), EvalMode::ShortCircuit);
    let full = evaluate_symbol(&stock, &bench, &ScanParams::default(), EvalMode::Exhaustive);

    // On a full pass the two modes agree gate-for-gate
    assert_eq!(short.passed, full.passed);
    assert_eq!(short.gates.len(), full.gates.len());
    for (a, b) in short.gates.iter().zip(&full.gates) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.passed, b.passed);
    }
}
