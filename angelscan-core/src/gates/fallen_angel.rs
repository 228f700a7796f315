//! Fallen-Angel relative-strength gate — three sequential stages.
//!
//! A fallen angel was a genuine outperformer (stage A: leader peak), pulled
//! back a moderate amount while its RS line held up far better than price
//! (stage B: resilience), and its RS line is now re-accelerating (stage C:
//! turn-up). Stages run strictly A→B→C with short-circuit on the first
//! failure; features computed before the failing check are still returned
//! so diagnostics can render partial results.

use serde::Serialize;

use crate::data::AlignedPair;
use crate::domain::BarSeries;
use crate::indicators::{roc, rolling_max, rs_line, rs_slope, safe_div, sma, tail_max};
use crate::params::{ScanParams, MIN_HISTORY_DAYS};

use super::GateOutcome;

pub const NAME: &str = "fallen_angel";

/// Named scalar outputs of the gate, populated as far as evaluation got.
///
/// `None` means "undefined" — there is no numeric sentinel anywhere in this
/// bundle. `rs_dd_vs_price_dd` may be `Some(f64::INFINITY)` when price
/// drawdown is zero; infinity correctly fails the `<= max` check.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RsFeatures {
    /// Best trailing 3m/6m excess return versus the benchmark, in percent.
    pub leader_peak_excess: Option<f64>,
    /// Current RS as a percentage of its rolling high.
    pub rs_near_high_pct: Option<f64>,
    /// RS drawdown divided by price drawdown.
    pub rs_dd_vs_price_dd: Option<f64>,
    /// Fractional change of the RS moving average over the slope lookback,
    /// in percent.
    pub rs_ma20_slope: Option<f64>,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{x:.2}"),
        None => "n/a".into(),
    }
}

pub fn evaluate(
    series: &BarSeries,
    benchmark: &BarSeries,
    params: &ScanParams,
) -> (GateOutcome, RsFeatures) {
    let mut features = RsFeatures::default();

    let pair = AlignedPair::intersect(series, benchmark);
    if pair.len() < MIN_HISTORY_DAYS {
        let outcome = GateOutcome::fail(
            NAME,
            format!(
                "insufficient aligned history: {} rows (< {MIN_HISTORY_DAYS})",
                pair.len()
            ),
        );
        return (outcome, features);
    }

    let stock = &pair.stock_close;
    let bench = &pair.bench_close;
    let rs = rs_line(stock, bench);

    // Stage A — leader peak: was this ever a meaningful outperformer?
    let excess_3m: Vec<f64> = roc(stock, 63)
        .iter()
        .zip(roc(bench, 63))
        .map(|(&s, b)| s - b)
        .collect();
    let excess_6m: Vec<f64> = roc(stock, 126)
        .iter()
        .zip(roc(bench, 126))
        .map(|(&s, b)| s - b)
        .collect();

    let max_3m = tail_max(&excess_3m, params.leader_peak_lookback_d);
    let max_6m = tail_max(&excess_6m, params.leader_peak_lookback_d);

    features.leader_peak_excess = match (max_3m, max_6m) {
        (Some(a), Some(b)) => Some(a.max(b) * 100.0),
        (Some(a), None) => Some(a * 100.0),
        (None, Some(b)) => Some(b * 100.0),
        (None, None) => None,
    };

    let leader_ok = max_3m.is_some_and(|v| v >= params.min_peak_excess_3m)
        || max_6m.is_some_and(|v| v >= params.min_peak_excess_6m);
    if !leader_ok {
        let outcome = GateOutcome::fail(
            NAME,
            format!(
                "leader peak: excess {}% never reached thresholds",
                fmt_opt(features.leader_peak_excess)
            ),
        );
        return (outcome, features);
    }

    // Stage B — resilience: did RS hold up better than price on the pullback?
    let lookback = params.resilience_lookback_d;
    if pair.len() < lookback + 5 {
        let outcome = GateOutcome::fail(
            NAME,
            format!(
                "resilience: {} aligned rows too few for {lookback}d lookback",
                pair.len()
            ),
        );
        return (outcome, features);
    }

    let close_now = *stock.last().unwrap();
    let rs_now = *rs.last().unwrap();
    let price_high_now = rolling_max(stock, lookback)
        .last()
        .copied()
        .unwrap_or(f64::NAN);
    let rs_high_now = rolling_max(&rs, lookback)
        .last()
        .copied()
        .unwrap_or(f64::NAN);

    let price_dd = 1.0 - safe_div(close_now, price_high_now, f64::NAN);
    let rs_dd = 1.0 - safe_div(rs_now, rs_high_now, f64::NAN);

    let near_high = safe_div(rs_now, rs_high_now, f64::NAN);
    if !near_high.is_nan() {
        features.rs_near_high_pct = Some(near_high * 100.0);
    }

    let dd_ratio = safe_div(rs_dd, price_dd, f64::INFINITY);
    if !dd_ratio.is_nan() {
        features.rs_dd_vs_price_dd = Some(dd_ratio);
    }

    if price_dd.is_nan() || !(params.min_price_dd..=params.max_price_dd).contains(&price_dd) {
        let outcome = GateOutcome::fail(
            NAME,
            format!(
                "resilience: price drawdown {:.1}% outside {:.0}%..{:.0}%",
                price_dd * 100.0,
                params.min_price_dd * 100.0,
                params.max_price_dd * 100.0
            ),
        );
        return (outcome, features);
    }

    let resilience_ok = !near_high.is_nan()
        && near_high >= params.min_rs_near_high_pct
        && !dd_ratio.is_nan()
        && dd_ratio <= params.max_rs_dd_to_price_dd_ratio;
    if !resilience_ok {
        let outcome = GateOutcome::fail(
            NAME,
            format!(
                "resilience: near-high {}%, dd ratio {}",
                fmt_opt(features.rs_near_high_pct),
                fmt_opt(features.rs_dd_vs_price_dd)
            ),
        );
        return (outcome, features);
    }

    // Stage C — turn-up: is RS re-accelerating?
    let rs_ma = sma(&rs, params.rs_ma_len);
    let rs_ma_now = *rs_ma.last().unwrap();
    if rs_ma_now.is_nan() {
        let outcome = GateOutcome::fail(NAME, "turn-up: RS moving average undefined");
        return (outcome, features);
    }

    let slope = rs_slope(&rs_ma, params.rs_slope_lookback_d);
    if let Some(v) = slope {
        features.rs_ma20_slope = Some(v * 100.0);
    }

    let turnup_ok =
        rs_now > rs_ma_now && slope.is_some_and(|v| v > params.min_rs_ma20_slope);
    if !turnup_ok {
        let outcome = GateOutcome::fail(
            NAME,
            format!(
                "turn-up: RS {:.4} vs ma {:.4}, ma slope {}%",
                rs_now,
                rs_ma_now,
                fmt_opt(features.rs_ma20_slope)
            ),
        );
        return (outcome, features);
    }

    let outcome = GateOutcome::pass(
        NAME,
        format!(
            "peak excess {}%, near-high {}%, dd ratio {}, ma slope {}%",
            fmt_opt(features.leader_peak_excess),
            fmt_opt(features.rs_near_high_pct),
            fmt_opt(features.rs_dd_vs_price_dd),
            fmt_opt(features.rs_ma20_slope)
        ),
    );
    (outcome, features)
}
