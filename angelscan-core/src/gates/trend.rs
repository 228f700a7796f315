//! Trend gate — classic uptrend structure: price >= SMA50 >= SMA200.

use crate::domain::BarSeries;
use crate::indicators::sma;
use crate::params::{ScanParams, MIN_HISTORY_DAYS};

use super::GateOutcome;

pub const NAME: &str = "trend";

pub fn evaluate(series: &BarSeries, _params: &ScanParams) -> GateOutcome {
    if series.len() < MIN_HISTORY_DAYS {
        return super::insufficient_history(NAME, series.len());
    }

    let closes = series.closes();
    let close = *closes.last().unwrap_or(&f64::NAN);
    let sma50 = sma(&closes, 50).last().copied().unwrap_or(f64::NAN);
    let sma200 = sma(&closes, 200).last().copied().unwrap_or(f64::NAN);

    if sma50.is_nan() || sma200.is_nan() {
        return GateOutcome::fail(NAME, "moving averages undefined");
    }

    let detail = format!("close ${close:.2}, sma50 ${sma50:.2}, sma200 ${sma200:.2}");

    if close >= sma50 && sma50 >= sma200 {
        GateOutcome::pass(NAME, detail)
    } else {
        GateOutcome::fail(NAME, detail)
    }
}
