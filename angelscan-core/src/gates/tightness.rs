//! Dynamic tightness gate — closing-range contraction with gap-aware
//! tolerance.
//!
//! The last `vcp_tight_days` closes must sit inside a narrow band. A single
//! large overnight gap inside that window would disqualify an otherwise
//! tight pattern, so a qualifying gap resets the window: days before the
//! gap are discarded and the tolerance is recalibrated to the gap's
//! magnitude, rounded up to the next whole percentage point.
//!
//! When several days qualify, the LAST one scanned in chronological order
//! wins — not the largest. That matches the original behavior and is pinned
//! by the property tests; switching to largest-wins is a product decision,
//! not a refactor.

use crate::domain::BarSeries;
use crate::params::{ScanParams, MIN_HISTORY_DAYS};

use super::GateOutcome;

pub const NAME: &str = "tightness";

/// Resolved measurement window: where the usable closes start and how wide
/// the band may be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TightnessWindow {
    /// Index into the N-day window from which closes count.
    pub valid_start: usize,
    /// Maximum allowed close range as a fraction of the last close.
    pub allowed_tightness: f64,
}

/// Scan the window for regime-resetting gaps.
///
/// `opens` and `closes` are the last N days in chronological order. A day
/// whose open gaps up more than `gap_threshold` versus the prior close
/// (strict `>`) resets `valid_start` to that day and widens the tolerance
/// to `ceil(max(gap, day_gain) * 100) / 100`. Later qualifying days
/// overwrite earlier ones.
pub fn resolve_window(
    opens: &[f64],
    closes: &[f64],
    gap_threshold: f64,
    default_tightness: f64,
) -> TightnessWindow {
    debug_assert_eq!(opens.len(), closes.len());

    let mut window = TightnessWindow {
        valid_start: 0,
        allowed_tightness: default_tightness,
    };

    for i in 1..closes.len() {
        let prev_close = closes[i - 1];
        if prev_close == 0.0 || prev_close.is_nan() {
            continue;
        }
        let gap = (opens[i] - prev_close) / prev_close;
        if gap > gap_threshold {
            window.valid_start = i;
            let day_gain = (closes[i] - prev_close) / prev_close;
            let magnitude = gap.max(day_gain);
            window.allowed_tightness = (magnitude * 100.0).ceil() / 100.0;
        }
    }

    window
}

pub fn evaluate(series: &BarSeries, params: &ScanParams) -> GateOutcome {
    if series.len() < MIN_HISTORY_DAYS {
        return super::insufficient_history(NAME, series.len());
    }

    let n = params.vcp_tight_days.min(series.len());
    let bars = &series.bars()[series.len() - n..];
    let opens: Vec<f64> = bars.iter().map(|b| b.open).collect();
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

    let window = resolve_window(
        &opens,
        &closes,
        params.vcp_gap_threshold,
        params.vcp_default_tightness,
    );

    let adjusted = &closes[window.valid_start..];
    if adjusted.len() < 2 {
        // The gap landed on the final day: no range to measure
        return GateOutcome::pass(
            NAME,
            format!(
                "window collapsed to {} close(s) after gap reset",
                adjusted.len()
            ),
        );
    }

    let max_close = adjusted.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_close = adjusted.iter().copied().fold(f64::INFINITY, f64::min);
    let last_close = *closes.last().unwrap_or(&f64::NAN);
    let range_pct = (max_close - min_close) / last_close;

    let reset_note = if window.valid_start > 0 {
        format!(", gap reset at day {}", window.valid_start)
    } else {
        String::new()
    };
    let detail = format!(
        "{n}d close range {:.2}% (limit {:.1}%{reset_note})",
        range_pct * 100.0,
        window.allowed_tightness * 100.0
    );

    if range_pct <= window.allowed_tightness {
        GateOutcome::pass(NAME, detail)
    } else {
        GateOutcome::fail(NAME, detail)
    }
}
