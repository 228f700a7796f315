//! Consolidation-depth gate — the 60-day range must be a base, not a cliff.

use crate::domain::BarSeries;
use crate::indicators::{rolling_max, rolling_min, safe_div};
use crate::params::{ScanParams, MIN_HISTORY_DAYS};

use super::GateOutcome;

pub const NAME: &str = "consolidation";

/// (60d high - 60d low) / 60d high must not exceed the configured depth.
pub fn evaluate(series: &BarSeries, params: &ScanParams) -> GateOutcome {
    if series.len() < MIN_HISTORY_DAYS {
        return super::insufficient_history(NAME, series.len());
    }

    let high_60 = rolling_max(&series.highs(), 60)
        .last()
        .copied()
        .unwrap_or(f64::NAN);
    let low_60 = rolling_min(&series.lows(), 60)
        .last()
        .copied()
        .unwrap_or(f64::NAN);
    let depth = safe_div(high_60 - low_60, high_60, f64::NAN);

    let detail = format!(
        "60d range ${low_60:.2}..${high_60:.2}, depth {:.1}%",
        depth * 100.0
    );

    if depth <= params.consolidation_max_depth_60d {
        GateOutcome::pass(NAME, detail)
    } else {
        GateOutcome::fail(NAME, detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::testutil::series_from_closes;

    #[test]
    fn tight_base_passes() {
        let s = series_from_closes("TEST", &vec![100.0; 300]);
        assert!(evaluate(&s, &ScanParams::default()).passed);
    }

    #[test]
    fn deep_correction_fails() {
        // Last 60 days collapse from 100 to 50: depth ~50%
        let mut closes = vec![100.0; 240];
        closes.extend((0..60).map(|i| 100.0 - 50.0 * (i as f64) / 59.0));
        let s = series_from_closes("TEST", &closes);
        assert!(!evaluate(&s, &ScanParams::default()).passed);
    }

    #[test]
    fn boundary_is_inclusive() {
        // Dyadic prices so the depth is exact: high 128.0 (close 127.8),
        // low 96.0 (close 96.2) → depth = 32/128 = 0.25
        let mut closes = vec![127.8; 270];
        closes.extend(vec![96.2; 30]);
        let s = series_from_closes("TEST", &closes);

        let mut params = ScanParams::default();
        params.consolidation_max_depth_60d = 0.25;
        assert!(evaluate(&s, &params).passed); // <= is inclusive

        params.consolidation_max_depth_60d = 0.2499;
        assert!(!evaluate(&s, &params).passed);
    }

    #[test]
    fn short_series_fails() {
        let s = series_from_closes("TEST", &vec![100.0; 59]);
        assert!(!evaluate(&s, &ScanParams::default()).passed);
    }
}
