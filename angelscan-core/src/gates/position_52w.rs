//! 52-week position gate — price must sit well above its yearly low.

use crate::domain::BarSeries;
use crate::indicators::{rolling_min, safe_div};
use crate::params::{ScanParams, MIN_HISTORY_DAYS};

use super::GateOutcome;

pub const NAME: &str = "position_52w";

/// Last close >= 250-day rolling low * (1 + multiplier).
pub fn evaluate(series: &BarSeries, params: &ScanParams) -> GateOutcome {
    if series.len() < MIN_HISTORY_DAYS {
        return super::insufficient_history(NAME, series.len());
    }

    let close = series.last_close().unwrap_or(f64::NAN);
    let low_52w = rolling_min(&series.lows(), 250)
        .last()
        .copied()
        .unwrap_or(f64::NAN);
    let off_low = safe_div(close - low_52w, low_52w, f64::NAN);

    let detail = format!(
        "close ${close:.2}, 250d low ${low_52w:.2} ({:+.1}%)",
        off_low * 100.0
    );

    if close >= low_52w * (1.0 + params.low_52w_multiplier) {
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
    fn well_off_the_low_passes() {
        // 100 days at 50, then a run to 100: low(250d) is ~49.8, close 100
        let mut closes = vec![50.0; 150];
        closes.extend((0..150).map(|i| 50.0 + 50.0 * (i as f64) / 149.0));
        let s = series_from_closes("TEST", &closes);
        assert!(evaluate(&s, &ScanParams::default()).passed);
    }

    #[test]
    fn sitting_on_the_low_fails() {
        let s = series_from_closes("TEST", &vec![50.0; 300]);
        // close 50 vs low ~49.8: +0.4% is nowhere near +25%
        assert!(!evaluate(&s, &ScanParams::default()).passed);
    }

    #[test]
    fn boundary_is_inclusive() {
        // Lows sit at close - 0.2; make the early lows exactly 80.0 and the
        // final close exactly 100.0: 100 >= 80 * 1.25.
        let mut closes = vec![80.2; 299];
        closes.push(100.0);
        let s = series_from_closes("TEST", &closes);
        let low = crate::indicators::rolling_min(&s.lows(), 250)
            .last()
            .copied()
            .unwrap();
        assert_eq!(low, 80.0);
        assert!(evaluate(&s, &ScanParams::default()).passed);
    }

    #[test]
    fn short_series_fails() {
        let s = series_from_closes("TEST", &vec![100.0; 100]);
        assert!(!evaluate(&s, &ScanParams::default()).passed);
    }
}
