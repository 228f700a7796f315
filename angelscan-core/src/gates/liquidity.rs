//! Price & liquidity gate — minimum price and 20-day dollar volume.

use crate::domain::BarSeries;
use crate::indicators::tail_mean;
use crate::params::{ScanParams, MIN_HISTORY_DAYS};

use super::GateOutcome;

pub const NAME: &str = "liquidity";

pub fn evaluate(series: &BarSeries, params: &ScanParams) -> GateOutcome {
    if series.len() < MIN_HISTORY_DAYS {
        return super::insufficient_history(NAME, series.len());
    }

    let close = series.last_close().unwrap_or(f64::NAN);
    let avg_vol_20 = tail_mean(&series.volumes(), 20).unwrap_or(f64::NAN);
    let dollar_vol = close * avg_vol_20;

    let detail = format!(
        "close ${close:.2}, 20d dollar volume ${:.1}M",
        dollar_vol / 1_000_000.0
    );

    if close >= params.min_price && dollar_vol >= params.min_dollar_vol_20d {
        GateOutcome::pass(NAME, detail)
    } else {
        GateOutcome::fail(NAME, detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::testutil::series_from_closes_volumes;

    fn series(close: f64, volume: u64) -> crate::domain::BarSeries {
        series_from_closes_volumes("TEST", &vec![close; 300], &vec![volume; 300])
    }

    #[test]
    fn liquid_stock_passes() {
        // $50 * 1M shares = $50M >= $20M
        let s = series(50.0, 1_000_000);
        assert!(evaluate(&s, &ScanParams::default()).passed);
    }

    #[test]
    fn cheap_stock_fails() {
        let s = series(9.99, 10_000_000);
        assert!(!evaluate(&s, &ScanParams::default()).passed);
    }

    #[test]
    fn price_boundary_is_inclusive() {
        let s = series(10.0, 1_000_000_000);
        assert!(evaluate(&s, &ScanParams::default()).passed);
    }

    #[test]
    fn thin_volume_fails() {
        // $50 * 100k shares = $5M < $20M
        let s = series(50.0, 100_000);
        assert!(!evaluate(&s, &ScanParams::default()).passed);
    }

    #[test]
    fn dollar_volume_boundary_is_inclusive() {
        // $20 * 1M = exactly $20M
        let s = series(20.0, 1_000_000);
        assert!(evaluate(&s, &ScanParams::default()).passed);
    }

    #[test]
    fn short_series_fails() {
        let s = series_from_closes_volumes("TEST", &vec![50.0; 100], &vec![1_000_000; 100]);
        assert!(!evaluate(&s, &ScanParams::default()).passed);
    }
}
