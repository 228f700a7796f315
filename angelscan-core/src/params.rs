//! Screening parameters — one immutable value passed into every gate.
//!
//! Every threshold in the pipeline lives here with its production default,
//! so tests can run the same gates with non-default values and a TOML
//! config can override any subset (missing fields fall back to defaults).

use serde::{Deserialize, Serialize};

/// Minimum usable history for any gate: 52 trading weeks plus a buffer for
/// the 126/252-day lookbacks.
pub const MIN_HISTORY_DAYS: usize = 260;

/// Thresholds for the VCP and Fallen-Angel gates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanParams {
    // Liquidity floor
    pub min_price: f64,
    pub min_dollar_vol_20d: f64,

    // Position and consolidation
    /// Last close must exceed the 250-day low by this fraction.
    pub low_52w_multiplier: f64,
    pub consolidation_max_depth_60d: f64,

    // Volume dry-up: 3-day average must stay strictly below this fraction
    // of the 20-day average.
    pub vdu_max_ratio: f64,

    // Dynamic tightness window
    pub vcp_tight_days: usize,
    pub vcp_gap_threshold: f64,
    pub vcp_default_tightness: f64,

    // Fallen-Angel stage A: leader peak
    pub leader_peak_lookback_d: usize,
    pub min_peak_excess_3m: f64,
    pub min_peak_excess_6m: f64,

    // Fallen-Angel stage B: resilience
    pub resilience_lookback_d: usize,
    /// Fractional floor for rs_now / rs_high (0.92 = within 8% of the RS high).
    pub min_rs_near_high_pct: f64,
    pub max_rs_dd_to_price_dd_ratio: f64,
    pub min_price_dd: f64,
    pub max_price_dd: f64,

    // Fallen-Angel stage C: turn-up
    pub rs_ma_len: usize,
    pub rs_slope_lookback_d: usize,
    pub min_rs_ma20_slope: f64,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            min_price: 10.0,
            min_dollar_vol_20d: 20_000_000.0,
            low_52w_multiplier: 0.25,
            consolidation_max_depth_60d: 0.30,
            vdu_max_ratio: 0.70,
            vcp_tight_days: 10,
            vcp_gap_threshold: 0.04,
            vcp_default_tightness: 0.035,
            leader_peak_lookback_d: 126,
            min_peak_excess_3m: 0.15,
            min_peak_excess_6m: 0.25,
            resilience_lookback_d: 126,
            min_rs_near_high_pct: 0.92,
            max_rs_dd_to_price_dd_ratio: 0.60,
            min_price_dd: 0.05,
            max_price_dd: 0.35,
            rs_ma_len: 20,
            rs_slope_lookback_d: 5,
            min_rs_ma20_slope: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_values() {
        let p = ScanParams::default();
        assert_eq!(p.min_price, 10.0);
        assert_eq!(p.min_dollar_vol_20d, 20_000_000.0);
        assert_eq!(p.vcp_tight_days, 10);
        assert_eq!(p.vcp_gap_threshold, 0.04);
        assert_eq!(p.vcp_default_tightness, 0.035);
        assert_eq!(p.rs_ma_len, 20);
    }

    #[test]
    fn partial_toml_override_keeps_defaults() {
        let p: ScanParams = toml::from_str("min_price = 5.0\nvdu_max_ratio = 0.8\n").unwrap();
        assert_eq!(p.min_price, 5.0);
        assert_eq!(p.vdu_max_ratio, 0.8);
        assert_eq!(p.min_peak_excess_3m, 0.15); // untouched default
    }

    #[test]
    fn roundtrips_through_toml() {
        let p = ScanParams::default();
        let text = toml::to_string(&p).unwrap();
        let back: ScanParams = toml::from_str(&text).unwrap();
        assert_eq!(p, back);
    }
}
