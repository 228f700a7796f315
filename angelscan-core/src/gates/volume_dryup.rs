//! Volume dry-up gate — recent trading must be quieter than the baseline.

use crate::domain::BarSeries;
use crate::indicators::{safe_div, tail_mean};
use crate::params::{ScanParams, MIN_HISTORY_DAYS};

use super::GateOutcome;

pub const NAME: &str = "volume_dryup";

/// 3-day average volume strictly below the 20-day average times the
/// configured ratio. Equality at the boundary fails: flat volume is not a
/// dry-up.
pub fn evaluate(series: &BarSeries, params: &ScanParams) -> GateOutcome {
    if series.len() < MIN_HISTORY_DAYS {
        return super::insufficient_history(NAME, series.len());
    }

    let volumes = series.volumes();
    let avg_vol_3 = tail_mean(&volumes, 3).unwrap_or(f64::NAN);
    let avg_vol_20 = tail_mean(&volumes, 20).unwrap_or(f64::NAN);
    let ratio = safe_div(avg_vol_3, avg_vol_20, f64::NAN);

    let detail = format!(
        "3d/20d volume {:.1}% (limit {:.1}%)",
        ratio * 100.0,
        params.vdu_max_ratio * 100.0
    );

    if avg_vol_3 < avg_vol_20 * params.vdu_max_ratio {
        GateOutcome::pass(NAME, detail)
    } else {
        GateOutcome::fail(NAME, detail)
    }
}
