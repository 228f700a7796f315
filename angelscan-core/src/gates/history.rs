//! History gate — minimum usable series length.

use crate::domain::BarSeries;
use crate::params::MIN_HISTORY_DAYS;

use super::GateOutcome;

pub const NAME: &str = "history";

/// At least 260 observations, else every downstream statistic is undefined.
pub fn evaluate(series: &BarSeries) -> GateOutcome {
    let n = series.len();
    if n >= MIN_HISTORY_DAYS {
        GateOutcome::pass(NAME, format!("{n} bars"))
    } else {
        super::insufficient_history(NAME, n)
    }
}
