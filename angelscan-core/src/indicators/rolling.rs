//! Rolling extrema — windowed max/min plus a NaN-skipping tail max.
//!
//! Used for the 52-week low, the 60-day consolidation range, and the rolling
//! price/RS highs in the resilience stage.

/// Rolling maximum over `period` observations; NaN until the window fills,
/// NaN when the window contains a NaN.
pub fn rolling_max(values: &[f64], period: usize) -> Vec<f64> {
    rolling_extremum(values, period, true)
}

/// Rolling minimum over `period` observations; same NaN rules as
/// [`rolling_max`].
pub fn rolling_min(values: &[f64], period: usize) -> Vec<f64> {
    rolling_extremum(values, period, false)
}

fn rolling_extremum(values: &[f64], period: usize, want_max: bool) -> Vec<f64> {
    assert!(period >= 1, "rolling period must be >= 1");
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n < period {
        return result;
    }

    for i in (period - 1)..n {
        let window = &values[(i + 1 - period)..=i];
        let mut extreme = if want_max {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut has_nan = false;
        for &v in window {
            if v.is_nan() {
                has_nan = true;
                break;
            }
            if (want_max && v > extreme) || (!want_max && v < extreme) {
                extreme = v;
            }
        }
        result[i] = if has_nan { f64::NAN } else { extreme };
    }

    result
}

/// Maximum over the last `n` values, skipping NaN; the whole series when it
/// is shorter than `n`. `None` when no finite value exists in the window.
pub fn tail_max(values: &[f64], n: usize) -> Option<f64> {
    let start = values.len().saturating_sub(n);
    values[start..]
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |a| a.max(v)))
        })
}
