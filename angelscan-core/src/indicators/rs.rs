//! Relative-strength line and its moving-average slope.
//!
//! The RS line is the stock's close divided by the benchmark's close over an
//! aligned date range. It is recomputed per evaluation and never persisted.

use super::safe_div;

/// Element-wise `stock / bench`. Both slices must already be date-aligned
/// and equal-length; a zero or NaN benchmark close yields NaN for that row.
pub fn rs_line(stock_close: &[f64], bench_close: &[f64]) -> Vec<f64> {
    assert_eq!(
        stock_close.len(),
        bench_close.len(),
        "RS line inputs must be aligned"
    );
    stock_close
        .iter()
        .zip(bench_close)
        .map(|(&s, &b)| safe_div(s, b, f64::NAN))
        .collect()
}

/// Slope of a moving-average series as a fractional change over `lag`
/// observations: `(ma[last] / ma[last - lag]) - 1`.
///
/// `None` when the series is too short or either endpoint is NaN.
pub fn rs_slope(ma: &[f64], lag: usize) -> Option<f64> {
    if lag == 0 || ma.len() <= lag {
        return None;
    }
    let now = ma[ma.len() - 1];
    let then = ma[ma.len() - 1 - lag];
    let slope = safe_div(now, then, f64::NAN) - 1.0;
    if slope.is_nan() {
        None
    } else {
        Some(slope)
    }
}
