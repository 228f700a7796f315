//! Deterministic synthetic fixtures — a known-good fallen-angel shape, its
//! benchmark, and a known-bad dud.
//!
//! Used by the criterion bench and by integration tests here and in the
//! runner crate, so the "golden" shape lives in exactly one place. No RNG:
//! the same inputs always produce the same bars.

use chrono::{Duration, NaiveDate};

use crate::domain::{Bar, BarSeries};

/// Number of bars every fixture produces.
pub const FIXTURE_DAYS: usize = 300;

/// Build a series from closes/volumes ending at `end_date`, one bar per
/// calendar day, gap-free (each open equals the prior close).
pub fn series_from_columns(
    symbol: &str,
    end_date: NaiveDate,
    closes: &[f64],
    volumes: &[u64],
) -> BarSeries {
    assert_eq!(closes.len(), volumes.len());
    let n = closes.len();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                date: end_date - Duration::days((n - 1 - i) as i64),
                open,
                high: open.max(close) + 0.2,
                low: open.min(close) - 0.2,
                close,
                volume: volumes[i],
            }
        })
        .collect();
    BarSeries::new(symbol, bars)
}

/// A stock that passes every gate: long base at 50, a 100-day run to 100,
/// a ~10% pullback, then a quiet base drifting from 90 to 90.5 with
/// drying-up volume. The drift keeps the last close decisively above the
/// 50-day average instead of exactly on it.
pub fn fallen_angel_stock(symbol: &str, end_date: NaiveDate) -> BarSeries {
    let mut closes = vec![50.0; 100];
    closes.extend((0..100).map(|i| 50.0 + 50.0 * i as f64 / 99.0));
    closes.extend((1..=10).map(|i| 100.0 - 10.0 * i as f64 / 10.0));
    closes.extend((0..90).map(|i| 90.0 + 0.5 * i as f64 / 89.0));

    let mut volumes = vec![1_000_000; FIXTURE_DAYS - 3];
    volumes.extend(vec![500_000; 3]);

    series_from_columns(symbol, end_date, &closes, &volumes)
}

/// The benchmark that makes [`fallen_angel_stock`] work: flat at 100
/// through the stock's run, then fading so the stock's RS line climbs back
/// to 98% of its high by the last bar.
pub fn benchmark(symbol: &str, end_date: NaiveDate) -> BarSeries {
    let final_level = 90.0 / 0.98;
    let mut closes = vec![100.0; 200];
    closes.extend((1..=100).map(|i| 100.0 - (100.0 - final_level) * i as f64 / 100.0));

    series_from_columns(symbol, end_date, &closes, &vec![10_000_000; FIXTURE_DAYS])
}

/// A liquid but lifeless stock: flat price, constant volume. Fails the
/// volume dry-up and leader-peak gates.
pub fn flat_stock(symbol: &str, end_date: NaiveDate) -> BarSeries {
    series_from_columns(
        symbol,
        end_date,
        &vec![100.0; FIXTURE_DAYS],
        &vec![1_000_000; FIXTURE_DAYS],
    )
}
