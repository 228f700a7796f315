//! BarSeries — one symbol's daily history, date-sorted and gap-free.
//!
//! The constructor canonicalizes whatever a provider hands back: void or
//! insane bars are dropped, bars are sorted by date, duplicate dates are
//! collapsed (first occurrence wins). After construction the invariant
//! holds: dates are strictly increasing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bar::Bar;

/// Ordered daily OHLCV history for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarSeries {
    symbol: String,
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Build a series from provider output, canonicalizing on the way in.
    ///
    /// Tolerates anything: unsorted input, duplicate dates, NaN rows. The
    /// result may be empty — short series are rejected by the history gate,
    /// not here.
    pub fn new(symbol: impl Into<String>, mut bars: Vec<Bar>) -> Self {
        bars.retain(Bar::is_sane);
        bars.sort_by_key(|b| b.date);
        bars.dedup_by_key(|b| b.date);
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|b| b.date)
    }

    // Column accessors — struct-of-arrays view for the indicator library.

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    pub fn opens(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.open).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Volumes as f64, ready for averaging.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(date: &str, close: f64) -> Bar {
        Bar {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            open: close - 1.0,
            high: close + 1.0,
            low: close - 2.0,
            close,
            volume: 1000,
        }
    }

    #[test]
    fn constructor_sorts_by_date() {
        let series = BarSeries::new(
            "TEST",
            vec![
                bar("2024-01-04", 102.0),
                bar("2024-01-02", 100.0),
                bar("2024-01-03", 101.0),
            ],
        );
        let dates = series.dates();
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(series.last_close(), Some(102.0));
    }

    #[test]
    fn constructor_drops_duplicate_dates() {
        let series = BarSeries::new(
            "TEST",
            vec![
                bar("2024-01-02", 100.0),
                bar("2024-01-02", 999.0),
                bar("2024-01-03", 101.0),
            ],
        );
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes()[0], 100.0); // first occurrence wins
    }

    #[test]
    fn constructor_drops_void_bars() {
        let mut nan_bar = bar("2024-01-03", 101.0);
        nan_bar.close = f64::NAN;
        let series = BarSeries::new("TEST", vec![bar("2024-01-02", 100.0), nan_bar]);
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn empty_input_is_tolerated() {
        let series = BarSeries::new("TEST", vec![]);
        assert!(series.is_empty());
        assert_eq!(series.last_close(), None);
    }

    #[test]
    fn column_accessors_align() {
        let series = BarSeries::new("TEST", vec![bar("2024-01-02", 100.0), bar("2024-01-03", 101.0)]);
        assert_eq!(series.closes(), vec![100.0, 101.0]);
        assert_eq!(series.opens(), vec![99.0, 100.0]);
        assert_eq!(series.volumes(), vec![1000.0, 1000.0]);
    }
}
