//! Stock/benchmark date alignment.
//!
//! RS statistics divide one close by the other, so a row where either leg
//! is missing carries no information: the pair is built from the
//! intersection of the two date indices, and everything else is dropped
//! before any statistic is computed.

use chrono::NaiveDate;

use crate::domain::BarSeries;

/// Date-intersected close columns of one stock and the benchmark.
///
/// Invariant: all three vectors have equal length and `dates` is strictly
/// increasing (both inputs are date-sorted by construction).
#[derive(Debug, Clone)]
pub struct AlignedPair {
    pub dates: Vec<NaiveDate>,
    pub stock_close: Vec<f64>,
    pub bench_close: Vec<f64>,
}

impl AlignedPair {
    /// Merge-by-date intersection of a stock series and the benchmark.
    pub fn intersect(stock: &BarSeries, bench: &BarSeries) -> Self {
        let s = stock.bars();
        let b = bench.bars();

        let mut dates = Vec::new();
        let mut stock_close = Vec::new();
        let mut bench_close = Vec::new();

        let (mut i, mut j) = (0, 0);
        while i < s.len() && j < b.len() {
            match s[i].date.cmp(&b[j].date) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dates.push(s[i].date);
                    stock_close.push(s[i].close);
                    bench_close.push(b[j].close);
                    i += 1;
                    j += 1;
                }
            }
        }

        Self {
            dates,
            stock_close,
            bench_close,
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bar;

    fn series(symbol: &str, days: &[(&str, f64)]) -> BarSeries {
        let bars = days
            .iter()
            .map(|&(date, close)| Bar {
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1000,
            })
            .collect();
        BarSeries::new(symbol, bars)
    }

    #[test]
    fn keeps_only_common_dates() {
        let stock = series(
            "AAPL",
            &[
                ("2024-01-02", 100.0),
                ("2024-01-03", 101.0),
                ("2024-01-05", 103.0),
            ],
        );
        let bench = series(
            "QQQ",
            &[
                ("2024-01-02", 400.0),
                ("2024-01-04", 402.0),
                ("2024-01-05", 405.0),
            ],
        );

        let pair = AlignedPair::intersect(&stock, &bench);
        assert_eq!(pair.len(), 2);
        assert_eq!(pair.stock_close, vec![100.0, 103.0]);
        assert_eq!(pair.bench_close, vec![400.0, 405.0]);
        assert!(pair.dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn disjoint_ranges_yield_empty_pair() {
        let stock = series("AAPL", &[("2024-01-02", 100.0)]);
        let bench = series("QQQ", &[("2024-02-02", 400.0)]);
        let pair = AlignedPair::intersect(&stock, &bench);
        assert!(pair.is_empty());
    }

    #[test]
    fn empty_input_tolerated() {
        let stock = series("AAPL", &[]);
        let bench = series("QQQ", &[("2024-01-02", 400.0)]);
        assert!(AlignedPair::intersect(&stock, &bench).is_empty());
    }
}
