//! Scan orchestrator — the universe through the gate chain, batch by batch.
//!
//! The benchmark is fetched first; without it no RS statistic exists, so a
//! benchmark failure is a scan-level error, distinct from a scan that ran
//! and found nothing. Per-symbol problems (fetch failure, empty or stale
//! series) only skip that symbol — one bad ticker never aborts a batch.
//!
//! Within a batch, fetching is serial (the provider is the rate-limited
//! resource) and gate evaluation fans out over rayon: gates are pure
//! functions per symbol, so results merge order-independently.

use chrono::{Duration, NaiveDate};
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use angelscan_core::data::{DataError, DataProvider};
use angelscan_core::domain::BarSeries;
use angelscan_core::gates::{evaluate_symbol, EvalMode, RsFeatures};

use crate::config::ScanConfig;
use crate::progress::ScanProgress;

/// Errors that abort a whole scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("benchmark '{symbol}' unavailable: {source}")]
    Benchmark {
        symbol: String,
        #[source]
        source: DataError,
    },

    #[error("benchmark '{symbol}' returned an empty series")]
    BenchmarkEmpty { symbol: String },

    #[error("symbol '{symbol}' unavailable: {source}")]
    Symbol {
        symbol: String,
        #[source]
        source: DataError,
    },
}

/// One passing symbol with its feature bundle.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub symbol: String,
    #[serde(flatten)]
    pub features: RsFeatures,
}

/// Outcome of a full scan.
#[derive(Debug)]
pub struct ScanReport {
    pub target_date: NaiveDate,
    /// Passing symbols, sorted by symbol for deterministic output.
    pub rows: Vec<ResultRow>,
    /// Symbols that went through the gate chain (pass or fail).
    pub evaluated: usize,
    /// Symbols dropped before evaluation, with reasons.
    pub skipped: Vec<(String, String)>,
}

enum SymbolOutcome {
    Passed(ResultRow),
    Failed,
    Skipped(String),
}

/// Run the gate chain over a ticker universe as of `target_date`.
pub fn scan_universe(
    provider: &dyn DataProvider,
    tickers: &[String],
    target_date: NaiveDate,
    config: &ScanConfig,
    progress: &dyn ScanProgress,
) -> Result<ScanReport, ScanError> {
    let start = target_date - Duration::days(config.history_calendar_days);
    let end = target_date + Duration::days(1);

    let benchmark = provider
        .fetch_daily(&config.benchmark_symbol, start, end)
        .map_err(|source| ScanError::Benchmark {
            symbol: config.benchmark_symbol.clone(),
            source,
        })?;
    if benchmark.is_empty() {
        return Err(ScanError::BenchmarkEmpty {
            symbol: config.benchmark_symbol.clone(),
        });
    }

    let batch_size = config.batch_size.max(1);
    let batch_count = tickers.len().div_ceil(batch_size);

    let mut rows = Vec::new();
    let mut skipped: Vec<(String, String)> = Vec::new();
    let mut evaluated = 0usize;

    for (batch_index, batch) in tickers.chunks(batch_size).enumerate() {
        let batch: Vec<String> = batch.to_vec();
        progress.on_batch_start(batch_index, batch_count, &batch);

        if !provider.is_available() {
            // Provider cut us off; drop everything that is left
            for symbol in tickers.iter().skip(batch_index * batch_size) {
                skipped.push((symbol.clone(), "provider unavailable".into()));
                progress.on_symbol_skipped(symbol, "provider unavailable");
            }
            break;
        }

        // Serial fetch: the provider is the rate-limited resource
        let fetched: Vec<(String, Result<BarSeries, DataError>)> = batch
            .iter()
            .map(|symbol| (symbol.clone(), provider.fetch_daily(symbol, start, end)))
            .collect();

        // Parallel evaluation: pure functions per symbol
        let outcomes: Vec<(String, SymbolOutcome)> = fetched
            .into_par_iter()
            .map(|(symbol, result)| {
                let outcome = evaluate_one(result, &benchmark, target_date, config);
                (symbol, outcome)
            })
            .collect();

        for (symbol, outcome) in outcomes {
            match outcome {
                SymbolOutcome::Passed(row) => {
                    evaluated += 1;
                    progress.on_symbol_passed(&symbol);
                    rows.push(row);
                }
                SymbolOutcome::Failed => evaluated += 1,
                SymbolOutcome::Skipped(reason) => {
                    progress.on_symbol_skipped(&symbol, &reason);
                    skipped.push((symbol, reason));
                }
            }
        }

        let is_last = batch_index + 1 == batch_count;
        if !is_last && config.batch_pause_ms > 0 {
            std::thread::sleep(std::time::Duration::from_millis(config.batch_pause_ms));
        }
    }

    rows.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    progress.on_scan_complete(evaluated, rows.len(), skipped.len());

    Ok(ScanReport {
        target_date,
        rows,
        evaluated,
        skipped,
    })
}

fn evaluate_one(
    result: Result<BarSeries, DataError>,
    benchmark: &BarSeries,
    target_date: NaiveDate,
    config: &ScanConfig,
) -> SymbolOutcome {
    let series = match result {
        Ok(series) => series,
        Err(e) => return SymbolOutcome::Skipped(e.to_string()),
    };

    let Some(last_date) = series.last_date() else {
        return SymbolOutcome::Skipped("empty series".into());
    };
    let staleness = (target_date - last_date).num_days().abs();
    if staleness > config.max_staleness_days {
        return SymbolOutcome::Skipped(format!(
            "stale data: last bar {last_date} is {staleness}d from target"
        ));
    }

    let eval = evaluate_symbol(&series, benchmark, &config.params, EvalMode::ShortCircuit);
    if eval.passed {
        SymbolOutcome::Passed(ResultRow {
            symbol: eval.symbol,
            features: eval.features,
        })
    } else {
        SymbolOutcome::Failed
    }
}
