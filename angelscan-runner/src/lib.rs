//! Angelscan Runner — scan orchestration, diagnostics, and export.
//!
//! Wires `angelscan-core`'s gate pipeline to a data provider:
//! - `scanner`: the batch orchestrator (benchmark-first, skip-on-failure,
//!   rayon fan-out inside a batch)
//! - `diagnose`: the single-symbol exhaustive reporter
//! - `export`: CSV / JSON / TradingView watchlist writers
//! - `config`: TOML scan configuration with a blake3 fingerprint

pub mod config;
pub mod diagnose;
pub mod export;
pub mod progress;
pub mod scanner;

pub use config::{ConfigError, ScanConfig, ScanId};
pub use diagnose::{diagnose_symbol, Diagnosis};
pub use export::{write_rows_csv, write_rows_json, write_tradingview_txt};
pub use progress::{ScanProgress, SilentProgress, StdoutProgress};
pub use scanner::{scan_universe, ResultRow, ScanError, ScanReport};
