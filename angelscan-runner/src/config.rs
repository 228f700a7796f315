//! Serializable scan configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use angelscan_core::params::ScanParams;

/// Unique identifier for a scan configuration (content-addressable hash).
pub type ScanId = String;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Everything a scan run needs beyond the universe itself. Missing TOML
/// fields fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Benchmark symbol for the RS line.
    pub benchmark_symbol: String,

    /// Calendar days of history to request (covers the 260 trading-day
    /// minimum with room for holidays).
    pub history_calendar_days: i64,

    /// Symbols fetched per batch.
    pub batch_size: usize,

    /// Pause between batches, to stay under provider rate limits.
    pub batch_pause_ms: u64,

    /// A symbol whose last bar is further than this many days from the
    /// target date is skipped as stale.
    pub max_staleness_days: i64,

    /// Exchange prefix for the TradingView watchlist export.
    pub tradingview_prefix: String,

    /// Separator between watchlist entries.
    pub tradingview_separator: String,

    /// Gate thresholds.
    pub params: ScanParams,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            benchmark_symbol: "QQQ".into(),
            history_calendar_days: 650,
            batch_size: 80,
            batch_pause_ms: 600,
            max_staleness_days: 1,
            tradingview_prefix: "NASDAQ:".into(),
            tradingview_separator: "\n\n".into(),
            params: ScanParams::default(),
        }
    }
}

impl ScanConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Deterministic hash of this configuration.
    ///
    /// Two scans with identical configs share a ScanId, which names their
    /// output directories and report headers.
    pub fn scan_id(&self) -> ScanId {
        let json = serde_json::to_string(self).expect("ScanConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}
