//! Data provider trait and structured error types.
//!
//! The `DataProvider` trait abstracts over bar sources (Yahoo Finance in
//! production, mocks in tests) so the orchestrator never knows where bars
//! come from. Providers return canonicalized [`BarSeries`]; an empty or
//! short series is a legitimate answer that the history gate rejects —
//! never an exception inside the core.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::BarSeries;

/// Structured error types for the fetch path.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("authentication required: {0}")]
    AuthenticationRequired(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("hard stop: data provider has blocked requests (circuit breaker tripped)")]
    CircuitBreakerTripped,

    #[error("data error: {0}")]
    Other(String),
}

/// Trait for daily-bar providers.
pub trait DataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch adjusted daily OHLCV bars for one symbol over a date range.
    fn fetch_daily(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BarSeries, DataError>;

    /// Whether the provider is currently usable (not rate-limited or blocked).
    fn is_available(&self) -> bool;
}
