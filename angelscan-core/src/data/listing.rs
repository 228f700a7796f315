//! Exchange symbol directories — full-market universe acquisition.
//!
//! Pulls the NASDAQ Trader symbol directories (pipe-delimited text) and
//! filters them down to common stocks worth screening: no test issues, no
//! ETFs, no ADRs/preferreds/warrants/units/rights/SPACs, plain alphabetic
//! tickers only. The `otherlisted` file covers several venues; only rows
//! with exchange code `N` (NYSE proper) are kept from it.
//!
//! When both directories are unreachable, a hardcoded mega-cap list keeps a
//! scan runnable.

use std::time::Duration;

use super::provider::DataError;

pub const NASDAQ_LISTED_URL: &str =
    "http://www.nasdaqtrader.com/dynamic/symdir/nasdaqlisted.txt";
pub const OTHER_LISTED_URL: &str =
    "http://www.nasdaqtrader.com/dynamic/symdir/otherlisted.txt";

/// Security-name fragments that disqualify a listing (uppercase match).
const EXCLUDE_KEYWORDS: [&str; 10] = [
    " ADR ",
    " ADS ",
    " DEPOSITARY ",
    " PREFERRED ",
    " PFD ",
    " WARRANT ",
    " WTS ",
    " UNIT ",
    " RIGHTS ",
    " ACQUISITION ",
];

/// Client for the NASDAQ Trader symbol directories.
pub struct ListingClient {
    client: reqwest::blocking::Client,
}

impl Default for ListingClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingClient {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    /// Union of the filtered NASDAQ and NYSE lists, sorted. Falls back to
    /// [`fallback_tickers`] when both directories fail.
    pub fn fetch_all(&self) -> Vec<String> {
        let mut tickers = Vec::new();

        match self.fetch_nasdaq() {
            Ok(mut list) => tickers.append(&mut list),
            Err(e) => eprintln!("warning: NASDAQ directory unavailable: {e}"),
        }
        match self.fetch_nyse() {
            Ok(mut list) => tickers.append(&mut list),
            Err(e) => eprintln!("warning: NYSE directory unavailable: {e}"),
        }

        if tickers.is_empty() {
            return fallback_tickers();
        }

        tickers.sort();
        tickers.dedup();
        tickers
    }

    pub fn fetch_nasdaq(&self) -> Result<Vec<String>, DataError> {
        let text = self.get_text(NASDAQ_LISTED_URL)?;
        parse_directory(&text, "Symbol", None)
    }

    pub fn fetch_nyse(&self) -> Result<Vec<String>, DataError> {
        let text = self.get_text(OTHER_LISTED_URL)?;
        // A = NYSE American, N = NYSE, P = NYSE Arca, Z = BATS
        parse_directory(&text, "ACT Symbol", Some("N"))
    }

    fn get_text(&self, url: &str) -> Result<String, DataError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| DataError::NetworkUnreachable(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(DataError::Other(format!("HTTP {} for {url}", resp.status())));
        }
        resp.text()
            .map_err(|e| DataError::ResponseFormatChanged(e.to_string()))
    }
}

/// Parse one pipe-delimited directory file.
///
/// `symbol_column` names the ticker column ("Symbol" for nasdaqlisted,
/// "ACT Symbol" for otherlisted); `exchange` restricts rows to one exchange
/// code when set. The trailing "File Creation Time" row fails the filters
/// naturally.
fn parse_directory(
    text: &str,
    symbol_column: &str,
    exchange: Option<&str>,
) -> Result<Vec<String>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'|')
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| DataError::ResponseFormatChanged(e.to_string()))?
        .clone();
    let col = |name: &str| headers.iter().position(|h| h == name);

    let symbol_idx = col(symbol_column).ok_or_else(|| {
        DataError::ResponseFormatChanged(format!("missing '{symbol_column}' column"))
    })?;
    let name_idx = col("Security Name");
    let test_idx = col("Test Issue");
    let etf_idx = col("ETF");
    let exchange_idx = col("Exchange");

    let mut symbols = Vec::new();

    for record in reader.records() {
        let Ok(record) = record else { continue };

        let Some(symbol) = record.get(symbol_idx) else {
            continue;
        };
        if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphabetic()) {
            continue;
        }
        if let Some(idx) = test_idx {
            if record.get(idx) != Some("N") {
                continue;
            }
        }
        if let Some(idx) = etf_idx {
            if record.get(idx) == Some("Y") {
                continue;
            }
        }
        if let (Some(want), Some(idx)) = (exchange, exchange_idx) {
            if record.get(idx) != Some(want) {
                continue;
            }
        }
        if let Some(idx) = name_idx {
            let name = record.get(idx).unwrap_or("").to_uppercase();
            // Pad so keyword matching also hits names starting/ending with one
            let padded = format!(" {name} ");
            if EXCLUDE_KEYWORDS.iter().any(|kw| padded.contains(kw)) {
                continue;
            }
        }

        symbols.push(symbol.to_string());
    }

    Ok(symbols)
}

/// Mega-cap fallback when no directory is reachable.
pub fn fallback_tickers() -> Vec<String> {
    [
        "AAPL", "MSFT", "AMZN", "NVDA", "TSLA", "META", "AMD", "NFLX", "GOOGL", "AVGO",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
