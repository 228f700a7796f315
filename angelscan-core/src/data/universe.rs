//! Universe configuration — sector-organized ticker lists.
//!
//! A scan universe can come from a TOML file with sectors and member
//! tickers, from the exchange symbol directories (see `listing`), or from
//! the built-in default below.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The complete universe configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Universe {
    pub sectors: BTreeMap<String, Vec<String>>,
}

impl Universe {
    /// Load a universe from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("read universe file: {e}"))?;
        Self::from_toml(&content)
    }

    /// Parse a universe from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("parse universe TOML: {e}"))
    }

    /// Serialize the universe to TOML.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("serialize universe: {e}"))
    }

    /// All tickers across all sectors, sorted and deduplicated.
    pub fn all_tickers(&self) -> Vec<String> {
        let mut tickers: Vec<String> = self.sectors.values().flatten().cloned().collect();
        tickers.sort();
        tickers.dedup();
        tickers
    }

    /// Tickers for a specific sector.
    pub fn sector_tickers(&self, sector: &str) -> Option<&[String]> {
        self.sectors.get(sector).map(|v| v.as_slice())
    }

    pub fn sector_names(&self) -> Vec<&str> {
        self.sectors.keys().map(|s| s.as_str()).collect()
    }

    pub fn ticker_count(&self) -> usize {
        self.sectors.values().map(|v| v.len()).sum()
    }

    /// Built-in default: liquid US common stocks by sector. ETFs are left
    /// out on purpose — the screen targets individual leaders.
    pub fn default_us() -> Self {
        let mut sectors = BTreeMap::new();

        let insert = |sectors: &mut BTreeMap<String, Vec<String>>, name: &str, list: &[&str]| {
            sectors.insert(name.into(), list.iter().map(|s| s.to_string()).collect());
        };

        insert(
            &mut sectors,
            "Technology",
            &[
                "AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "META", "AVGO", "CRM", "ADBE", "ORCL",
                "AMD", "NFLX", "NOW", "PANW",
            ],
        );
        insert(
            &mut sectors,
            "Healthcare",
            &["JNJ", "UNH", "ABBV", "MRK", "LLY", "TMO", "ABT", "VRTX", "REGN"],
        );
        insert(
            &mut sectors,
            "Finance",
            &["JPM", "BAC", "WFC", "GS", "MS", "BLK", "SCHW", "AXP", "V", "MA"],
        );
        insert(
            &mut sectors,
            "Energy",
            &["XOM", "CVX", "COP", "SLB", "EOG", "MPC", "PSX", "VLO"],
        );
        insert(
            &mut sectors,
            "Consumer",
            &["WMT", "PG", "KO", "PEP", "COST", "HD", "MCD", "NKE", "SBUX", "TGT", "LULU"],
        );
        insert(
            &mut sectors,
            "Industrials",
            &["CAT", "DE", "BA", "GE", "HON", "UNP", "ETN", "URI"],
        );

        Self { sectors }
    }
}
