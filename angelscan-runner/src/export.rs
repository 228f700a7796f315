//! Result export — CSV, JSON, and a TradingView watchlist.
//!
//! The column set matches the orchestrator's row contract: Symbol plus the
//! four RS features. Undefined features export as empty CSV fields / JSON
//! null; the infinite dd ratio exports as "inf".

use anyhow::{Context, Result};
use std::path::Path;

use crate::scanner::ResultRow;

fn fmt_feature(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_infinite() => "inf".into(),
        Some(x) => format!("{x:.4}"),
        None => String::new(),
    }
}

/// Write rows as CSV with a fixed header.
pub fn write_rows_csv(path: &Path, rows: &[ResultRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create results CSV {}", path.display()))?;

    writer.write_record([
        "Symbol",
        "leader_peak_excess",
        "rs_near_high_pct",
        "rs_dd_vs_price_dd",
        "rs_ma20_slope",
    ])?;

    for row in rows {
        writer.write_record([
            row.symbol.clone(),
            fmt_feature(row.features.leader_peak_excess),
            fmt_feature(row.features.rs_near_high_pct),
            fmt_feature(row.features.rs_dd_vs_price_dd),
            fmt_feature(row.features.rs_ma20_slope),
        ])?;
    }

    writer.flush().context("flush results CSV")?;
    Ok(())
}

/// Write rows as pretty JSON.
pub fn write_rows_json(path: &Path, rows: &[ResultRow]) -> Result<()> {
    let json = serde_json::to_string_pretty(rows).context("serialize result rows")?;
    std::fs::write(path, json)
        .with_context(|| format!("write results JSON {}", path.display()))?;
    Ok(())
}

/// Write a TradingView watchlist: one prefixed symbol per block.
pub fn write_tradingview_txt(
    path: &Path,
    rows: &[ResultRow],
    prefix: &str,
    separator: &str,
) -> Result<()> {
    let body: Vec<String> = rows
        .iter()
        .map(|row| format!("{prefix}{}", row.symbol))
        .collect();
    std::fs::write(path, body.join(separator))
        .with_context(|| format!("write watchlist {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use angelscan_core::gates::RsFeatures;

    fn rows() -> Vec<ResultRow> {
        vec![
            ResultRow {
                symbol: "AAPL".into(),
                features: RsFeatures {
                    leader_peak_excess: Some(22.314),
                    rs_near_high_pct: Some(97.2),
                    rs_dd_vs_price_dd: Some(0.21),
                    rs_ma20_slope: Some(0.45),
                },
            },
            ResultRow {
                symbol: "NVDA".into(),
                features: RsFeatures {
                    leader_peak_excess: None,
                    rs_near_high_pct: None,
                    rs_dd_vs_price_dd: Some(f64::INFINITY),
                    rs_ma20_slope: None,
                },
            },
        ]
    }

    #[test]
    fn csv_has_header_and_empty_fields_for_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.csv");
        write_rows_csv(&path, &rows()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Symbol,leader_peak_excess,rs_near_high_pct,rs_dd_vs_price_dd,rs_ma20_slope"
        );
        assert_eq!(lines.next().unwrap(), "AAPL,22.3140,97.2000,0.2100,0.4500");
        assert_eq!(lines.next().unwrap(), "NVDA,,,inf,");
    }

    #[test]
    fn json_rows_flatten_features() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.json");
        write_rows_json(&path, &rows()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["symbol"], "AAPL");
        assert!((parsed[0]["leader_peak_excess"].as_f64().unwrap() - 22.314).abs() < 1e-9);
        // Undefined and infinite features serialize as null
        assert!(parsed[1]["leader_peak_excess"].is_null());
    }

    #[test]
    fn tradingview_watchlist_uses_prefix_and_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watchlist.txt");
        write_tradingview_txt(&path, &rows(), "NASDAQ:", "\n\n").unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "NASDAQ:AAPL\n\nNASDAQ:NVDA");
    }

    #[test]
    fn empty_rows_produce_header_only_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.csv");
        write_rows_csv(&path, &[]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
