//! Diagnostic reporter — one symbol, every gate, no short-circuit.
//!
//! Same inputs as one orchestrator iteration, but every gate is evaluated
//! and rendered so a human can see exactly which rule rejected a symbol.

use chrono::{Duration, NaiveDate};

use angelscan_core::data::DataProvider;
use angelscan_core::gates::{evaluate_symbol, EvalMode, GateOutcome, RsFeatures};
use angelscan_core::indicators::performance_score;

use crate::config::ScanConfig;
use crate::scanner::ScanError;

/// Full per-gate breakdown for one symbol.
#[derive(Debug)]
pub struct Diagnosis {
    pub symbol: String,
    pub target_date: NaiveDate,
    /// AND of all individually-evaluated gates.
    pub is_pass: bool,
    /// One outcome per gate, in pipeline order.
    pub gates: Vec<GateOutcome>,
    pub features: RsFeatures,
    /// Informational composite momentum; not a gate.
    pub momentum_score: Option<f64>,
}

impl Diagnosis {
    /// Render the report as plain text for the chat/CLI layer.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Diagnosis: {} as of {}\n",
            self.symbol, self.target_date
        ));
        out.push_str(&format!(
            "Overall: {}\n\n",
            if self.is_pass { "PASS" } else { "FAIL" }
        ));

        for gate in &self.gates {
            let mark = if gate.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("[{mark}] {:<14} {}\n", gate.name, gate.detail));
        }

        out.push_str("\nFeatures:\n");
        out.push_str(&format!(
            "  leader_peak_excess: {}\n",
            fmt_opt_pct(self.features.leader_peak_excess)
        ));
        out.push_str(&format!(
            "  rs_near_high_pct:   {}\n",
            fmt_opt_pct(self.features.rs_near_high_pct)
        ));
        out.push_str(&format!(
            "  rs_dd_vs_price_dd:  {}\n",
            match self.features.rs_dd_vs_price_dd {
                Some(v) if v.is_infinite() => "inf".into(),
                Some(v) => format!("{v:.2}"),
                None => "n/a".into(),
            }
        ));
        out.push_str(&format!(
            "  rs_ma20_slope:      {}\n",
            fmt_opt_pct(self.features.rs_ma20_slope)
        ));
        out.push_str(&format!(
            "  momentum_score:     {}\n",
            match self.momentum_score {
                Some(v) => format!("{v:.3}"),
                None => "n/a".into(),
            }
        ));

        out
    }
}

fn fmt_opt_pct(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{x:.2}%"),
        None => "n/a".into(),
    }
}

/// Fetch one symbol plus the benchmark and evaluate every gate.
pub fn diagnose_symbol(
    provider: &dyn DataProvider,
    symbol: &str,
    target_date: NaiveDate,
    config: &ScanConfig,
) -> Result<Diagnosis, ScanError> {
    let start = target_date - Duration::days(config.history_calendar_days);
    let end = target_date + Duration::days(1);

    let benchmark = provider
        .fetch_daily(&config.benchmark_symbol, start, end)
        .map_err(|source| ScanError::Benchmark {
            symbol: config.benchmark_symbol.clone(),
            source,
        })?;

    let series = provider
        .fetch_daily(symbol, start, end)
        .map_err(|source| ScanError::Symbol {
            symbol: symbol.to_string(),
            source,
        })?;

    let momentum_score = performance_score(&series.closes());
    let eval = evaluate_symbol(&series, &benchmark, &config.params, EvalMode::Exhaustive);

    Ok(Diagnosis {
        symbol: eval.symbol,
        target_date,
        is_pass: eval.passed,
        gates: eval.gates,
        features: eval.features,
        momentum_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use angelscan_core::gates::GateOutcome;

    fn sample() -> Diagnosis {
        Diagnosis {
            symbol: "WIN".into(),
            target_date: NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
            is_pass: false,
            gates: vec![
                GateOutcome::pass("history", "300 bars"),
                GateOutcome::fail("liquidity", "close $5.00, 20d dollar volume $1.0M"),
            ],
            features: RsFeatures {
                leader_peak_excess: Some(22.31),
                rs_near_high_pct: None,
                rs_dd_vs_price_dd: Some(f64::INFINITY),
                rs_ma20_slope: None,
            },
            momentum_score: Some(0.123),
        }
    }

    #[test]
    fn render_contains_every_gate_line() {
        let text = sample().render_text();
        assert!(text.contains("Overall: FAIL"));
        assert!(text.contains("[PASS] history"));
        assert!(text.contains("[FAIL] liquidity"));
    }

    #[test]
    fn render_formats_partial_features() {
        let text = sample().render_text();
        assert!(text.contains("leader_peak_excess: 22.31%"));
        assert!(text.contains("rs_near_high_pct:   n/a"));
        assert!(text.contains("rs_dd_vs_price_dd:  inf"));
        assert!(text.contains("momentum_score:     0.123"));
    }
}
