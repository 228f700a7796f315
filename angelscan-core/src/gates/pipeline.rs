//! The gate pipeline — one symbol through every gate, in fixed order.
//!
//! The scan orchestrator runs the chain with short-circuit (a failing gate
//! stops evaluation); the diagnostic reporter runs every gate regardless.
//! Both produce the same [`SymbolEvaluation`] shape.

use crate::domain::BarSeries;
use crate::params::ScanParams;

use super::{
    consolidation, fallen_angel, history, liquidity, position_52w, tightness, trend,
    volume_dryup, GateOutcome, RsFeatures,
};

/// Whether a failing gate stops the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalMode {
    /// Stop at the first failing gate (scan path).
    ShortCircuit,
    /// Evaluate every gate (diagnostic path).
    Exhaustive,
}

/// All gate outcomes for one symbol plus the RS feature bundle.
#[derive(Debug, Clone)]
pub struct SymbolEvaluation {
    pub symbol: String,
    /// AND of every evaluated gate.
    pub passed: bool,
    /// Outcomes in evaluation order. Under `ShortCircuit` this stops at the
    /// first failure.
    pub gates: Vec<GateOutcome>,
    /// Always present; fields the Fallen-Angel gate never reached stay
    /// `None`.
    pub features: RsFeatures,
}

/// Run the full gate chain for one symbol against the benchmark.
pub fn evaluate_symbol(
    series: &BarSeries,
    benchmark: &BarSeries,
    params: &ScanParams,
    mode: EvalMode,
) -> SymbolEvaluation {
    let mut gates: Vec<GateOutcome> = Vec::with_capacity(8);
    let mut passed = true;
    let mut features = RsFeatures::default();

    let simple_gates: [fn(&BarSeries, &ScanParams) -> GateOutcome; 6] = [
        |s, _p| history::evaluate(s),
        liquidity::evaluate,
        position_52w::evaluate,
        consolidation::evaluate,
        volume_dryup::evaluate,
        trend::evaluate,
    ];

    for gate in simple_gates {
        let outcome = gate(series, params);
        passed &= outcome.passed;
        gates.push(outcome);
        if !passed && mode == EvalMode::ShortCircuit {
            return SymbolEvaluation {
                symbol: series.symbol().to_string(),
                passed,
                gates,
                features,
            };
        }
    }

    let outcome = tightness::evaluate(series, params);
    passed &= outcome.passed;
    gates.push(outcome);
    if !passed && mode == EvalMode::ShortCircuit {
        return SymbolEvaluation {
            symbol: series.symbol().to_string(),
            passed,
            gates,
            features,
        };
    }

    let (outcome, rs_features) = fallen_angel::evaluate(series, benchmark, params);
    features = rs_features;
    passed &= outcome.passed;
    gates.push(outcome);

    SymbolEvaluation {
        symbol: series.symbol().to_string(),
        passed,
        gates,
        features,
    }
}
