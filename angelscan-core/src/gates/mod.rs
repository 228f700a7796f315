//! Gate evaluators — the screening pipeline's pass/fail predicates.
//!
//! Every gate is a pure function of a bar series (plus the benchmark for the
//! relative-strength gate) and one immutable [`ScanParams`] value. No gate
//! mutates shared state, and no gate ever panics on short input: anything
//! under 260 observations fails with an "insufficient history" outcome.
//!
//! The orchestrator runs the gates as a short-circuit AND chain; the
//! diagnostic reporter runs every gate regardless. Both paths go through
//! [`pipeline::evaluate_symbol`].

pub mod consolidation;
pub mod fallen_angel;
pub mod history;
pub mod liquidity;
pub mod pipeline;
pub mod position_52w;
pub mod tightness;
pub mod trend;
pub mod volume_dryup;

pub use fallen_angel::RsFeatures;
pub use pipeline::{evaluate_symbol, EvalMode, SymbolEvaluation};

use serde::Serialize;

/// Result of one gate: pass/fail plus a human-readable detail for
/// diagnostics. Detail strings are for people, not for parsing.
#[derive(Debug, Clone, Serialize)]
pub struct GateOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl GateOutcome {
    pub fn pass(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            passed: true,
            detail: detail.into(),
        }
    }

    pub fn fail(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            passed: false,
            detail: detail.into(),
        }
    }
}

/// Shared short-history failure used by every gate.
pub(crate) fn insufficient_history(name: &'static str, len: usize) -> GateOutcome {
    GateOutcome::fail(
        name,
        format!(
            "insufficient history: {len} bars (< {})",
            crate::params::MIN_HISTORY_DAYS
        ),
    )
}
