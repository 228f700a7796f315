//! Progress callbacks for multi-batch scans.

/// Observer for scan progress. Implementations must be cheap: callbacks
/// fire from the batch loop.
pub trait ScanProgress: Send + Sync {
    /// Called before a batch is fetched.
    fn on_batch_start(&self, batch_index: usize, batch_count: usize, symbols: &[String]);

    /// Called when a symbol is dropped without evaluation (fetch failure,
    /// stale data, provider outage).
    fn on_symbol_skipped(&self, symbol: &str, reason: &str);

    /// Called when a symbol clears every gate.
    fn on_symbol_passed(&self, symbol: &str);

    /// Called once the whole universe has been processed.
    fn on_scan_complete(&self, evaluated: usize, passed: usize, skipped: usize);
}

/// Progress reporter that prints to stdout.
pub struct StdoutProgress;

impl ScanProgress for StdoutProgress {
    fn on_batch_start(&self, batch_index: usize, batch_count: usize, symbols: &[String]) {
        println!(
            "[batch {}/{}] fetching {} symbols...",
            batch_index + 1,
            batch_count,
            symbols.len()
        );
    }

    fn on_symbol_skipped(&self, symbol: &str, reason: &str) {
        println!("  SKIP {symbol}: {reason}");
    }

    fn on_symbol_passed(&self, symbol: &str) {
        println!("  PASS {symbol}");
    }

    fn on_scan_complete(&self, evaluated: usize, passed: usize, skipped: usize) {
        println!("\nScan complete: {evaluated} evaluated, {passed} passed, {skipped} skipped");
    }
}

/// No-op reporter for tests and embedding.
pub struct SilentProgress;

impl ScanProgress for SilentProgress {
    fn on_batch_start(&self, _: usize, _: usize, _: &[String]) {}
    fn on_symbol_skipped(&self, _: &str, _: &str) {}
    fn on_symbol_passed(&self, _: &str) {}
    fn on_scan_complete(&self, _: usize, _: usize, _: usize) {}
}
