//! The trading-algorithm trait implemented by every signal strategy.

use crate::types::Bar;

/// Trait that all trading algorithms must implement.
///
/// The driver (backtest or live) calls [`on_bar`](TradingAlgo::on_bar) once
/// per new bar with the full accumulated history, most recent bar last, and
/// acts on the returned target position weight. Implementations take `&self`:
/// an algorithm is a pure function of its configuration and the bar history
/// it is handed, with no cross-call state. That makes every implementation
/// trivially safe to share across threads, which the `Send + Sync` bound
/// reflects.
pub trait TradingAlgo: Send + Sync {
    /// Returns the name of the algorithm.
    fn name(&self) -> &str;

    /// Compute the target position weight for the current bar.
    ///
    /// `bars` holds all bars available up to and including the current one.
    /// The return value is a target weight; for binary long-only algorithms
    /// it is exactly `0.0` or `1.0`.
    fn on_bar(&self, bars: &[Bar]) -> f64;

    /// Minimum bars needed before the algorithm can produce a meaningful
    /// signal. Drivers may use this to skip the warmup phase.
    fn warmup_period(&self) -> usize {
        0
    }

    /// Get algorithm parameters as key-value pairs for logging.
    fn parameters(&self) -> Vec<(String, String)> {
        vec![]
    }
}
