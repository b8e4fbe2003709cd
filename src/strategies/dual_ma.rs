//! Dual Moving Average Crossover algorithm.
//!
//! Handles a single price series. Compares a short-term simple moving
//! average against a long-term one to define bullish/bearish trend and
//! targets a full long position while the short average is above the long
//! average.

use crate::data::sma;
use crate::strategy::TradingAlgo;
use crate::types::{Bar, PriceField};
use tracing::debug;

/// Dual SMA crossover signal generator.
///
/// # Parameters
/// - `short_lookback`: number of bars in the short-term average
/// - `long_lookback`: number of bars in the long-term average
/// - `price_field`: which OHLC field the averages read (default: close)
///
/// # Behavior
/// - Returns `1.0` when the short SMA is strictly above the long SMA.
/// - Returns `0.0` otherwise, including when the two averages are equal.
/// - Returns `0.0` when fewer than `long_lookback + 1` bars are available.
///   This insufficient-data value is indistinguishable from a bearish
///   reading by return value alone; callers that need to tell the two apart
///   should check [`warmup_period`](TradingAlgo::warmup_period) against the
///   history length themselves.
///
/// No parameter validation is performed: `short_lookback >= long_lookback`
/// is accepted and simply produces a generator whose short average can never
/// strictly exceed its long average when the two lookbacks are equal.
#[derive(Debug, Clone)]
pub struct DualMaCrossover {
    short_lookback: usize,
    long_lookback: usize,
    price_field: PriceField,
}

impl DualMaCrossover {
    /// Create a new crossover generator reading the given OHLC field.
    pub fn new(short_lookback: usize, long_lookback: usize, price_field: PriceField) -> Self {
        Self {
            short_lookback,
            long_lookback,
            price_field,
        }
    }

    /// Create a generator reading the close, the conventional choice.
    pub fn on_close(short_lookback: usize, long_lookback: usize) -> Self {
        Self::new(short_lookback, long_lookback, PriceField::Close)
    }

    pub fn short_lookback(&self) -> usize {
        self.short_lookback
    }

    pub fn long_lookback(&self) -> usize {
        self.long_lookback
    }

    pub fn price_field(&self) -> PriceField {
        self.price_field
    }
}

impl TradingAlgo for DualMaCrossover {
    fn name(&self) -> &str {
        "Dual MA Crossover"
    }

    fn on_bar(&self, bars: &[Bar]) -> f64 {
        if bars.len() < self.long_lookback + 1 {
            return 0.0;
        }

        // Both windows end at the current bar; lookbacks are in bars.
        // sma() only returns None for an empty window here, which the
        // length guard above cannot rule out when a lookback is zero.
        let short = match sma(bars, self.price_field, self.short_lookback) {
            Some(v) => v,
            None => return 0.0,
        };
        let long = match sma(bars, self.price_field, self.long_lookback) {
            Some(v) => v,
            None => return 0.0,
        };

        debug!(
            short_sma = short,
            long_sma = long,
            field = %self.price_field,
            "dual MA evaluated"
        );

        // Strict inequality: equal averages read as bearish. NaN in the
        // window compares false and also reads as bearish.
        if short > long {
            1.0
        } else {
            0.0
        }
    }

    fn warmup_period(&self) -> usize {
        self.long_lookback + 1
    }

    fn parameters(&self) -> Vec<(String, String)> {
        vec![
            ("short_lookback".to_string(), self.short_lookback.to_string()),
            ("long_lookback".to_string(), self.long_lookback.to_string()),
            ("price_field".to_string(), self.price_field.to_string()),
        ]
    }
}
