//! Dmac - dual moving-average crossover signal generation over OHLC bars.
//!
//! # Overview
//!
//! This crate implements a single trend-following trading algorithm: on each
//! new bar it compares a short-window simple moving average of the price
//! series against a long-window one and targets a full long position
//! (`1.0`) while the short average is strictly above the long average, flat
//! (`0.0`) otherwise.
//!
//! The algorithm plugs into a host driver (backtest or live) through the
//! [`TradingAlgo`] trait: the driver pushes the accumulated bar history on
//! every new bar and acts on the returned target weight. The crate does not
//! include a driver, order execution, or portfolio accounting.
//!
//! # Quick Start
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use dmac::{Bar, DualMaCrossover, TradingAlgo};
//!
//! let algo = DualMaCrossover::on_close(2, 4);
//!
//! let bars: Vec<Bar> = [10.0, 10.0, 10.0, 10.0, 20.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &px)| {
//!         Bar::new(
//!             Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
//!                 + chrono::Duration::days(i as i64),
//!             px,
//!             px + 1.0,
//!             px - 1.0,
//!             px,
//!             1_000.0,
//!         )
//!     })
//!     .collect();
//!
//! // Short SMA(2) = 15.0 > long SMA(4) = 12.5: go long.
//! assert_eq!(algo.on_bar(&bars), 1.0);
//! ```
//!
//! # Modules
//!
//! - [`types`]: core data types ([`Bar`], [`PriceField`])
//! - [`strategy`]: the [`TradingAlgo`] trait implemented by algorithms
//! - [`strategies`]: algorithm implementations ([`DualMaCrossover`])
//! - [`data`]: CSV bar loading and the [`sma`](data::sma) primitive
//! - [`config`]: TOML configuration files
//! - [`error`]: error types

pub mod config;
pub mod data;
pub mod error;
pub mod strategies;
pub mod strategy;
pub mod types;

// Re-exports for convenience
pub use config::AlgoFileConfig;
pub use data::{load_csv, DataConfig};
pub use error::{AlgoError, Result};
pub use strategies::DualMaCrossover;
pub use strategy::TradingAlgo;
pub use types::{Bar, PriceField};
