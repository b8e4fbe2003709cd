//! Trading algorithm implementations.
//!
//! Currently a single algorithm ships with the crate:
//!
//! - [`DualMaCrossover`]: dual simple-moving-average crossover

mod dual_ma;

pub use dual_ma::DualMaCrossover;
