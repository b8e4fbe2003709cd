//! Configuration file support.
//!
//! Allows loading algorithm parameters from TOML files for reproducible
//! runs.

use crate::error::{AlgoError, Result};
use crate::strategies::DualMaCrossover;
use crate::types::PriceField;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Complete algorithm configuration loaded from a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlgoFileConfig {
    /// Strategy settings.
    #[serde(default)]
    pub strategy: StrategySettings,
    /// Data settings.
    #[serde(default)]
    pub data: DataSettings,
}

/// Strategy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySettings {
    /// Strategy type.
    #[serde(default = "default_strategy")]
    pub name: String,
    /// Strategy parameters.
    #[serde(default)]
    pub params: StrategyParams,
}

fn default_strategy() -> String {
    "dual-ma-crossover".to_string()
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            name: default_strategy(),
            params: StrategyParams::default(),
        }
    }
}

/// Strategy parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyParams {
    /// Bars in the short-term moving average.
    #[serde(default = "default_short_lookback")]
    pub short_lookback: usize,
    /// Bars in the long-term moving average.
    #[serde(default = "default_long_lookback")]
    pub long_lookback: usize,
    /// OHLC field the averages read.
    #[serde(default)]
    pub price_field: PriceField,
}

fn default_short_lookback() -> usize {
    10
}
fn default_long_lookback() -> usize {
    30
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            short_lookback: 10,
            long_lookback: 30,
            price_field: PriceField::Close,
        }
    }
}

/// Data settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Path to data file.
    pub path: Option<String>,
    /// Symbol name.
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Date format in CSV.
    pub date_format: Option<String>,
}

fn default_symbol() -> String {
    "SYMBOL".to_string()
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: None,
            symbol: default_symbol(),
            date_format: None,
        }
    }
}

impl AlgoFileConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());

        let content = fs::read_to_string(path)?;
        let config: AlgoFileConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AlgoError::ConfigError(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build the configured algorithm.
    ///
    /// Lookbacks are passed through as-is; a config with
    /// `short_lookback >= long_lookback` builds the same degenerate
    /// generator direct construction would.
    pub fn to_algo(&self) -> Result<DualMaCrossover> {
        match self.strategy.name.as_str() {
            "dual-ma-crossover" => Ok(DualMaCrossover::new(
                self.strategy.params.short_lookback,
                self.strategy.params.long_lookback,
                self.strategy.params.price_field,
            )),
            other => Err(AlgoError::ConfigError(format!(
                "unknown strategy: '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::TradingAlgo;

    #[test]
    fn test_defaults() {
        let config = AlgoFileConfig::default();
        assert_eq!(config.strategy.name, "dual-ma-crossover");
        assert_eq!(config.strategy.params.short_lookback, 10);
        assert_eq!(config.strategy.params.long_lookback, 30);
        assert_eq!(config.strategy.params.price_field, PriceField::Close);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [strategy]
            name = "dual-ma-crossover"

            [strategy.params]
            short_lookback = 5
            long_lookback = 20
            price_field = "high"

            [data]
            path = "data/SPY.csv"
            symbol = "SPY"
        "#;

        let config: AlgoFileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.strategy.params.short_lookback, 5);
        assert_eq!(config.strategy.params.long_lookback, 20);
        assert_eq!(config.strategy.params.price_field, PriceField::High);
        assert_eq!(config.data.symbol, "SPY");
        assert_eq!(config.data.path.as_deref(), Some("data/SPY.csv"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
            [strategy.params]
            long_lookback = 50
        "#;

        let config: AlgoFileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.strategy.params.short_lookback, 10);
        assert_eq!(config.strategy.params.long_lookback, 50);
    }

    #[test]
    fn test_to_algo() {
        let mut config = AlgoFileConfig::default();
        config.strategy.params.short_lookback = 2;
        config.strategy.params.long_lookback = 4;

        let algo = config.to_algo().unwrap();
        assert_eq!(algo.short_lookback(), 2);
        assert_eq!(algo.long_lookback(), 4);
        assert_eq!(algo.warmup_period(), 5);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let mut config = AlgoFileConfig::default();
        config.strategy.name = "momentum".to_string();
        assert!(config.to_algo().is_err());
    }
}
