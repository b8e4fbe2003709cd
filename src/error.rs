//! Error types for signal generation and data loading.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum AlgoError {
    #[error("Data error: {0}")]
    DataError(String),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Date parsing error: {0}")]
    DateParseError(#[from] chrono::ParseError),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("No data loaded")]
    NoData,
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, AlgoError>;
