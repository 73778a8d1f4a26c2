//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Reciprocal precision must be at most {max} decimals, got {actual}")]
    InvalidPrecision { max: u32, actual: u32 },

    #[error("Minimum matrix size must be at least 1")]
    MinSizeTooSmall,

    #[error("Matrix size bounds are inverted (min {min} > max {max})")]
    InvertedSizeBounds { min: usize, max: usize },

    #[error("Random index fallback must be a positive finite number")]
    InvalidRandomIndexFallback,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),

    #[error("Export directory must not be blank")]
    BlankExportDirectory,
}
