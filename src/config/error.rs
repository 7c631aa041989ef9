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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Display sort threshold must be at least 1")]
    InvalidSortThreshold,

    #[error("Highlight weight must be between 1 and 5, got {0}")]
    InvalidHighlightWeight(u8),

    #[error("Log filter cannot be empty")]
    EmptyLogFilter,
}
