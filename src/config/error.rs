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
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Classifier URL must start with http:// or https://")]
    InvalidClassifierUrl,

    #[error("Classifier timeout must be between 1 and 60000 ms")]
    InvalidClassifierTimeout,

    #[error("Flag threshold must be within 0.0..=1.0")]
    InvalidFlagThreshold,

    #[error("At least one risky label is required")]
    NoRiskyLabels,

    #[error("Recommendation limit must be at least 1")]
    InvalidRecommendationLimit,

    #[error("Diary window must be at least 1 day")]
    InvalidDiaryWindow,

    #[error("Unknown log format '{0}', expected text or json")]
    InvalidLogFormat(String),
}
