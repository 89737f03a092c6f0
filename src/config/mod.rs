//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `WELLSPRING` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use wellspring::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Recommending {} strategies", config.recommendation.default_limit);
//! ```

mod classifier;
mod database;
mod error;
mod logging;
mod moderation;
mod recommendation;

pub use classifier::ClassifierConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use moderation::ModerationConfig;
pub use recommendation::RecommendationConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// in-memory configuration with fail-open moderation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// External classifier and moderation endpoints
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Recommendation limits and diary window
    #[serde(default)]
    pub recommendation: RecommendationConfig,

    /// Auto-flagging policy
    #[serde(default)]
    pub moderation: ModerationConfig,

    /// PostgreSQL connection (optional)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WELLSPRING` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Splits `MODERATION__RISKY_LABELS` on commas
    ///
    /// # Environment Variable Format
    ///
    /// - `WELLSPRING__CLASSIFIER__TIMEOUT_MS=3000` -> `classifier.timeout_ms = 3000`
    /// - `WELLSPRING__MODERATION__RISKY_LABELS=Toxic,Hate` -> two labels
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("WELLSPRING")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("moderation.risky_labels"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.classifier.validate()?;
        self.recommendation.validate()?;
        self.moderation.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
