//! Text classifier configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// External classifier and moderation endpoint settings
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Classification endpoint; auto-moderation is off when unset
    #[serde(default)]
    pub url: Option<String>,

    /// Self-harm moderation endpoint for the chat safety gate
    #[serde(default)]
    pub moderation_url: Option<String>,

    /// Bearer token sent to both endpoints
    #[serde(default)]
    pub api_key: Option<Secret<String>>,

    /// Per-call timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Treat failures as `Safe` / 1.0 instead of surfacing them
    #[serde(default = "default_fail_open")]
    pub fail_open: bool,
}

impl ClassifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for url in [&self.url, &self.moderation_url].into_iter().flatten() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidClassifierUrl);
            }
        }
        if self.timeout_ms == 0 || self.timeout_ms > 60_000 {
            return Err(ValidationError::InvalidClassifierTimeout);
        }
        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            url: None,
            moderation_url: None,
            api_key: None,
            timeout_ms: default_timeout_ms(),
            fail_open: default_fail_open(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    5_000
}

fn default_fail_open() -> bool {
    true
}
