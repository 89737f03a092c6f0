//! Moderation policy configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::moderation::{ModerationPolicy, DEFAULT_FLAG_THRESHOLD, DEFAULT_RISKY_LABELS};

#[derive(Debug, Clone, Deserialize)]
pub struct ModerationConfig {
    /// Minimum confidence for a risky label to auto-flag
    #[serde(default = "default_flag_threshold")]
    pub flag_threshold: f64,

    /// Labels that count as risky (comma separated in the environment)
    #[serde(default = "default_risky_labels")]
    pub risky_labels: Vec<String>,

    /// Flag content automatically after classification
    #[serde(default = "default_auto_flag")]
    pub auto_flag: bool,
}

impl ModerationConfig {
    pub fn policy(&self) -> ModerationPolicy {
        ModerationPolicy::new(self.flag_threshold, self.risky_labels.clone())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.flag_threshold) {
            return Err(ValidationError::InvalidFlagThreshold);
        }
        if self.risky_labels.iter().all(|l| l.trim().is_empty()) {
            return Err(ValidationError::NoRiskyLabels);
        }
        Ok(())
    }
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            flag_threshold: default_flag_threshold(),
            risky_labels: default_risky_labels(),
            auto_flag: default_auto_flag(),
        }
    }
}

fn default_flag_threshold() -> f64 {
    DEFAULT_FLAG_THRESHOLD
}

fn default_risky_labels() -> Vec<String> {
    DEFAULT_RISKY_LABELS.iter().map(|l| l.to_string()).collect()
}

fn default_auto_flag() -> bool {
    true
}
