//! Classifier output recorded on content.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

/// Label used when the classifier is unavailable.
pub const SAFE_LABEL: &str = "Safe";

/// One classifier verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub confidence: f64,
    pub last_checked: Timestamp,
}

impl Classification {
    /// Builds a verdict, rejecting blank labels and confidence outside `0.0..=1.0`.
    pub fn new(
        label: impl Into<String>,
        confidence: f64,
        last_checked: Timestamp,
    ) -> Result<Self, ValidationError> {
        let label = label.into().trim().to_string();
        if label.is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        if !(0.0..=1.0).contains(&confidence) {
            return Err(ValidationError::invalid_format(
                "confidence",
                format!("must be within 0.0..=1.0, got {}", confidence),
            ));
        }
        Ok(Self {
            label,
            confidence,
            last_checked,
        })
    }

    /// `Safe` at full confidence, substituted when classification fails.
    pub fn safe_fallback(now: Timestamp) -> Self {
        Self {
            label: SAFE_LABEL.to_string(),
            confidence: 1.0,
            last_checked: now,
        }
    }

    pub fn is_safe(&self) -> bool {
        self.label.eq_ignore_ascii_case(SAFE_LABEL)
    }
}
