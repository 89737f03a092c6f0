//! Auto-flagging policy.

use serde::{Deserialize, Serialize};

use super::{Classification, ContentItem, ModerationStatus};

/// Confidence at or above which a risky label flags content.
pub const DEFAULT_FLAG_THRESHOLD: f64 = 0.7;

/// Labels treated as risky when none are configured.
pub const DEFAULT_RISKY_LABELS: [&str; 5] = ["Toxic", "Harassment", "Hate", "SelfHarm", "Violence"];

/// Decides whether a classification warrants flagging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationPolicy {
    pub flag_threshold: f64,
    pub risky_labels: Vec<String>,
}

impl Default for ModerationPolicy {
    fn default() -> Self {
        Self {
            flag_threshold: DEFAULT_FLAG_THRESHOLD,
            risky_labels: DEFAULT_RISKY_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl ModerationPolicy {
    pub fn new(flag_threshold: f64, risky_labels: Vec<String>) -> Self {
        Self {
            flag_threshold,
            risky_labels,
        }
    }

    /// True for a risky label at or above the threshold.
    pub fn should_flag(&self, classification: &Classification) -> bool {
        classification.confidence >= self.flag_threshold
            && self
                .risky_labels
                .iter()
                .any(|l| l.eq_ignore_ascii_case(&classification.label))
    }

    /// Like `should_flag`, but only items still `Visible` are eligible.
    pub fn should_auto_flag(&self, item: &ContentItem, classification: &Classification) -> bool {
        item.status() == ModerationStatus::Visible && self.should_flag(classification)
    }
}
