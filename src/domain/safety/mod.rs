//! Safety module - crisis screening for companion chat.
//!
//! A keyword match is HIGH risk and always answered with the fixed crisis
//! message; the user's text is then never forwarded to any provider.

use serde::{Deserialize, Serialize};

/// Fixed reply for HIGH-risk messages.
pub const CRISIS_MESSAGE: &str = "It sounds like you may be going through something really \
painful. You don't have to face it alone. If you are in immediate danger, call your local \
emergency number now. You can also call or text 988 (Suicide & Crisis Lifeline, US) or reach \
a local crisis line, any time of day.";

/// Phrases that mark a message as HIGH risk. Matched case-insensitively.
pub const CRISIS_KEYWORDS: [&str; 12] = [
    "suicide",
    "suicidal",
    "kill myself",
    "end my life",
    "want to die",
    "better off dead",
    "self harm",
    "self-harm",
    "hurt myself",
    "cut myself",
    "overdose",
    "no reason to live",
];

/// Three-tier chat risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// Pure risk assessment.
pub struct SafetyScreen;

impl SafetyScreen {
    /// True when `text` contains any crisis keyword.
    pub fn keyword_match(text: &str) -> bool {
        let lowered = text.to_lowercase();
        CRISIS_KEYWORDS.iter().any(|k| lowered.contains(k))
    }

    /// HIGH on keyword match, else MODERATE if the provider flagged
    /// self-harm, else LOW.
    pub fn assess(text: &str, provider_self_harm: bool) -> RiskLevel {
        if Self::keyword_match(text) {
            RiskLevel::High
        } else if provider_self_harm {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}
