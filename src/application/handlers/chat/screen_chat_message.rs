//! ScreenChatMessageHandler - safety gate in front of the completion provider.
//!
//! # Flow
//!
//! 1. Local crisis keyword check. A match is HIGH risk: the crisis message
//!    is returned and the text goes nowhere else.
//! 2. Otherwise the moderation provider is asked about self-harm. A provider
//!    error counts as "not flagged".
//! 3. MODERATE and LOW messages are cleared for forwarding.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::safety::{RiskLevel, SafetyScreen, CRISIS_MESSAGE};
use crate::ports::ModerationProvider;

#[derive(Debug, Clone)]
pub struct ScreenChatMessageCommand {
    pub user_id: UserId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenChatMessageResult {
    pub risk: RiskLevel,
    /// Set only for HIGH risk.
    pub crisis_message: Option<&'static str>,
    /// Whether the text may be sent to the completion provider.
    pub forward: bool,
}

pub struct ScreenChatMessageHandler {
    provider: Arc<dyn ModerationProvider>,
}

impl ScreenChatMessageHandler {
    pub fn new(provider: Arc<dyn ModerationProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(
        &self,
        cmd: ScreenChatMessageCommand,
    ) -> Result<ScreenChatMessageResult, DomainError> {
        // Message text is never logged.
        if SafetyScreen::keyword_match(&cmd.text) {
            warn!(user_id = %cmd.user_id, risk = ?RiskLevel::High, "Crisis keywords detected");
            return Ok(ScreenChatMessageResult {
                risk: RiskLevel::High,
                crisis_message: Some(CRISIS_MESSAGE),
                forward: false,
            });
        }

        let provider_flag = match self.provider.flags_self_harm(&cmd.text).await {
            Ok(flagged) => flagged,
            Err(e) => {
                warn!(user_id = %cmd.user_id, error = %e, "Moderation check failed, continuing unflagged");
                false
            }
        };

        let risk = SafetyScreen::assess(&cmd.text, provider_flag);
        if risk == RiskLevel::Moderate {
            info!(user_id = %cmd.user_id, risk = ?risk, "Provider flagged self-harm");
        }

        Ok(ScreenChatMessageResult {
            risk,
            crisis_message: None,
            forward: true,
        })
    }
}
