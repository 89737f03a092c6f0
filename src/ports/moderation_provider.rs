//! Moderation endpoint port used by the chat safety gate.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

#[async_trait]
pub trait ModerationProvider: Send + Sync {
    /// True when the provider flags `text` for self-harm.
    ///
    /// # Errors
    ///
    /// - `ModerationProviderError` on any provider failure
    async fn flags_self_harm(&self, text: &str) -> Result<bool, DomainError>;
}
