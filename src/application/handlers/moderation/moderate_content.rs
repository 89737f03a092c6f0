//! ModerateContentHandler - privileged visibility decisions.

use std::sync::Arc;
use tracing::info;

use super::{load_content, ContentResult};
use crate::domain::foundation::{ContentId, DomainError, Timestamp, UserId};
use crate::domain::moderation::ActorRole;
use crate::ports::ContentRepository;

/// What the moderator decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationDecision {
    /// Clear a flag.
    Approve,
    TakeDown,
    /// Make hidden content visible again.
    Restore,
}

#[derive(Debug, Clone)]
pub struct ModerateContentCommand {
    pub actor_id: UserId,
    pub role: ActorRole,
    pub content_id: ContentId,
    pub decision: ModerationDecision,
}

pub struct ModerateContentHandler {
    repository: Arc<dyn ContentRepository>,
}

impl ModerateContentHandler {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ModerateContentCommand) -> Result<ContentResult, DomainError> {
        let mut item = load_content(self.repository.as_ref(), &cmd.content_id).await?;
        let now = Timestamp::now();

        match cmd.decision {
            ModerationDecision::Approve => item.approve(cmd.role, now)?,
            ModerationDecision::TakeDown => item.take_down(cmd.role, now)?,
            ModerationDecision::Restore => item.restore(cmd.role, now)?,
        }

        item.version = self.repository.update(&item).await?;
        info!(
            content_id = %item.id,
            actor_id = %cmd.actor_id,
            decision = ?cmd.decision,
            status = item.status().as_str(),
            "Moderation decision applied"
        );

        Ok(ContentResult { item })
    }
}
