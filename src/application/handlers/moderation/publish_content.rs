//! PublishContentHandler - reviews a new post or comment, then stores it.

use std::sync::Arc;
use tracing::info;

use super::{AutoModeration, ContentResult};
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::moderation::{ContentItem, ContentKind};
use crate::ports::ContentRepository;

#[derive(Debug, Clone)]
pub struct PublishContentCommand {
    pub author_id: UserId,
    pub kind: ContentKind,
    pub body: String,
}

/// Publishing succeeds even when the classifier is unreachable, unless
/// fail-open is turned off.
///
/// The item is reviewed before its first write, so no other writer can
/// touch it while the classifier runs.
pub struct PublishContentHandler {
    repository: Arc<dyn ContentRepository>,
    moderation: Arc<AutoModeration>,
}

impl PublishContentHandler {
    pub fn new(repository: Arc<dyn ContentRepository>, moderation: Arc<AutoModeration>) -> Self {
        Self {
            repository,
            moderation,
        }
    }

    pub async fn handle(&self, cmd: PublishContentCommand) -> Result<ContentResult, DomainError> {
        // 1. Validate
        let mut item = ContentItem::new(cmd.author_id, cmd.kind, cmd.body, Timestamp::now())?;

        // 2. Automatic review
        self.moderation.review(&mut item).await?;

        // 3. Store
        self.repository.save(&item).await?;
        info!(
            content_id = %item.id,
            author_id = %item.author_id,
            status = item.status().as_str(),
            "Content published"
        );

        Ok(ContentResult { item })
    }
}
