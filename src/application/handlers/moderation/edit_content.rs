//! EditContentHandler - author edits, followed by a fresh review.

use std::sync::Arc;
use tracing::info;

use super::{load_content, AutoModeration, ContentResult};
use crate::domain::foundation::{ContentId, DomainError, Timestamp, UserId};
use crate::ports::ContentRepository;

#[derive(Debug, Clone)]
pub struct EditContentCommand {
    pub editor_id: UserId,
    pub content_id: ContentId,
    pub body: String,
}

pub struct EditContentHandler {
    repository: Arc<dyn ContentRepository>,
    moderation: Arc<AutoModeration>,
}

impl EditContentHandler {
    pub fn new(repository: Arc<dyn ContentRepository>, moderation: Arc<AutoModeration>) -> Self {
        Self {
            repository,
            moderation,
        }
    }

    pub async fn handle(&self, cmd: EditContentCommand) -> Result<ContentResult, DomainError> {
        let mut item = load_content(self.repository.as_ref(), &cmd.content_id).await?;
        item.edit(&cmd.editor_id, cmd.body, Timestamp::now())?;

        self.moderation.review(&mut item).await?;
        item.version = self.repository.update(&item).await?;
        info!(content_id = %item.id, "Content edited");

        Ok(ContentResult { item })
    }
}
