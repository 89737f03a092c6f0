//! DeleteContentHandler - author soft-deletes their own item.

use std::sync::Arc;
use tracing::info;

use super::{load_content, ContentResult};
use crate::domain::foundation::{ContentId, DomainError, Timestamp, UserId};
use crate::ports::ContentRepository;

#[derive(Debug, Clone)]
pub struct DeleteContentCommand {
    pub owner_id: UserId,
    pub content_id: ContentId,
}

pub struct DeleteContentHandler {
    repository: Arc<dyn ContentRepository>,
}

impl DeleteContentHandler {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteContentCommand) -> Result<ContentResult, DomainError> {
        let mut item = load_content(self.repository.as_ref(), &cmd.content_id).await?;
        item.soft_delete(&cmd.owner_id, Timestamp::now())?;
        item.version = self.repository.update(&item).await?;

        info!(content_id = %item.id, "Content deleted by author");
        Ok(ContentResult { item })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryContentRepository;
    use crate::domain::moderation::{ContentItem, ContentKind, ModerationStatus};

    #[tokio::test]
    async fn author_delete_hides_item() {
        let repo = Arc::new(InMemoryContentRepository::new());
        let author = UserId::new("author").unwrap();
        let item = ContentItem::new(
            author.clone(),
            ContentKind::Post,
            "regrettable",
            Timestamp::now(),
        )
        .unwrap();
        repo.save(&item).await.unwrap();

        let out = DeleteContentHandler::new(repo)
            .handle(DeleteContentCommand {
                owner_id: author,
                content_id: item.id,
            })
            .await
            .unwrap();

        assert_eq!(out.item.status(), ModerationStatus::Hidden);
        assert!(!out.item.status().is_publicly_visible());
    }
}
