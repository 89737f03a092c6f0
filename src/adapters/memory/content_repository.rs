//! In-memory content repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ContentId, DomainError, ErrorCode};
use crate::domain::moderation::{ContentItem, Vote};
use crate::ports::ContentRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryContentRepository {
    items: Arc<RwLock<HashMap<ContentId, ContentItem>>>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

fn not_found(id: &ContentId) -> DomainError {
    DomainError::not_found(ErrorCode::ContentNotFound, "Content", id)
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn save(&self, item: &ContentItem) -> Result<(), DomainError> {
        self.items.write().await.insert(item.id, item.clone());
        Ok(())
    }

    async fn update(&self, item: &ContentItem) -> Result<u64, DomainError> {
        let mut items = self.items.write().await;
        let stored = items.get_mut(&item.id).ok_or_else(|| not_found(&item.id))?;
        if stored.version != item.version {
            return Err(DomainError::concurrent_modification(item.id.to_string()));
        }

        let (up, down) = (stored.up_votes, stored.down_votes);
        *stored = item.clone();
        stored.up_votes = up;
        stored.down_votes = down;
        stored.version = item.version + 1;
        Ok(stored.version)
    }

    async fn find(&self, id: &ContentId) -> Result<Option<ContentItem>, DomainError> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn increment_vote(&self, id: &ContentId, vote: Vote) -> Result<(u64, u64), DomainError> {
        let mut items = self.items.write().await;
        let item = items.get_mut(id).ok_or_else(|| not_found(id))?;
        match vote {
            Vote::Up => item.up_votes += 1,
            Vote::Down => item.down_votes += 1,
        }
        Ok((item.up_votes, item.down_votes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Timestamp, UserId};
    use crate::domain::moderation::{ActorRole, ContentKind, ModerationStatus};

    fn post() -> ContentItem {
        ContentItem::new(UserId::new("author").unwrap(), ContentKind::Post, "hi", Timestamp::now())
            .unwrap()
    }

    #[tokio::test]
    async fn concurrent_votes_are_not_lost() {
        let repo = InMemoryContentRepository::new();
        let item = post();
        repo.save(&item).await.unwrap();

        let mut tasks = Vec::new();
        for i in 0..50 {
            let repo = repo.clone();
            let id = item.id;
            let vote = if i % 5 == 0 { Vote::Down } else { Vote::Up };
            tasks.push(tokio::spawn(async move { repo.increment_vote(&id, vote).await }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored = repo.find(&item.id).await.unwrap().unwrap();
        assert_eq!(stored.up_votes, 40);
        assert_eq!(stored.down_votes, 10);
    }

    #[tokio::test]
    async fn update_keeps_stored_vote_counts() {
        let repo = InMemoryContentRepository::new();
        let item = post();
        repo.save(&item).await.unwrap();
        repo.increment_vote(&item.id, Vote::Up).await.unwrap();

        let mut stale = item.clone();
        stale.flag(Timestamp::now()).unwrap();
        repo.update(&stale).await.unwrap();

        let stored = repo.find(&item.id).await.unwrap().unwrap();
        assert_eq!(stored.up_votes, 1);
        assert_eq!(stored.status(), stale.status());
    }

    #[tokio::test]
    async fn stale_update_is_rejected_and_store_is_untouched() {
        let repo = InMemoryContentRepository::new();
        let item = post();
        repo.save(&item).await.unwrap();

        let mut hiding = item.clone();
        hiding.take_down(ActorRole::Moderator, Timestamp::now()).unwrap();
        assert_eq!(repo.update(&hiding).await.unwrap(), 1);

        let mut flagging = item.clone();
        flagging.flag(Timestamp::now()).unwrap();
        let err = repo.update(&flagging).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ConcurrentModification);
        assert!(err.is_retryable());
        let stored = repo.find(&item.id).await.unwrap().unwrap();
        assert_eq!(stored.status(), ModerationStatus::Hidden);
        assert_eq!(stored.version, 1);
    }

    #[tokio::test]
    async fn voting_on_missing_item_is_not_found() {
        let repo = InMemoryContentRepository::new();
        let err = repo.increment_vote(&ContentId::new(), Vote::Up).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ContentNotFound);
    }
}
