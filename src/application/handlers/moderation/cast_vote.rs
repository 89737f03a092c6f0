//! CastVoteHandler - atomic up/down vote on visible content.

use std::sync::Arc;
use tracing::debug;

use super::load_content;
use crate::domain::foundation::{ContentId, DomainError, ErrorCode, UserId};
use crate::domain::moderation::Vote;
use crate::ports::ContentRepository;

#[derive(Debug, Clone)]
pub struct CastVoteCommand {
    pub voter_id: UserId,
    pub content_id: ContentId,
    pub vote: Vote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastVoteResult {
    pub up_votes: u64,
    pub down_votes: u64,
}

pub struct CastVoteHandler {
    repository: Arc<dyn ContentRepository>,
}

impl CastVoteHandler {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CastVoteCommand) -> Result<CastVoteResult, DomainError> {
        let item = load_content(self.repository.as_ref(), &cmd.content_id).await?;
        if !item.status().is_publicly_visible() {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Votes are only accepted on visible content",
            ));
        }

        let (up_votes, down_votes) = self
            .repository
            .increment_vote(&cmd.content_id, cmd.vote)
            .await?;
        debug!(content_id = %cmd.content_id, voter_id = %cmd.voter_id, vote = ?cmd.vote, "Vote cast");

        Ok(CastVoteResult {
            up_votes,
            down_votes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryContentRepository;
    use crate::domain::foundation::Timestamp;
    use crate::domain::moderation::{ContentItem, ContentKind};

    #[tokio::test]
    async fn flagged_content_takes_no_votes() {
        let repo = Arc::new(InMemoryContentRepository::new());
        let mut item = ContentItem::new(
            UserId::new("author").unwrap(),
            ContentKind::Post,
            "under review",
            Timestamp::now(),
        )
        .unwrap();
        item.flag(Timestamp::now()).unwrap();
        repo.save(&item).await.unwrap();

        let err = CastVoteHandler::new(repo.clone())
            .handle(CastVoteCommand {
                voter_id: UserId::new("voter").unwrap(),
                content_id: item.id,
                vote: Vote::Up,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
        let stored = repo.find(&item.id).await.unwrap().unwrap();
        assert_eq!(stored.up_votes, 0);
    }

    #[tokio::test]
    async fn concurrent_votes_are_all_counted() {
        let repo = Arc::new(InMemoryContentRepository::new());
        let item = ContentItem::new(
            UserId::new("author").unwrap(),
            ContentKind::Post,
            "popular",
            Timestamp::now(),
        )
        .unwrap();
        repo.save(&item).await.unwrap();
        let handler = Arc::new(CastVoteHandler::new(repo.clone()));
        let content_id = item.id;

        let tasks: Vec<_> = (0..20)
            .map(|i| {
                let handler = handler.clone();
                let vote = if i % 4 == 0 { Vote::Down } else { Vote::Up };
                tokio::spawn(async move {
                    handler
                        .handle(CastVoteCommand {
                            voter_id: UserId::new(format!("voter-{}", i)).unwrap(),
                            content_id,
                            vote,
                        })
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored = repo.find(&item.id).await.unwrap().unwrap();
        assert_eq!((stored.up_votes, stored.down_votes), (15, 5));
    }
}
