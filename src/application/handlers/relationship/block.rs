//! BlockRelationshipHandler - either side closes the pair.

use std::sync::Arc;
use tracing::info;

use super::{persist, RelationshipResult};
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::relationship::{Relationship, RelationshipKey};
use crate::ports::RelationshipRepository;

#[derive(Debug, Clone)]
pub struct BlockRelationshipCommand {
    pub actor: UserId,
    pub other: UserId,
}

/// Blocking works with or without an existing record; a stranger can be
/// blocked before any request was made.
pub struct BlockRelationshipHandler {
    repository: Arc<dyn RelationshipRepository>,
}

impl BlockRelationshipHandler {
    pub fn new(repository: Arc<dyn RelationshipRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: BlockRelationshipCommand,
    ) -> Result<RelationshipResult, DomainError> {
        let key = RelationshipKey::new(&cmd.actor, &cmd.other)?;
        let now = Timestamp::now();

        let (mut relationship, expected_version) = match self.repository.find(&key).await? {
            Some(existing) => {
                let version = existing.version;
                (existing, Some(version))
            }
            None => (Relationship::request(&cmd.actor, &cmd.other, now)?, None),
        };

        relationship.block(&cmd.actor, now)?;

        let result = persist(self.repository.as_ref(), relationship, expected_version).await?;
        info!(key = %key, actor = %cmd.actor, "Relationship blocked");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::user;
    use super::*;
    use crate::adapters::InMemoryRelationshipRepository;
    use crate::domain::relationship::RelationshipStatus;

    #[tokio::test]
    async fn blocking_a_stranger_creates_blocked_record() {
        let repo = Arc::new(InMemoryRelationshipRepository::new());
        let handler = BlockRelationshipHandler::new(repo.clone());

        let result = handler
            .handle(BlockRelationshipCommand {
                actor: user("alice"),
                other: user("mallory"),
            })
            .await
            .unwrap();

        assert_eq!(result.relationship.status(), RelationshipStatus::Blocked);
        assert!(!result.relationship.consent_of(&user("alice")));
        assert_eq!(result.relationship.blocked_by(), Some(&user("alice")));
        assert_eq!(repo.len().await, 1);
    }
}
