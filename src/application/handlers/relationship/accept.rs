//! AcceptRelationshipHandler - the pending side consents.

use std::sync::Arc;
use tracing::info;

use super::{load_existing, persist, RelationshipResult};
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::RelationshipRepository;

#[derive(Debug, Clone)]
pub struct AcceptRelationshipCommand {
    pub accepter: UserId,
    pub requester: UserId,
}

pub struct AcceptRelationshipHandler {
    repository: Arc<dyn RelationshipRepository>,
}

impl AcceptRelationshipHandler {
    pub fn new(repository: Arc<dyn RelationshipRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: AcceptRelationshipCommand,
    ) -> Result<RelationshipResult, DomainError> {
        let mut relationship =
            load_existing(self.repository.as_ref(), &cmd.accepter, &cmd.requester).await?;
        let expected_version = Some(relationship.version);

        relationship.accept(&cmd.accepter, Timestamp::now())?;

        let result = persist(self.repository.as_ref(), relationship, expected_version).await?;
        info!(key = %result.relationship.key(), accepter = %cmd.accepter, "Relationship consented");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::user;
    use super::super::{RequestRelationshipCommand, RequestRelationshipHandler};
    use super::*;
    use crate::adapters::InMemoryRelationshipRepository;
    use crate::domain::foundation::ErrorCode;

    async fn pending_repo() -> Arc<InMemoryRelationshipRepository> {
        let repo = Arc::new(InMemoryRelationshipRepository::new());
        RequestRelationshipHandler::new(repo.clone())
            .handle(RequestRelationshipCommand {
                requester: user("alice"),
                recipient: user("bob"),
            })
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn recipient_accepts() {
        let repo = pending_repo().await;
        let handler = AcceptRelationshipHandler::new(repo);

        let result = handler
            .handle(AcceptRelationshipCommand {
                accepter: user("bob"),
                requester: user("alice"),
            })
            .await
            .unwrap();

        assert!(result.relationship.can_chat());
        assert_eq!(result.relationship.version, 2);
    }

    #[tokio::test]
    async fn requester_cannot_accept() {
        let repo = pending_repo().await;
        let handler = AcceptRelationshipHandler::new(repo);

        let err = handler
            .handle(AcceptRelationshipCommand {
                accepter: user("alice"),
                requester: user("bob"),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[tokio::test]
    async fn missing_relationship_is_not_found() {
        let handler = AcceptRelationshipHandler::new(Arc::new(InMemoryRelationshipRepository::new()));
        let err = handler
            .handle(AcceptRelationshipCommand {
                accepter: user("bob"),
                requester: user("alice"),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RelationshipNotFound);
    }
}
