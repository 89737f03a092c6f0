//! RevokeRelationshipHandler - either side withdraws consent.

use std::sync::Arc;
use tracing::info;

use super::{load_existing, persist, RelationshipResult};
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::RelationshipRepository;

#[derive(Debug, Clone)]
pub struct RevokeRelationshipCommand {
    pub actor: UserId,
    pub other: UserId,
}

pub struct RevokeRelationshipHandler {
    repository: Arc<dyn RelationshipRepository>,
}

impl RevokeRelationshipHandler {
    pub fn new(repository: Arc<dyn RelationshipRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RevokeRelationshipCommand,
    ) -> Result<RelationshipResult, DomainError> {
        let mut relationship =
            load_existing(self.repository.as_ref(), &cmd.actor, &cmd.other).await?;
        let expected_version = Some(relationship.version);

        relationship.revoke(&cmd.actor, Timestamp::now())?;

        let result = persist(self.repository.as_ref(), relationship, expected_version).await?;
        info!(key = %result.relationship.key(), actor = %cmd.actor, "Relationship revoked");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::user;
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::relationship::{Relationship, RelationshipKey};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Repository whose stored version always moves between load and save.
    struct RacingRepository {
        record: Mutex<Relationship>,
    }

    #[async_trait]
    impl RelationshipRepository for RacingRepository {
        async fn find(&self, _key: &RelationshipKey) -> Result<Option<Relationship>, DomainError> {
            Ok(Some(self.record.lock().unwrap().clone()))
        }

        async fn save_if_version(
            &self,
            relationship: &Relationship,
            _expected_version: Option<u64>,
        ) -> Result<u64, DomainError> {
            Err(DomainError::concurrent_modification(relationship.key().as_str()))
        }

        async fn list_for_user(&self, _user: &UserId) -> Result<Vec<Relationship>, DomainError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn lost_race_surfaces_retryable_error() {
        let rel = Relationship::request(&user("alice"), &user("bob"), Timestamp::now()).unwrap();
        let handler = RevokeRelationshipHandler::new(Arc::new(RacingRepository {
            record: Mutex::new(rel),
        }));

        let err = handler
            .handle(RevokeRelationshipCommand {
                actor: user("alice"),
                other: user("bob"),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ConcurrentModification);
        assert!(err.is_retryable());
    }
}
