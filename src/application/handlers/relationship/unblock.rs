//! UnblockRelationshipHandler - lifts a block into `revoked`.

use std::sync::Arc;
use tracing::info;

use super::{load_existing, persist, RelationshipResult};
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::RelationshipRepository;

#[derive(Debug, Clone)]
pub struct UnblockRelationshipCommand {
    pub actor: UserId,
    pub other: UserId,
}

pub struct UnblockRelationshipHandler {
    repository: Arc<dyn RelationshipRepository>,
}

impl UnblockRelationshipHandler {
    pub fn new(repository: Arc<dyn RelationshipRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UnblockRelationshipCommand,
    ) -> Result<RelationshipResult, DomainError> {
        let mut relationship =
            load_existing(self.repository.as_ref(), &cmd.actor, &cmd.other).await?;
        let expected_version = Some(relationship.version);

        relationship.unblock(&cmd.actor, Timestamp::now())?;

        let result = persist(self.repository.as_ref(), relationship, expected_version).await?;
        info!(key = %result.relationship.key(), actor = %cmd.actor, "Relationship unblocked");
        Ok(result)
    }
}
