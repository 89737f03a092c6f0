//! RequestRelationshipHandler - starts or restarts a pending request.

use std::sync::Arc;
use tracing::info;

use super::{persist, RelationshipResult};
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::relationship::{Relationship, RelationshipKey};
use crate::ports::RelationshipRepository;

#[derive(Debug, Clone)]
pub struct RequestRelationshipCommand {
    pub requester: UserId,
    pub recipient: UserId,
}

pub struct RequestRelationshipHandler {
    repository: Arc<dyn RelationshipRepository>,
}

impl RequestRelationshipHandler {
    pub fn new(repository: Arc<dyn RelationshipRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RequestRelationshipCommand,
    ) -> Result<RelationshipResult, DomainError> {
        let key = RelationshipKey::new(&cmd.requester, &cmd.recipient)?;
        let existing = self.repository.find(&key).await?;
        let expected_version = existing.as_ref().map(|r| r.version);

        let relationship = Relationship::request_or_restart(
            existing,
            &cmd.requester,
            &cmd.recipient,
            Timestamp::now(),
        )?;

        let result = persist(self.repository.as_ref(), relationship, expected_version).await?;
        info!(key = %key, requester = %cmd.requester, "Relationship requested");
        Ok(result)
    }
}
