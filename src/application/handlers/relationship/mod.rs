//! Relationship handlers.
//!
//! Each command loads the pair's record, applies one transition and writes
//! it back conditionally on the loaded version. A concurrent change
//! surfaces as a retryable `ConcurrentModification` error.

mod accept;
mod block;
mod request;
mod revoke;
mod unblock;

pub use accept::{AcceptRelationshipCommand, AcceptRelationshipHandler};
pub use block::{BlockRelationshipCommand, BlockRelationshipHandler};
pub use request::{RequestRelationshipCommand, RequestRelationshipHandler};
pub use revoke::{RevokeRelationshipCommand, RevokeRelationshipHandler};
pub use unblock::{UnblockRelationshipCommand, UnblockRelationshipHandler};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::relationship::{Relationship, RelationshipKey};
use crate::ports::RelationshipRepository;

/// Outcome shared by every relationship command.
#[derive(Debug, Clone)]
pub struct RelationshipResult {
    pub relationship: Relationship,
}

async fn load_existing(
    repository: &dyn RelationshipRepository,
    actor: &UserId,
    other: &UserId,
) -> Result<Relationship, DomainError> {
    let key = RelationshipKey::new(actor, other)?;
    repository
        .find(&key)
        .await?
        .ok_or_else(|| DomainError::not_found(ErrorCode::RelationshipNotFound, "Relationship", &key))
}

async fn persist(
    repository: &dyn RelationshipRepository,
    mut relationship: Relationship,
    expected_version: Option<u64>,
) -> Result<RelationshipResult, DomainError> {
    relationship.version = repository
        .save_if_version(&relationship, expected_version)
        .await?;
    Ok(RelationshipResult { relationship })
}
