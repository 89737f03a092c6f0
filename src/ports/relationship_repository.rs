//! Relationship repository port.
//!
//! One record per unordered user pair, addressed by [`RelationshipKey`].
//!
//! # Concurrency
//!
//! Two participants may race to accept, revoke or block the same pair.
//! Every write is conditional on the version the caller loaded, so a
//! transition computed from stale state is rejected rather than silently
//! overwriting the other side's change.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::relationship::{Relationship, RelationshipKey};

#[async_trait]
pub trait RelationshipRepository: Send + Sync {
    /// Loads the record for a pair. `None` is the "no relationship" state.
    async fn find(&self, key: &RelationshipKey) -> Result<Option<Relationship>, DomainError>;

    /// Writes `relationship` only if the stored version still equals
    /// `expected_version`; `None` means the record must not exist yet.
    ///
    /// Returns the new stored version.
    ///
    /// # Errors
    ///
    /// - `ConcurrentModification` if the stored version moved
    /// - `DatabaseError` on persistence failure
    async fn save_if_version(
        &self,
        relationship: &Relationship,
        expected_version: Option<u64>,
    ) -> Result<u64, DomainError>;

    /// Every relationship `user` takes part in.
    async fn list_for_user(&self, user: &UserId) -> Result<Vec<Relationship>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relationship_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn RelationshipRepository) {}
    }
}
