//! In-memory relationship repository with version checks.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::relationship::{Relationship, RelationshipKey};
use crate::ports::RelationshipRepository;

/// Relationships keyed by their symmetric pair key.
///
/// The write lock spans the version check and the write, giving the same
/// compare-and-set guarantee the database adapter gets from its WHERE clause.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRelationshipRepository {
    records: Arc<RwLock<HashMap<RelationshipKey, Relationship>>>,
}

impl InMemoryRelationshipRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RelationshipRepository for InMemoryRelationshipRepository {
    async fn find(&self, key: &RelationshipKey) -> Result<Option<Relationship>, DomainError> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn save_if_version(
        &self,
        relationship: &Relationship,
        expected_version: Option<u64>,
    ) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        let stored = records.get(relationship.key()).map(|r| r.version);

        if stored != expected_version {
            return Err(DomainError::concurrent_modification(relationship.key().as_str()));
        }

        let next_version = expected_version.unwrap_or(0) + 1;
        let mut copy = relationship.clone();
        copy.version = next_version;
        records.insert(relationship.key().clone(), copy);
        Ok(next_version)
    }

    async fn list_for_user(&self, user: &UserId) -> Result<Vec<Relationship>, DomainError> {
        let records = self.records.read().await;
        let mut found: Vec<Relationship> =
            records.values().filter(|r| r.involves(user)).cloned().collect();
        found.sort_by(|a, b| a.key().cmp(b.key()));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, Timestamp};

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn pending() -> Relationship {
        Relationship::request(&user("alice"), &user("bob"), Timestamp::now()).unwrap()
    }

    #[tokio::test]
    async fn first_save_creates_version_one() {
        let repo = InMemoryRelationshipRepository::new();
        let version = repo.save_if_version(&pending(), None).await.unwrap();
        assert_eq!(version, 1);

        let stored = repo.find(pending().key()).await.unwrap().unwrap();
        assert_eq!(stored.version, 1);
    }

    #[tokio::test]
    async fn creating_twice_conflicts() {
        let repo = InMemoryRelationshipRepository::new();
        repo.save_if_version(&pending(), None).await.unwrap();

        let err = repo.save_if_version(&pending(), None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConcurrentModification);
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn stale_writer_loses() {
        let repo = InMemoryRelationshipRepository::new();
        repo.save_if_version(&pending(), None).await.unwrap();

        let mut alice_view = repo.find(pending().key()).await.unwrap().unwrap();
        let mut bob_view = alice_view.clone();

        bob_view.accept(&user("bob"), Timestamp::now()).unwrap();
        repo.save_if_version(&bob_view, Some(1)).await.unwrap();

        alice_view.revoke(&user("alice"), Timestamp::now()).unwrap();
        let err = repo.save_if_version(&alice_view, Some(1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConcurrentModification);

        let stored = repo.find(pending().key()).await.unwrap().unwrap();
        assert!(stored.is_consented());
        assert_eq!(stored.version, 2);
    }

    #[tokio::test]
    async fn list_for_user_filters_participants() {
        let repo = InMemoryRelationshipRepository::new();
        repo.save_if_version(&pending(), None).await.unwrap();
        let other = Relationship::request(&user("carol"), &user("dave"), Timestamp::now()).unwrap();
        repo.save_if_version(&other, None).await.unwrap();

        assert_eq!(repo.list_for_user(&user("bob")).await.unwrap().len(), 1);
        assert!(repo.list_for_user(&user("erin")).await.unwrap().is_empty());
    }
}
