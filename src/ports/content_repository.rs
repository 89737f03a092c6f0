//! Content repository port.
//!
//! # Vote counters
//!
//! Concurrent votes must never lose increments, so `increment_vote` is an
//! atomic update in the store rather than load, add, save.
//!
//! # Status writes
//!
//! Moderation transitions read the current status before writing a new one,
//! so `update` is a compare-and-set on `ContentItem::version`.

use async_trait::async_trait;

use crate::domain::foundation::{ContentId, DomainError};
use crate::domain::moderation::{ContentItem, Vote};

#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Inserts a new item at its current version.
    async fn save(&self, item: &ContentItem) -> Result<(), DomainError>;

    /// Persists body, status and classification changes if the stored
    /// version still equals `item.version`, returning the new version.
    ///
    /// Vote counters are owned by `increment_vote` and are not written here.
    ///
    /// # Errors
    ///
    /// - `ContentNotFound` if the item doesn't exist
    /// - `ConcurrentModification` if another write landed since `item` was loaded
    async fn update(&self, item: &ContentItem) -> Result<u64, DomainError>;

    async fn find(&self, id: &ContentId) -> Result<Option<ContentItem>, DomainError>;

    /// Atomically adds one vote and returns `(up_votes, down_votes)`.
    async fn increment_vote(&self, id: &ContentId, vote: Vote) -> Result<(u64, u64), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ContentRepository) {}
    }
}
