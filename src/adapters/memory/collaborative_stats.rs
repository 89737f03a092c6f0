//! In-memory collaborative statistics.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, StrategyId};
use crate::domain::recommendation::CollaborativeStats;
use crate::ports::CollaborativeStatsStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCollaborativeStats {
    stats: Arc<RwLock<CollaborativeStats>>,
}

impl InMemoryCollaborativeStats {
    pub fn new(stats: CollaborativeStats) -> Self {
        Self {
            stats: Arc::new(RwLock::new(stats)),
        }
    }
}

#[async_trait]
impl CollaborativeStatsStore for InMemoryCollaborativeStats {
    async fn snapshot(&self) -> Result<CollaborativeStats, DomainError> {
        Ok(self.stats.read().await.clone())
    }

    async fn record_helpful(&self, strategy: &StrategyId, feeling: &str) -> Result<(), DomainError> {
        self.stats.write().await.record_helpful(strategy.clone(), feeling);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn helpful_votes_accumulate() {
        let store = InMemoryCollaborativeStats::default();
        let id = StrategyId::new("box-breathing").unwrap();
        store.record_helpful(&id, "Anxious").await.unwrap();
        store.record_helpful(&id, "anxious").await.unwrap();

        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot.score(&id, "ANXIOUS"), 2.0);
    }
}
