//! Collaborative statistics port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, StrategyId};
use crate::domain::recommendation::CollaborativeStats;

/// Storage for "this helped" feedback per strategy and feeling.
#[async_trait]
pub trait CollaborativeStatsStore: Send + Sync {
    /// Current snapshot of all scores.
    async fn snapshot(&self) -> Result<CollaborativeStats, DomainError>;

    /// Records one helpful vote. Must be an atomic increment.
    async fn record_helpful(&self, strategy: &StrategyId, feeling: &str) -> Result<(), DomainError>;
}
