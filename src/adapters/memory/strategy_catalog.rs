//! Fixed strategy catalog held in memory.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::recommendation::CopingStrategy;
use crate::ports::StrategyCatalog;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStrategyCatalog {
    strategies: Arc<RwLock<Vec<CopingStrategy>>>,
}

impl InMemoryStrategyCatalog {
    pub fn new(strategies: Vec<CopingStrategy>) -> Self {
        Self {
            strategies: Arc::new(RwLock::new(strategies)),
        }
    }

    /// Appends a strategy, or replaces the one with the same id in place.
    pub async fn upsert(&self, strategy: CopingStrategy) {
        let mut strategies = self.strategies.write().await;
        match strategies.iter_mut().find(|s| s.id == strategy.id) {
            Some(existing) => *existing = strategy,
            None => strategies.push(strategy),
        }
    }
}

#[async_trait]
impl StrategyCatalog for InMemoryStrategyCatalog {
    async fn list_all(&self) -> Result<Vec<CopingStrategy>, DomainError> {
        Ok(self.strategies.read().await.clone())
    }
}
