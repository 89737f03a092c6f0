//! In-memory emotion entry store.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::emotion::EmotionEntry;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::EmotionEntryReader;

#[derive(Debug, Clone, Default)]
pub struct InMemoryEmotionEntries {
    entries: Arc<RwLock<Vec<EmotionEntry>>>,
}

impl InMemoryEmotionEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, entry: EmotionEntry) {
        self.entries.write().await.push(entry);
    }
}

#[async_trait]
impl EmotionEntryReader for InMemoryEmotionEntries {
    async fn entries_since(
        &self,
        user: &UserId,
        since: Timestamp,
    ) -> Result<Vec<EmotionEntry>, DomainError> {
        let entries = self.entries.read().await;
        let mut found: Vec<EmotionEntry> = entries
            .iter()
            .filter(|e| &e.author_id == user && !e.created_at.is_before(&since))
            .cloned()
            .collect();
        found.sort_by_key(|e| e.created_at);
        Ok(found)
    }
}
