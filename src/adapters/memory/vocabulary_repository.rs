//! In-memory feeling vocabulary store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::emotion::FeelingVocabulary;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::VocabularyRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryVocabularyRepository {
    vocabularies: Arc<RwLock<HashMap<UserId, FeelingVocabulary>>>,
}

impl InMemoryVocabularyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VocabularyRepository for InMemoryVocabularyRepository {
    async fn load(&self, user: &UserId) -> Result<FeelingVocabulary, DomainError> {
        Ok(self
            .vocabularies
            .read()
            .await
            .get(user)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(&self, user: &UserId, vocabulary: &FeelingVocabulary) -> Result<(), DomainError> {
        self.vocabularies
            .write()
            .await
            .insert(user.clone(), vocabulary.clone());
        Ok(())
    }
}
