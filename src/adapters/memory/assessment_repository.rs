//! In-memory assessment repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::{AssessmentResult, AssessmentType};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AssessmentRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentRepository {
    results: Arc<RwLock<Vec<AssessmentResult>>>,
}

impl InMemoryAssessmentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn save(&self, result: &AssessmentResult) -> Result<(), DomainError> {
        self.results.write().await.push(result.clone());
        Ok(())
    }

    async fn latest_for_user(
        &self,
        user: &UserId,
        kind: Option<AssessmentType>,
    ) -> Result<Option<AssessmentResult>, DomainError> {
        let results = self.results.read().await;
        Ok(results
            .iter()
            .filter(|r| &r.user_id == user)
            .filter(|r| kind.map_or(true, |k| r.assessment_type == k))
            .max_by_key(|r| r.created_at)
            .cloned())
    }
}
