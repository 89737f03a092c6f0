//! AddCustomFeelingHandler - validates and stores a user-defined feeling.

use std::sync::Arc;
use tracing::info;

use crate::domain::emotion::EmotionCategory;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::VocabularyRepository;

#[derive(Debug, Clone)]
pub struct AddCustomFeelingCommand {
    pub user_id: UserId,
    pub category: EmotionCategory,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct AddCustomFeelingResult {
    /// Label as stored: trimmed, original casing.
    pub label: String,
    /// Effective vocabulary for the category after the addition.
    pub feelings: Vec<String>,
}

pub struct AddCustomFeelingHandler {
    repository: Arc<dyn VocabularyRepository>,
}

impl AddCustomFeelingHandler {
    pub fn new(repository: Arc<dyn VocabularyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: AddCustomFeelingCommand,
    ) -> Result<AddCustomFeelingResult, DomainError> {
        let mut vocabulary = self.repository.load(&cmd.user_id).await?;
        let label = vocabulary.add_custom(cmd.category, &cmd.label)?;
        self.repository.save(&cmd.user_id, &vocabulary).await?;

        info!(
            user_id = %cmd.user_id,
            category = cmd.category.as_str(),
            "Custom feeling added"
        );

        Ok(AddCustomFeelingResult {
            label,
            feelings: vocabulary.effective(cmd.category),
        })
    }
}
