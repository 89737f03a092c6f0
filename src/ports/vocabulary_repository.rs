//! Feeling vocabulary repository port.

use async_trait::async_trait;

use crate::domain::emotion::FeelingVocabulary;
use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait VocabularyRepository: Send + Sync {
    /// The user's vocabulary; a fresh default one if never saved.
    async fn load(&self, user: &UserId) -> Result<FeelingVocabulary, DomainError>;

    async fn save(&self, user: &UserId, vocabulary: &FeelingVocabulary) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn VocabularyRepository) {}
    }
}
