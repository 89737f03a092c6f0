//! Assessment result repository port.

use async_trait::async_trait;

use crate::domain::assessment::{AssessmentResult, AssessmentType};
use crate::domain::foundation::{DomainError, UserId};

/// Persistence for a user's screening results. Results are immutable.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    async fn save(&self, result: &AssessmentResult) -> Result<(), DomainError>;

    /// Most recent result, optionally restricted to one questionnaire.
    ///
    /// Returns `None` when the user has not taken one.
    async fn latest_for_user(
        &self,
        user: &UserId,
        kind: Option<AssessmentType>,
    ) -> Result<Option<AssessmentResult>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AssessmentRepository) {}
    }
}
