//! SubmitAssessmentHandler - scores and stores a completed questionnaire.

use std::sync::Arc;
use tracing::info;

use crate::domain::assessment::{AssessmentResult, AssessmentType};
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::AssessmentRepository;

#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub user_id: UserId,
    pub assessment_type: AssessmentType,
    pub answers: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct SubmitAssessmentResult {
    pub assessment: AssessmentResult,
}

pub struct SubmitAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl SubmitAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<SubmitAssessmentResult, DomainError> {
        let assessment = AssessmentResult::from_answers(
            cmd.user_id,
            cmd.assessment_type,
            cmd.answers,
            Timestamp::now(),
        )?;

        self.repository.save(&assessment).await?;

        // Answers stay out of the logs.
        info!(
            assessment_id = %assessment.id,
            assessment_type = %assessment.assessment_type,
            severity = %assessment.severity(),
            "Assessment submitted"
        );

        Ok(SubmitAssessmentResult { assessment })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAssessmentRepository;
    use crate::domain::assessment::ClinicalSeverity;
    use crate::domain::foundation::ErrorCode;

    fn user() -> UserId {
        UserId::new("u1").unwrap()
    }

    #[tokio::test]
    async fn stores_scored_result() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let handler = SubmitAssessmentHandler::new(repo.clone());

        let out = handler
            .handle(SubmitAssessmentCommand {
                user_id: user(),
                assessment_type: AssessmentType::Phq9,
                answers: vec![2, 2, 2, 2, 2, 2, 2, 1, 0],
            })
            .await
            .unwrap();

        assert_eq!(out.assessment.score(), 15);
        assert_eq!(out.assessment.severity(), ClinicalSeverity::ModeratelySevere);

        let latest = repo.latest_for_user(&user(), None).await.unwrap().unwrap();
        assert_eq!(latest.id, out.assessment.id);
    }

    #[tokio::test]
    async fn wrong_answer_count_is_rejected_and_not_stored() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let handler = SubmitAssessmentHandler::new(repo.clone());

        let err = handler
            .handle(SubmitAssessmentCommand {
                user_id: user(),
                assessment_type: AssessmentType::Gad7,
                answers: vec![1, 1, 1],
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(repo.latest_for_user(&user(), None).await.unwrap().is_none());
    }
}
