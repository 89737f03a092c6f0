//! Completed screening questionnaire.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{score_to_severity, AssessmentType, ClinicalSeverity, DomainSeverity, MAX_ANSWER};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp, UserId};

/// Rejected questionnaire submissions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("{kind} expects {expected} answers, got {actual}")]
    WrongAnswerCount {
        kind: AssessmentType,
        expected: usize,
        actual: usize,
    },

    #[error("Answer to question {question} must be between 0 and {max}, got {value}")]
    AnswerOutOfRange { question: usize, value: u8, max: u8 },
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        let code = match err {
            AssessmentError::WrongAnswerCount { .. } => ErrorCode::ValidationFailed,
            AssessmentError::AnswerOutOfRange { .. } => ErrorCode::OutOfRange,
        };
        DomainError::new(code, err.to_string()).with_detail("field", "answers")
    }
}

/// One completed screening.
///
/// # Invariants
///
/// - `score` is the sum of `answers`
/// - `severity` is `score_to_severity(assessment_type, score)` and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub id: AssessmentId,
    pub user_id: UserId,
    pub assessment_type: AssessmentType,
    answers: Vec<u8>,
    score: u32,
    severity: ClinicalSeverity,
    pub created_at: Timestamp,
}

impl AssessmentResult {
    /// Scores a submission after validating every answer.
    pub fn from_answers(
        user_id: UserId,
        assessment_type: AssessmentType,
        answers: Vec<u8>,
        created_at: Timestamp,
    ) -> Result<Self, AssessmentError> {
        let expected = assessment_type.question_count();
        if answers.len() != expected {
            return Err(AssessmentError::WrongAnswerCount {
                kind: assessment_type,
                expected,
                actual: answers.len(),
            });
        }
        if let Some((i, &value)) = answers.iter().enumerate().find(|&(_, &a)| a > MAX_ANSWER) {
            return Err(AssessmentError::AnswerOutOfRange {
                question: i + 1,
                value,
                max: MAX_ANSWER,
            });
        }

        let score = answers.iter().map(|&a| a as u32).sum();
        Ok(Self {
            id: AssessmentId::new(),
            user_id,
            assessment_type,
            answers,
            score,
            severity: score_to_severity(assessment_type, score),
            created_at,
        })
    }

    pub fn answers(&self) -> &[u8] {
        &self.answers
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn severity(&self) -> ClinicalSeverity {
        self.severity
    }

    /// Severity on the coping-domain scale.
    pub fn domain_severity(&self) -> DomainSeverity {
        self.severity.into()
    }
}

/// Most recent result of the given type.
pub fn latest_for_type(
    results: &[AssessmentResult],
    kind: AssessmentType,
) -> Option<&AssessmentResult> {
    results
        .iter()
        .filter(|r| r.assessment_type == kind)
        .max_by_key(|r| r.created_at)
}
