//! RecommendForAssessmentHandler - ranks the catalog against the user's
//! latest screening.

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::assessment::{AssessmentType, DomainSeverity};
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::recommendation::{AssessmentRecommender, Recommendation};
use crate::ports::{AssessmentRepository, StrategyCatalog};

#[derive(Debug, Clone)]
pub struct RecommendForAssessmentQuery {
    pub user_id: UserId,
    /// Restrict to one questionnaire; `None` uses the most recent of any type.
    pub assessment_type: Option<AssessmentType>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct RecommendForAssessmentResult {
    /// `None` when the user has no matching assessment.
    pub severity: Option<DomainSeverity>,
    pub recommendations: Vec<Recommendation>,
}

pub struct RecommendForAssessmentHandler {
    assessments: Arc<dyn AssessmentRepository>,
    catalog: Arc<dyn StrategyCatalog>,
    default_limit: usize,
}

impl RecommendForAssessmentHandler {
    pub fn new(
        assessments: Arc<dyn AssessmentRepository>,
        catalog: Arc<dyn StrategyCatalog>,
        default_limit: usize,
    ) -> Self {
        Self {
            assessments,
            catalog,
            default_limit,
        }
    }

    pub async fn handle(
        &self,
        query: RecommendForAssessmentQuery,
    ) -> Result<RecommendForAssessmentResult, DomainError> {
        let Some(latest) = self
            .assessments
            .latest_for_user(&query.user_id, query.assessment_type)
            .await?
        else {
            debug!(user_id = %query.user_id, "No assessment on record");
            return Ok(RecommendForAssessmentResult {
                severity: None,
                recommendations: Vec::new(),
            });
        };

        let severity = latest.domain_severity();
        let strategies = self.catalog.list_all().await?;
        let limit = query.limit.unwrap_or(self.default_limit);
        let recommendations =
            AssessmentRecommender::recommend_for_severity(severity, &strategies, limit);

        info!(
            user_id = %query.user_id,
            severity = %severity,
            count = recommendations.len(),
            "Assessment recommendations ranked"
        );

        Ok(RecommendForAssessmentResult {
            severity: Some(severity),
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::strategy;
    use super::*;
    use crate::adapters::{InMemoryAssessmentRepository, InMemoryStrategyCatalog};
    use crate::domain::assessment::AssessmentResult;
    use crate::domain::foundation::Timestamp;
    use crate::domain::recommendation::{StrategyTag, DEFAULT_ASSESSMENT_LIMIT};

    fn user() -> UserId {
        UserId::new("u1").unwrap()
    }

    fn catalog() -> Arc<InMemoryStrategyCatalog> {
        use StrategyTag::*;
        Arc::new(InMemoryStrategyCatalog::new(vec![
            strategy("walk", vec![Exercise]),
            strategy("box-breathing", vec![Breathing, Mindfulness]),
            strategy("counselling", vec![Therapy]).with_min_severity(DomainSeverity::Severe),
            strategy("diary", vec![Journaling]),
        ]))
    }

    #[tokio::test]
    async fn ranks_against_latest_severity() {
        let assessments = Arc::new(InMemoryAssessmentRepository::new());
        // GAD-7 score 7 is Mild
        let result = AssessmentResult::from_answers(
            user(),
            AssessmentType::Gad7,
            vec![1, 1, 1, 1, 1, 1, 1],
            Timestamp::now(),
        )
        .unwrap();
        assessments.save(&result).await.unwrap();

        let handler =
            RecommendForAssessmentHandler::new(assessments, catalog(), DEFAULT_ASSESSMENT_LIMIT);
        let out = handler
            .handle(RecommendForAssessmentQuery {
                user_id: user(),
                assessment_type: None,
                limit: None,
            })
            .await
            .unwrap();

        assert_eq!(out.severity, Some(DomainSeverity::Mild));
        let ids: Vec<&str> = out
            .recommendations
            .iter()
            .map(|r| r.strategy.id.as_str())
            .collect();
        assert_eq!(ids, vec!["box-breathing", "diary", "walk"]);
    }

    #[tokio::test]
    async fn no_assessment_is_empty_not_error() {
        let handler = RecommendForAssessmentHandler::new(
            Arc::new(InMemoryAssessmentRepository::new()),
            catalog(),
            DEFAULT_ASSESSMENT_LIMIT,
        );
        let out = handler
            .handle(RecommendForAssessmentQuery {
                user_id: user(),
                assessment_type: Some(AssessmentType::Phq9),
                limit: Some(5),
            })
            .await
            .unwrap();

        assert!(out.severity.is_none());
        assert!(out.recommendations.is_empty());
    }
}
