//! Assessment Recommender - severity-gated, preferred-tag ranking.

use tracing::debug;

use super::{preferred_tags, CopingStrategy, Recommendation, RecommendationSource};
use crate::domain::assessment::{to_domain_severity, DomainSeverity};

/// Strategies returned when the caller does not specify a limit.
pub const DEFAULT_ASSESSMENT_LIMIT: usize = 3;

const BASE_POINTS: u32 = 1;
const PREFERRED_TAG_POINTS: u32 = 2;

/// Pure ranking functions for assessment-driven recommendations.
pub struct AssessmentRecommender;

impl AssessmentRecommender {
    /// Ranks the catalog for a clinical severity label.
    ///
    /// An unmapped label yields an empty list rather than an error.
    pub fn recommend(
        clinical_label: &str,
        strategies: &[CopingStrategy],
        limit: usize,
    ) -> Vec<Recommendation> {
        match to_domain_severity(clinical_label) {
            Ok(severity) => Self::recommend_for_severity(severity, strategies, limit),
            Err(e) => {
                debug!(error = %e, "No recommendations for unmapped severity");
                Vec::new()
            }
        }
    }

    /// Ranks the catalog for a domain severity.
    ///
    /// # Algorithm
    /// 1. Keep strategies whose floor is absent or at or below `severity`
    /// 2. score = 1 + 2 × (tags in the severity's preferred set)
    /// 3. Stable sort descending, so ties keep catalog order
    /// 4. Truncate to `limit`
    pub fn recommend_for_severity(
        severity: DomainSeverity,
        strategies: &[CopingStrategy],
        limit: usize,
    ) -> Vec<Recommendation> {
        let mut ranked: Vec<Recommendation> = Self::eligible(severity, strategies)
            .map(|s| Recommendation {
                score: Self::score(severity, s) as f64,
                strategy: s.clone(),
                source: RecommendationSource::SeverityMatch,
            })
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(limit);
        ranked
    }

    /// Strategies passing the severity floor, in catalog order.
    pub fn eligible<'a>(
        severity: DomainSeverity,
        strategies: &'a [CopingStrategy],
    ) -> impl Iterator<Item = &'a CopingStrategy> {
        strategies.iter().filter(move |s| s.is_eligible_at(severity))
    }

    /// Base point plus two per preferred tag carried.
    pub fn score(severity: DomainSeverity, strategy: &CopingStrategy) -> u32 {
        let preferred = preferred_tags(severity);
        let matches = strategy
            .tags
            .iter()
            .filter(|t| preferred.contains(*t))
            .count() as u32;
        BASE_POINTS + PREFERRED_TAG_POINTS * matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::StrategyId;
    use crate::domain::recommendation::StrategyTag;
    use proptest::prelude::*;

    fn strategy(id: &str, tags: Vec<StrategyTag>, floor: Option<DomainSeverity>) -> CopingStrategy {
        let s = CopingStrategy::new(StrategyId::new(id).unwrap(), id, tags);
        match floor {
            Some(f) => s.with_min_severity(f),
            None => s,
        }
    }

    fn ids(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.strategy.id.as_str()).collect()
    }

    #[test]
    fn unmapped_label_returns_empty() {
        let catalog = vec![strategy("sleep", vec![StrategyTag::Sleep], None)];
        assert!(AssessmentRecommender::recommend("Unknown", &catalog, 3).is_empty());
    }

    #[test]
    fn no_eligible_strategies_returns_empty() {
        let catalog = vec![strategy(
            "therapy",
            vec![StrategyTag::Therapy],
            Some(DomainSeverity::Severe),
        )];
        assert!(AssessmentRecommender::recommend_for_severity(DomainSeverity::Mild, &catalog, 3)
            .is_empty());
    }

    #[test]
    fn floor_hides_more_intensive_strategies() {
        let catalog = vec![
            strategy("grounding", vec![StrategyTag::Grounding], Some(DomainSeverity::Moderate)),
            strategy("sleep", vec![StrategyTag::Sleep], None),
        ];
        let recs = AssessmentRecommender::recommend("Mild", &catalog, 3);
        assert_eq!(ids(&recs), vec!["sleep"]);
    }

    #[test]
    fn preferred_tags_add_two_points_each() {
        let s = strategy(
            "combo",
            vec![StrategyTag::Breathing, StrategyTag::Grounding, StrategyTag::Sleep],
            None,
        );
        assert_eq!(AssessmentRecommender::score(DomainSeverity::Moderate, &s), 5);
        assert_eq!(AssessmentRecommender::score(DomainSeverity::None, &s), 1);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = vec![
            strategy("a", vec![StrategyTag::Sleep], None),
            strategy("b", vec![StrategyTag::Social], None),
            strategy("c", vec![StrategyTag::Breathing], None),
            strategy("d", vec![StrategyTag::Creative], None),
        ];
        let recs =
            AssessmentRecommender::recommend_for_severity(DomainSeverity::Mild, &catalog, 3);
        assert_eq!(ids(&recs), vec!["c", "a", "b"]);
    }

    #[test]
    fn moderately_severe_scenario() {
        let catalog = vec![
            strategy("sleep", vec![StrategyTag::Sleep], Some(DomainSeverity::None)),
            strategy("grounding", vec![StrategyTag::Grounding], Some(DomainSeverity::Moderate)),
            strategy(
                "therapy",
                vec![StrategyTag::Therapy],
                Some(DomainSeverity::ModeratelySevere),
            ),
        ];
        let recs = AssessmentRecommender::recommend("Moderately Severe", &catalog, 3);

        assert_eq!(recs.len(), 3);
        assert_eq!(recs[2].strategy.id.as_str(), "sleep");
        assert_eq!(recs[0].score, 3.0);
        assert_eq!(recs[1].score, 3.0);
        assert_eq!(recs[2].score, 1.0);
    }

    fn any_severity() -> impl Strategy<Value = DomainSeverity> {
        (0usize..5).prop_map(|i| DomainSeverity::ALL[i])
    }

    proptest! {
        #[test]
        fn gate_never_leaks_below_floor(user in any_severity(), floor in any_severity()) {
            let catalog = vec![strategy("gated", vec![StrategyTag::Therapy], Some(floor))];
            let eligible: Vec<_> = AssessmentRecommender::eligible(user, &catalog).collect();
            if user < floor {
                prop_assert!(eligible.is_empty());
            } else {
                prop_assert_eq!(eligible.len(), 1);
            }
        }

        #[test]
        fn ranking_is_deterministic(user in any_severity()) {
            let catalog = vec![
                strategy("a", vec![StrategyTag::Sleep], None),
                strategy("b", vec![StrategyTag::Therapy, StrategyTag::Grounding], None),
                strategy("c", vec![StrategyTag::Breathing], Some(DomainSeverity::Mild)),
            ];
            let first = AssessmentRecommender::recommend_for_severity(user, &catalog, 3);
            let second = AssessmentRecommender::recommend_for_severity(user, &catalog, 3);
            prop_assert_eq!(first, second);
        }
    }
}
