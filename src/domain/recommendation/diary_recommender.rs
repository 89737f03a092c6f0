//! Diary Recommender - emotion-driven, tag-diverse shortlist.
//!
//! Three heuristics rank the emotionally eligible strategies independently:
//!
//! - **raw content**: total occurrences of the user's feelings that each tag
//!   is appropriate for
//! - **normalized content**: raw score divided by tag count
//! - **collaborative**: helpfulness among users sharing the dominant feeling
//!
//! The shortlist takes the best of each ranking in turn while never
//! repeating a primary tag.

use std::collections::HashSet;

use super::{allowed_feelings, CollaborativeStats, CopingStrategy, Recommendation, RecommendationSource, StrategyTag};
use crate::domain::emotion::{EmotionEntry, EmotionProfile};
use crate::domain::foundation::StrategyId;

/// Picks taken from each ranking, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiarySelection {
    pub raw_picks: usize,
    pub normalized_picks: usize,
    pub collaborative_picks: usize,
}

impl Default for DiarySelection {
    fn default() -> Self {
        Self {
            raw_picks: 1,
            normalized_picks: 1,
            collaborative_picks: 2,
        }
    }
}

impl DiarySelection {
    /// Shortlist length when every pass fills its picks.
    pub fn total(&self) -> usize {
        self.raw_picks + self.normalized_picks + self.collaborative_picks
    }
}

/// One eligible strategy with all three scores computed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub strategy: &'a CopingStrategy,
    pub raw: f64,
    pub normalized: f64,
    pub collaborative: f64,
}

impl ScoredCandidate<'_> {
    fn score_for(&self, source: RecommendationSource) -> f64 {
        match source {
            RecommendationSource::RawContent => self.raw,
            RecommendationSource::NormalizedContent => self.normalized,
            RecommendationSource::Collaborative => self.collaborative,
            RecommendationSource::SeverityMatch => 0.0,
        }
    }
}

/// Pure ranking functions for diary-driven recommendations.
pub struct DiaryRecommender;

impl DiaryRecommender {
    /// Builds the emotion profile and delegates to [`Self::recommend_for_profile`].
    pub fn recommend(
        strategies: &[CopingStrategy],
        entries: &[EmotionEntry],
        stats: &CollaborativeStats,
        selection: DiarySelection,
        limit: usize,
    ) -> Vec<Recommendation> {
        let profile = EmotionProfile::build(entries);
        Self::recommend_for_profile(strategies, &profile, stats, selection, limit)
    }

    /// Ranks strategies against an already-built profile.
    ///
    /// # Edge Cases
    /// - Empty profile: empty list
    /// - No strategy whose tags cover a profile feeling: empty list
    pub fn recommend_for_profile(
        strategies: &[CopingStrategy],
        profile: &EmotionProfile,
        stats: &CollaborativeStats,
        selection: DiarySelection,
        limit: usize,
    ) -> Vec<Recommendation> {
        let Some(dominant) = profile.dominant_feeling() else {
            return Vec::new();
        };

        let candidates: Vec<ScoredCandidate<'_>> = strategies
            .iter()
            .filter(|s| Self::is_emotionally_eligible(s, profile))
            .map(|s| Self::score_candidate(s, profile, stats, dominant))
            .collect();

        let passes = [
            (RecommendationSource::RawContent, selection.raw_picks),
            (RecommendationSource::NormalizedContent, selection.normalized_picks),
            (RecommendationSource::Collaborative, selection.collaborative_picks),
        ];

        let mut shortlist = select_diverse(&candidates, &passes);
        shortlist.truncate(limit);
        shortlist
    }

    /// Hard filter: some tag's allow-list intersects the profile.
    pub fn is_emotionally_eligible(strategy: &CopingStrategy, profile: &EmotionProfile) -> bool {
        strategy
            .tags
            .iter()
            .any(|&tag| allowed_feelings(tag).iter().any(|f| profile.contains(f)))
    }

    /// Sum over tags of the profile counts of each allowed feeling.
    pub fn raw_content_score(strategy: &CopingStrategy, profile: &EmotionProfile) -> u32 {
        strategy
            .tags
            .iter()
            .map(|&tag| tag_content_score(tag, profile))
            .sum()
    }

    fn score_candidate<'a>(
        strategy: &'a CopingStrategy,
        profile: &EmotionProfile,
        stats: &CollaborativeStats,
        dominant: &str,
    ) -> ScoredCandidate<'a> {
        let raw = Self::raw_content_score(strategy, profile) as f64;
        let normalized = if strategy.tags.is_empty() {
            0.0
        } else {
            raw / strategy.tags.len() as f64
        };
        ScoredCandidate {
            strategy,
            raw,
            normalized,
            collaborative: stats.score(&strategy.id, dominant),
        }
    }
}

fn tag_content_score(tag: StrategyTag, profile: &EmotionProfile) -> u32 {
    allowed_feelings(tag).iter().map(|f| profile.count(f)).sum()
}

/// Runs each ranking pass in order, sharing one set of used strategies and
/// one set of used primary tags.
///
/// Each pass ranks candidates by its own score (stable, so ties keep catalog
/// order) and takes up to `picks` strategies that are not yet selected and
/// whose primary tag has not been used.
pub fn select_diverse(
    candidates: &[ScoredCandidate<'_>],
    passes: &[(RecommendationSource, usize)],
) -> Vec<Recommendation> {
    let mut used_ids: HashSet<&StrategyId> = HashSet::new();
    let mut used_tags: HashSet<StrategyTag> = HashSet::new();
    let mut picked = Vec::new();

    for &(source, picks) in passes {
        let mut ranked: Vec<&ScoredCandidate<'_>> = candidates.iter().collect();
        ranked.sort_by(|a, b| b.score_for(source).total_cmp(&a.score_for(source)));

        let mut taken = 0;
        for candidate in ranked {
            if taken == picks {
                break;
            }
            let Some(primary) = candidate.strategy.primary_tag() else {
                continue;
            };
            if used_ids.contains(&candidate.strategy.id) || used_tags.contains(&primary) {
                continue;
            }
            used_ids.insert(&candidate.strategy.id);
            used_tags.insert(primary);
            picked.push(Recommendation {
                strategy: candidate.strategy.clone(),
                score: candidate.score_for(source),
                source,
            });
            taken += 1;
        }
    }

    picked
}
