//! Recommendation module - coping strategy eligibility and ranking.
//!
//! # Components
//!
//! - `AssessmentRecommender` - severity floor gate + preferred-tag scoring
//! - `DiaryRecommender` - emotion filter + raw/normalized/collaborative blend
//! - `CollaborativeStats` - social-proof scores keyed by strategy and feeling
//!
//! All functions are pure and stateless; callers supply the catalog,
//! entries and statistics.

mod assessment_recommender;
mod collaborative;
mod diary_recommender;
mod strategy;
mod tables;

use serde::Serialize;

pub use assessment_recommender::{AssessmentRecommender, DEFAULT_ASSESSMENT_LIMIT};
pub use collaborative::CollaborativeStats;
pub use diary_recommender::{select_diverse, DiaryRecommender, DiarySelection, ScoredCandidate};
pub use strategy::{CopingStrategy, MediaRef, StrategyTag};
pub use tables::{allowed_feelings, preferred_tags};

/// Which heuristic surfaced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    SeverityMatch,
    RawContent,
    NormalizedContent,
    Collaborative,
}

/// A ranked strategy with the score that placed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub strategy: CopingStrategy,
    pub score: f64,
    pub source: RecommendationSource,
}
