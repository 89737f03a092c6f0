//! Collaborative-filtering statistics.
//!
//! Tracks how often users with a given dominant feeling found a strategy
//! helpful. The diary recommender reads it as social proof.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StrategyId;

/// Helpfulness score per `(strategy, feeling)` pair. Feelings are lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollaborativeStats {
    scores: HashMap<StrategyId, HashMap<String, f64>>,
}

impl CollaborativeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for a pair; zero when absent.
    pub fn score(&self, strategy: &StrategyId, feeling: &str) -> f64 {
        self.scores
            .get(strategy)
            .and_then(|by_feeling| by_feeling.get(&feeling.to_lowercase()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Overwrites a pair's score.
    pub fn set(&mut self, strategy: StrategyId, feeling: &str, score: f64) {
        self.scores
            .entry(strategy)
            .or_default()
            .insert(feeling.to_lowercase(), score);
    }

    /// Adds one helpful vote for a pair.
    pub fn record_helpful(&mut self, strategy: StrategyId, feeling: &str) {
        *self
            .scores
            .entry(strategy)
            .or_default()
            .entry(feeling.to_lowercase())
            .or_insert(0.0) += 1.0;
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<(StrategyId, String, f64)> for CollaborativeStats {
    fn from_iter<T: IntoIterator<Item = (StrategyId, String, f64)>>(iter: T) -> Self {
        let mut stats = Self::new();
        for (strategy, feeling, score) in iter {
            stats.set(strategy, &feeling, score);
        }
        stats
    }
}
