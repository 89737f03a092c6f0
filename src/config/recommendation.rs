//! Recommendation engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::recommendation::{DiarySelection, DEFAULT_ASSESSMENT_LIMIT};

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    /// Strategies returned for an assessment when the caller gives no limit
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Trailing days of diary entries feeding the emotion profile
    #[serde(default = "default_diary_window_days")]
    pub diary_window_days: u32,

    /// Picks drawn from the collaborative ranking
    #[serde(default = "default_collaborative_slots")]
    pub collaborative_slots: usize,
}

impl RecommendationConfig {
    /// Diary pass sizes: one raw, one normalized, the configured collaborative slots.
    pub fn diary_selection(&self) -> DiarySelection {
        DiarySelection {
            collaborative_picks: self.collaborative_slots,
            ..DiarySelection::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_limit == 0 {
            return Err(ValidationError::InvalidRecommendationLimit);
        }
        if self.diary_window_days == 0 {
            return Err(ValidationError::InvalidDiaryWindow);
        }
        Ok(())
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            diary_window_days: default_diary_window_days(),
            collaborative_slots: default_collaborative_slots(),
        }
    }
}

fn default_limit() -> usize {
    DEFAULT_ASSESSMENT_LIMIT
}

fn default_diary_window_days() -> u32 {
    14
}

fn default_collaborative_slots() -> usize {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RecommendationConfig::default();
        assert_eq!(config.default_limit, 3);
        assert_eq!(config.diary_window_days, 14);
        assert_eq!(config.diary_selection().total(), 4);
    }

    #[test]
    fn zero_limit_is_invalid() {
        let config = RecommendationConfig {
            default_limit: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidRecommendationLimit));
    }
}
