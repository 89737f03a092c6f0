//! RecommendFromDiaryHandler - ranks the catalog against the user's recent
//! diary entries.

use std::sync::Arc;
use tracing::info;

use crate::domain::emotion::EmotionProfile;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::recommendation::{DiaryRecommender, DiarySelection, Recommendation};
use crate::ports::{CollaborativeStatsStore, EmotionEntryReader, StrategyCatalog};

#[derive(Debug, Clone)]
pub struct RecommendFromDiaryQuery {
    pub user_id: UserId,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct RecommendFromDiaryResult {
    /// `None` when the window holds no feelings.
    pub dominant_feeling: Option<String>,
    pub recommendations: Vec<Recommendation>,
}

pub struct RecommendFromDiaryHandler {
    entries: Arc<dyn EmotionEntryReader>,
    catalog: Arc<dyn StrategyCatalog>,
    stats: Arc<dyn CollaborativeStatsStore>,
    selection: DiarySelection,
    window_days: u32,
}

impl RecommendFromDiaryHandler {
    pub fn new(
        entries: Arc<dyn EmotionEntryReader>,
        catalog: Arc<dyn StrategyCatalog>,
        stats: Arc<dyn CollaborativeStatsStore>,
        selection: DiarySelection,
        window_days: u32,
    ) -> Self {
        Self {
            entries,
            catalog,
            stats,
            selection,
            window_days,
        }
    }

    pub async fn handle(
        &self,
        query: RecommendFromDiaryQuery,
    ) -> Result<RecommendFromDiaryResult, DomainError> {
        let now = Timestamp::now();
        let entries = self
            .entries
            .entries_since(&query.user_id, now.minus_days(self.window_days as i64))
            .await?;

        let profile = EmotionProfile::from_window(&entries, now, self.window_days as i64);
        let dominant_feeling = profile.dominant_feeling().map(str::to_string);
        if dominant_feeling.is_none() {
            return Ok(RecommendFromDiaryResult {
                dominant_feeling,
                recommendations: Vec::new(),
            });
        }

        let strategies = self.catalog.list_all().await?;
        let stats = self.stats.snapshot().await?;
        let limit = query.limit.unwrap_or_else(|| self.selection.total());

        let recommendations = DiaryRecommender::recommend_for_profile(
            &strategies,
            &profile,
            &stats,
            self.selection,
            limit,
        );

        info!(
            user_id = %query.user_id,
            entries = entries.len(),
            count = recommendations.len(),
            "Diary recommendations ranked"
        );

        Ok(RecommendFromDiaryResult {
            dominant_feeling,
            recommendations,
        })
    }
}
