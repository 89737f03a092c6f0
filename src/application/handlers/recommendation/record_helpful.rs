//! RecordHelpfulHandler - feeds helpfulness votes into collaborative stats.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{DomainError, StrategyId, UserId, ValidationError};
use crate::ports::CollaborativeStatsStore;

#[derive(Debug, Clone)]
pub struct RecordHelpfulCommand {
    pub user_id: UserId,
    pub strategy_id: StrategyId,
    /// Feeling the user was experiencing when the strategy helped.
    pub feeling: String,
}

pub struct RecordHelpfulHandler {
    stats: Arc<dyn CollaborativeStatsStore>,
}

impl RecordHelpfulHandler {
    pub fn new(stats: Arc<dyn CollaborativeStatsStore>) -> Self {
        Self { stats }
    }

    pub async fn handle(&self, cmd: RecordHelpfulCommand) -> Result<(), DomainError> {
        let feeling = cmd.feeling.trim();
        if feeling.is_empty() {
            return Err(ValidationError::empty_field("feeling").into());
        }

        self.stats.record_helpful(&cmd.strategy_id, feeling).await?;
        info!(
            user_id = %cmd.user_id,
            strategy_id = %cmd.strategy_id,
            "Helpful feedback recorded"
        );
        Ok(())
    }
}
