//! Moderation handlers.
//!
//! Publishing and editing run an automatic review that records the
//! classifier's verdict and may flag a visible item. Re-classifying stored
//! content only records the verdict; visibility then changes through an
//! explicit moderator decision. With fail-open on, classifier failures never
//! fail the caller's action.

mod cast_vote;
mod classify_content;
mod delete_content;
mod edit_content;
mod moderate_content;
mod publish_content;

pub use cast_vote::{CastVoteCommand, CastVoteHandler, CastVoteResult};
pub use classify_content::{ClassifyContentCommand, ClassifyContentHandler};
pub use delete_content::{DeleteContentCommand, DeleteContentHandler};
pub use edit_content::{EditContentCommand, EditContentHandler};
pub use moderate_content::{ModerateContentCommand, ModerateContentHandler, ModerationDecision};
pub use publish_content::{PublishContentCommand, PublishContentHandler};

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::{ContentId, DomainError, ErrorCode, Timestamp};
use crate::domain::moderation::{Classification, ContentItem, ModerationPolicy};
use crate::ports::{ContentRepository, TextClassifier};

/// Item state after a handler ran.
#[derive(Debug, Clone)]
pub struct ContentResult {
    pub item: ContentItem,
}

/// Classifier plus the policy deciding what gets auto-flagged.
pub struct AutoModeration {
    classifier: Arc<dyn TextClassifier>,
    policy: ModerationPolicy,
    auto_flag: bool,
    fail_open: bool,
}

impl AutoModeration {
    /// Fails open by default.
    pub fn new(classifier: Arc<dyn TextClassifier>, policy: ModerationPolicy, auto_flag: bool) -> Self {
        Self {
            classifier,
            policy,
            auto_flag,
            fail_open: true,
        }
    }

    /// When false, classifier errors surface as `ClassifierUnavailable`
    /// instead of being recorded as the safe verdict.
    pub fn with_fail_open(mut self, fail_open: bool) -> Self {
        self.fail_open = fail_open;
        self
    }

    /// Asks the classifier about the item's body.
    pub async fn classify(&self, item: &ContentItem) -> Result<Classification, DomainError> {
        match self.classifier.classify(item.body()).await {
            Ok(classification) => Ok(classification),
            Err(e) if self.fail_open => {
                warn!(content_id = %item.id, error = %e, "Classification failed, recording safe verdict");
                Ok(Classification::safe_fallback(Timestamp::now()))
            }
            Err(e) => {
                warn!(content_id = %item.id, error = %e, "Classification failed");
                Err(DomainError::new(ErrorCode::ClassifierUnavailable, e.message)
                    .with_detail("content_id", item.id.to_string()))
            }
        }
    }

    /// Classifies, records the verdict and auto-flags when policy says so.
    ///
    /// Returns true when the item was flagged as a result.
    pub async fn review(&self, item: &mut ContentItem) -> Result<bool, DomainError> {
        let classification = self.classify(item).await?;

        let flag = self.auto_flag && self.policy.should_auto_flag(item, &classification);
        info!(
            content_id = %item.id,
            label = %classification.label,
            confidence = classification.confidence,
            flag,
            "Content classified"
        );
        item.apply_classification(classification);

        // should_auto_flag already required Visible
        Ok(flag && item.flag(Timestamp::now()).is_ok())
    }
}

async fn load_content(
    repository: &dyn ContentRepository,
    id: &ContentId,
) -> Result<ContentItem, DomainError> {
    repository
        .find(id)
        .await?
        .ok_or_else(|| DomainError::not_found(ErrorCode::ContentNotFound, "Content", id))
}
