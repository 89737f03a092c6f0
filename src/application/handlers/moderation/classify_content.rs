//! ClassifyContentHandler - re-runs the classifier on stored content.

use std::sync::Arc;
use tracing::info;

use super::{load_content, AutoModeration, ContentResult};
use crate::domain::foundation::{ContentId, DomainError, UserId};
use crate::domain::moderation::{ActorRole, ModerationError};
use crate::ports::ContentRepository;

#[derive(Debug, Clone)]
pub struct ClassifyContentCommand {
    pub actor_id: UserId,
    pub role: ActorRole,
    pub content_id: ContentId,
}

/// Used after a model update. Moderators only.
///
/// The new verdict is recorded but visibility is left alone: a flag, an
/// approval or a takedown stays in place until a moderator decides otherwise.
pub struct ClassifyContentHandler {
    repository: Arc<dyn ContentRepository>,
    moderation: Arc<AutoModeration>,
}

impl ClassifyContentHandler {
    pub fn new(repository: Arc<dyn ContentRepository>, moderation: Arc<AutoModeration>) -> Self {
        Self {
            repository,
            moderation,
        }
    }

    /// # Errors
    ///
    /// - `Forbidden` unless the actor is a moderator
    /// - `ContentNotFound` if the item doesn't exist
    /// - `ConcurrentModification` if the item changed while the classifier ran
    pub async fn handle(&self, cmd: ClassifyContentCommand) -> Result<ContentResult, DomainError> {
        if !cmd.role.is_privileged() {
            return Err(ModerationError::NotPrivileged { action: "reclassify" }.into());
        }

        let mut item = load_content(self.repository.as_ref(), &cmd.content_id).await?;
        let classification = self.moderation.classify(&item).await?;
        item.apply_classification(classification);
        item.version = self.repository.update(&item).await?;

        info!(
            content_id = %item.id,
            actor_id = %cmd.actor_id,
            label = item.classification().map(|c| c.label.as_str()).unwrap_or_default(),
            "Content reclassified"
        );
        Ok(ContentResult { item })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::moderation;
    use super::super::{ModerateContentCommand, ModerateContentHandler, ModerationDecision};
    use super::*;
    use crate::adapters::InMemoryContentRepository;
    use crate::domain::foundation::{ErrorCode, Timestamp};
    use crate::domain::moderation::{Classification, ContentItem, ContentKind, ModerationPolicy, ModerationStatus};
    use crate::ports::TextClassifier;
    use async_trait::async_trait;
    use tokio::sync::Notify;

    async fn stored(repo: &InMemoryContentRepository) -> ContentItem {
        let item = ContentItem::new(
            UserId::new("author").unwrap(),
            ContentKind::Post,
            "body",
            Timestamp::now(),
        )
        .unwrap();
        repo.save(&item).await.unwrap();
        item
    }

    fn cmd(role: ActorRole, content_id: ContentId) -> ClassifyContentCommand {
        ClassifyContentCommand {
            actor_id: UserId::new("mod").unwrap(),
            role,
            content_id,
        }
    }

    fn decide(content_id: ContentId, decision: ModerationDecision) -> ModerateContentCommand {
        ModerateContentCommand {
            actor_id: UserId::new("mod").unwrap(),
            role: ActorRole::Moderator,
            content_id,
            decision,
        }
    }

    #[tokio::test]
    async fn hidden_item_is_relabelled_but_stays_hidden() {
        let repo = Arc::new(InMemoryContentRepository::new());
        let mut item = stored(&repo).await;
        item.take_down(ActorRole::Moderator, Timestamp::now()).unwrap();
        repo.update(&item).await.unwrap();

        let handler = ClassifyContentHandler::new(repo, moderation(Some("Hate"), 0.99));
        let out = handler.handle(cmd(ActorRole::Moderator, item.id)).await.unwrap();

        assert_eq!(out.item.status(), ModerationStatus::Hidden);
        assert_eq!(out.item.classification().map(|c| c.label.as_str()), Some("Hate"));
    }

    #[tokio::test]
    async fn approved_item_stays_visible_after_risky_reclassification() {
        let repo = Arc::new(InMemoryContentRepository::new());
        let mut item = stored(&repo).await;
        item.flag(Timestamp::now()).unwrap();
        repo.update(&item).await.unwrap();

        ModerateContentHandler::new(repo.clone())
            .handle(decide(item.id, ModerationDecision::Approve))
            .await
            .unwrap();

        let handler = ClassifyContentHandler::new(repo.clone(), moderation(Some("Toxic"), 0.99));
        let out = handler.handle(cmd(ActorRole::Moderator, item.id)).await.unwrap();

        assert_eq!(out.item.status(), ModerationStatus::Visible);
        let stored = repo.find(&item.id).await.unwrap().unwrap();
        assert_eq!(stored.status(), ModerationStatus::Visible);
        assert_eq!(stored.classification().map(|c| c.label.as_str()), Some("Toxic"));
    }

    #[tokio::test]
    async fn visible_item_is_never_flagged_by_reclassification() {
        let repo = Arc::new(InMemoryContentRepository::new());
        let item = stored(&repo).await;

        let handler = ClassifyContentHandler::new(repo, moderation(Some("Toxic"), 0.99));
        let out = handler.handle(cmd(ActorRole::Moderator, item.id)).await.unwrap();

        assert_eq!(out.item.status(), ModerationStatus::Visible);
    }

    #[tokio::test]
    async fn member_cannot_reclassify() {
        let repo = Arc::new(InMemoryContentRepository::new());
        let item = stored(&repo).await;

        let handler = ClassifyContentHandler::new(repo.clone(), moderation(Some("Toxic"), 0.99));
        let err = handler.handle(cmd(ActorRole::Member, item.id)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
        let stored = repo.find(&item.id).await.unwrap().unwrap();
        assert!(stored.classification().is_none());
        assert_eq!(stored.version, 0);
    }

    #[tokio::test]
    async fn unknown_content_is_not_found() {
        let handler = ClassifyContentHandler::new(
            Arc::new(InMemoryContentRepository::new()),
            moderation(Some("Safe"), 1.0),
        );
        let err = handler
            .handle(cmd(ActorRole::Moderator, ContentId::new()))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ContentNotFound);
    }

    /// Classifier that parks until released, so another writer can run first.
    struct GatedClassifier {
        entered: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl TextClassifier for GatedClassifier {
        async fn classify(&self, _text: &str) -> Result<Classification, DomainError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(Classification::new("Toxic", 0.99, Timestamp::now())?)
        }
    }

    #[tokio::test]
    async fn takedown_during_classification_wins_and_classify_conflicts() {
        let repo = Arc::new(InMemoryContentRepository::new());
        let item = stored(&repo).await;
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let gated = Arc::new(AutoModeration::new(
            Arc::new(GatedClassifier {
                entered: entered.clone(),
                release: release.clone(),
            }),
            ModerationPolicy::default(),
            true,
        ));

        let classify = ClassifyContentHandler::new(repo.clone(), gated);
        let content_id = item.id;
        let pending = tokio::spawn(async move {
            classify.handle(cmd(ActorRole::Moderator, content_id)).await
        });

        entered.notified().await;
        ModerateContentHandler::new(repo.clone())
            .handle(decide(item.id, ModerationDecision::TakeDown))
            .await
            .unwrap();
        release.notify_one();

        let err = pending.await.unwrap().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConcurrentModification);
        assert!(err.is_retryable());

        let stored = repo.find(&item.id).await.unwrap().unwrap();
        assert_eq!(stored.status(), ModerationStatus::Hidden);
        assert!(stored.classification().is_none());
    }
}
