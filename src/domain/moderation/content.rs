//! Content item aggregate - posts and comments under moderation.

use serde::{Deserialize, Serialize};

use super::{Classification, ModerationError, ModerationStatus};
use crate::domain::foundation::{ContentId, StateMachine, Timestamp, UserId, ValidationError};

/// Post or comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentKind {
    Post,
    Comment { parent: ContentId },
}

/// Who is acting on a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    Member,
    Moderator,
}

impl ActorRole {
    pub fn is_privileged(&self) -> bool {
        *self == ActorRole::Moderator
    }
}

/// Up or down vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
}

/// A user-authored post or comment.
///
/// Classification and visibility are independent: recording a verdict never
/// changes `status`.
///
/// `version` is 0 until first stored and moves by one per persisted update;
/// vote counters are maintained atomically by the store and do not bump it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,
    pub author_id: UserId,
    pub kind: ContentKind,
    body: String,
    status: ModerationStatus,
    classification: Option<Classification>,
    edited: bool,
    pub up_votes: u64,
    pub down_votes: u64,
    pub version: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ContentItem {
    /// Creates a visible, unclassified item.
    pub fn new(
        author_id: UserId,
        kind: ContentKind,
        body: impl Into<String>,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let body = validated_body(body.into())?;
        Ok(Self {
            id: ContentId::new(),
            author_id,
            kind,
            body,
            status: ModerationStatus::Visible,
            classification: None,
            edited: false,
            up_votes: 0,
            down_votes: 0,
            version: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuilds a stored item without re-validating it.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ContentId,
        author_id: UserId,
        kind: ContentKind,
        body: String,
        status: ModerationStatus,
        classification: Option<Classification>,
        edited: bool,
        up_votes: u64,
        down_votes: u64,
        version: u64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            author_id,
            kind,
            body,
            status,
            classification,
            edited,
            up_votes,
            down_votes,
            version,
            created_at,
            updated_at,
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn status(&self) -> ModerationStatus {
        self.status
    }

    pub fn classification(&self) -> Option<&Classification> {
        self.classification.as_ref()
    }

    pub fn is_edited(&self) -> bool {
        self.edited
    }

    pub fn vote_score(&self) -> i64 {
        self.up_votes as i64 - self.down_votes as i64
    }

    /// Records a classifier verdict without touching visibility.
    pub fn apply_classification(&mut self, classification: Classification) {
        self.classification = Some(classification);
    }

    /// Replaces the body. Owner only, and not once hidden.
    pub fn edit(
        &mut self,
        editor: &UserId,
        body: impl Into<String>,
        now: Timestamp,
    ) -> Result<(), ModerationError> {
        self.ensure_owner(editor, "edit")?;
        if self.status == ModerationStatus::Hidden {
            return Err(ModerationError::invalid_transition(self.status, "edit"));
        }
        self.body = validated_body(body.into())?;
        self.edited = true;
        self.updated_at = now;
        Ok(())
    }

    /// Owner removes their own item.
    pub fn soft_delete(&mut self, owner: &UserId, now: Timestamp) -> Result<(), ModerationError> {
        self.ensure_owner(owner, "delete")?;
        self.transition(ModerationStatus::Hidden, "delete", now)
    }

    /// Automatic flag. Only a `Visible` item can be flagged.
    pub fn flag(&mut self, now: Timestamp) -> Result<(), ModerationError> {
        if self.status != ModerationStatus::Visible {
            return Err(ModerationError::invalid_transition(self.status, "flag"));
        }
        self.transition(ModerationStatus::Flagged, "flag", now)
    }

    /// Moderator clears a flag.
    pub fn approve(&mut self, role: ActorRole, now: Timestamp) -> Result<(), ModerationError> {
        Self::ensure_privileged(role, "approve")?;
        if self.status != ModerationStatus::Flagged {
            return Err(ModerationError::invalid_transition(self.status, "approve"));
        }
        self.transition(ModerationStatus::Visible, "approve", now)
    }

    /// Moderator hides the item.
    pub fn take_down(&mut self, role: ActorRole, now: Timestamp) -> Result<(), ModerationError> {
        Self::ensure_privileged(role, "take down")?;
        self.transition(ModerationStatus::Hidden, "take down", now)
    }

    /// Moderator makes a hidden item visible again.
    pub fn restore(&mut self, role: ActorRole, now: Timestamp) -> Result<(), ModerationError> {
        Self::ensure_privileged(role, "restore")?;
        if self.status != ModerationStatus::Hidden {
            return Err(ModerationError::invalid_transition(self.status, "restore"));
        }
        self.transition(ModerationStatus::Visible, "restore", now)
    }

    fn transition(
        &mut self,
        target: ModerationStatus,
        action: &'static str,
        now: Timestamp,
    ) -> Result<(), ModerationError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|_| ModerationError::invalid_transition(self.status, action))?;
        self.updated_at = now;
        Ok(())
    }

    fn ensure_owner(&self, user: &UserId, action: &'static str) -> Result<(), ModerationError> {
        if &self.author_id == user {
            Ok(())
        } else {
            Err(ModerationError::NotOwner {
                user: user.clone(),
                action,
            })
        }
    }

    fn ensure_privileged(role: ActorRole, action: &'static str) -> Result<(), ModerationError> {
        if role.is_privileged() {
            Ok(())
        } else {
            Err(ModerationError::NotPrivileged { action })
        }
    }
}

/// Items that belong in a default feed or comment list, in input order.
pub fn visible_only<'a, I>(items: I) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    items
        .into_iter()
        .filter(|item| item.status().is_publicly_visible())
        .collect()
}

fn validated_body(body: String) -> Result<String, ValidationError> {
    if body.trim().is_empty() {
        return Err(ValidationError::empty_field("body"));
    }
    Ok(body)
}
