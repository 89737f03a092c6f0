//! Relationship aggregate - consent between exactly two users.
//!
//! # Lifecycle
//!
//! ```text
//! (none) --request--> Pending --accept--> Consented
//!                        |                    |
//!                        +--revoke/block------+--> Revoked / Blocked
//! Revoked --request--> Pending
//! Blocked --unblock--> Revoked
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::key::sorted_pair;
use super::{RelationshipError, RelationshipKey, RelationshipStatus};
use crate::domain::foundation::{StateMachine, Timestamp, UserId};

/// The single record an unordered pair of users shares.
///
/// # Invariants
///
/// - `participants` holds two distinct ids in lexicographic order
/// - `consent` has exactly one entry per participant
/// - Both consent flags are true iff status is `Consented`
/// - `next_seq` never decreases
/// - `version` increases by one per persisted change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    key: RelationshipKey,
    participants: [UserId; 2],
    status: RelationshipStatus,
    consent: BTreeMap<UserId, bool>,
    blocked_by: Option<UserId>,
    next_seq: u64,
    pub version: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Relationship {
    /// Starts a new pending relationship from `requester` to `other`.
    pub fn request(
        requester: &UserId,
        other: &UserId,
        now: Timestamp,
    ) -> Result<Self, RelationshipError> {
        let key = RelationshipKey::new(requester, other)?;
        let participants = sorted_pair(requester, other);
        let consent = Self::consent_from(requester, other, true, false);

        Ok(Self {
            key,
            participants,
            status: RelationshipStatus::Pending,
            consent,
            blocked_by: None,
            next_seq: 0,
            version: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Creates or restarts the pending cycle from `requester`'s side.
    ///
    /// Whatever the prior status, the result is `Pending` with only the
    /// requester consenting. A blocked pair must be unblocked first.
    pub fn request_or_restart(
        existing: Option<Relationship>,
        requester: &UserId,
        other: &UserId,
        now: Timestamp,
    ) -> Result<Self, RelationshipError> {
        match existing {
            None => Self::request(requester, other, now),
            Some(mut rel) => {
                if rel.participants != sorted_pair(requester, other) {
                    return Err(RelationshipError::NotParticipant(requester.clone()));
                }
                rel.transition(RelationshipStatus::Pending, "request")?;
                rel.consent = Self::consent_from(requester, other, true, false);
                rel.updated_at = now;
                Ok(rel)
            }
        }
    }

    /// Reconstitutes a stored record.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        a: &UserId,
        b: &UserId,
        status: RelationshipStatus,
        consent_a: bool,
        consent_b: bool,
        blocked_by: Option<UserId>,
        next_seq: u64,
        version: u64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Result<Self, RelationshipError> {
        Ok(Self {
            key: RelationshipKey::new(a, b)?,
            participants: sorted_pair(a, b),
            status,
            consent: Self::consent_from(a, b, consent_a, consent_b),
            blocked_by,
            next_seq,
            version,
            created_at,
            updated_at,
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn key(&self) -> &RelationshipKey {
        &self.key
    }

    pub fn participants(&self) -> &[UserId; 2] {
        &self.participants
    }

    pub fn status(&self) -> RelationshipStatus {
        self.status
    }

    /// Consent flag for one participant; false for outsiders.
    pub fn consent_of(&self, user: &UserId) -> bool {
        self.consent.get(user).copied().unwrap_or(false)
    }

    pub fn blocked_by(&self) -> Option<&UserId> {
        self.blocked_by.as_ref()
    }

    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }

    pub fn involves(&self, user: &UserId) -> bool {
        self.participants.contains(user)
    }

    /// The other participant, if `viewer` is one of the two.
    pub fn counterpart(&self, viewer: &UserId) -> Option<&UserId> {
        match &self.participants {
            [a, b] if a == viewer => Some(b),
            [a, b] if b == viewer => Some(a),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Derived predicates
    // ─────────────────────────────────────────────────────────────────────

    pub fn is_consented(&self) -> bool {
        self.status == RelationshipStatus::Consented
    }

    pub fn can_chat(&self) -> bool {
        self.is_consented()
    }

    pub fn is_pending(&self) -> bool {
        self.status == RelationshipStatus::Pending
    }

    pub fn is_blocked(&self) -> bool {
        self.status == RelationshipStatus::Blocked
    }

    /// True when `user` is the pending side that has not yet consented.
    pub fn can_accept(&self, user: &UserId) -> bool {
        self.is_pending() && self.involves(user) && !self.consent_of(user)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────

    /// Accepts a pending request.
    ///
    /// # Errors
    ///
    /// - `NotParticipant` for outsiders
    /// - `CannotAccept` unless pending with `accepter` not yet consenting
    pub fn accept(&mut self, accepter: &UserId, now: Timestamp) -> Result<(), RelationshipError> {
        self.ensure_participant(accepter)?;
        if !self.is_pending() {
            return Err(RelationshipError::cannot_accept(format!(
                "relationship is {}",
                self.status.as_str()
            )));
        }
        if self.consent_of(accepter) {
            return Err(RelationshipError::cannot_accept(
                "the requester cannot accept their own request",
            ));
        }

        self.transition(RelationshipStatus::Consented, "accept")?;
        self.consent.insert(accepter.clone(), true);
        self.updated_at = now;
        Ok(())
    }

    /// Withdraws consent on both sides.
    pub fn revoke(&mut self, actor: &UserId, now: Timestamp) -> Result<(), RelationshipError> {
        self.ensure_participant(actor)?;
        self.transition(RelationshipStatus::Revoked, "revoke")?;
        self.clear_consent();
        self.blocked_by = None;
        self.updated_at = now;
        Ok(())
    }

    /// Blocks the pair. A second block keeps the original blocker.
    pub fn block(&mut self, actor: &UserId, now: Timestamp) -> Result<(), RelationshipError> {
        self.ensure_participant(actor)?;
        self.transition(RelationshipStatus::Blocked, "block")?;
        self.clear_consent();
        if self.blocked_by.is_none() {
            self.blocked_by = Some(actor.clone());
        }
        self.updated_at = now;
        Ok(())
    }

    /// Lifts a block into `Revoked`. Messaging needs a fresh request.
    pub fn unblock(&mut self, actor: &UserId, now: Timestamp) -> Result<(), RelationshipError> {
        self.ensure_participant(actor)?;
        if !self.is_blocked() {
            return Err(RelationshipError::invalid_transition(self.status, "unblock"));
        }
        self.transition(RelationshipStatus::Revoked, "unblock")?;
        self.clear_consent();
        self.blocked_by = None;
        self.updated_at = now;
        Ok(())
    }

    /// Hands out the next message sequence number.
    pub fn allocate_seq(&mut self, sender: &UserId) -> Result<u64, RelationshipError> {
        self.ensure_participant(sender)?;
        if !self.can_chat() {
            return Err(RelationshipError::ChatNotAllowed);
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        Ok(seq)
    }

    fn transition(
        &mut self,
        target: RelationshipStatus,
        action: &'static str,
    ) -> Result<(), RelationshipError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|_| RelationshipError::invalid_transition(self.status, action))?;
        Ok(())
    }

    fn ensure_participant(&self, user: &UserId) -> Result<(), RelationshipError> {
        if self.involves(user) {
            Ok(())
        } else {
            Err(RelationshipError::NotParticipant(user.clone()))
        }
    }

    fn clear_consent(&mut self) {
        for flag in self.consent.values_mut() {
            *flag = false;
        }
    }

    fn consent_from(a: &UserId, b: &UserId, a_flag: bool, b_flag: bool) -> BTreeMap<UserId, bool> {
        BTreeMap::from([(a.clone(), a_flag), (b.clone(), b_flag)])
    }
}

/// Conversations `viewer` should see, excluding pairs the viewer blocked.
pub fn visible_conversations<'a>(
    viewer: &UserId,
    relationships: &'a [Relationship],
) -> Vec<&'a Relationship> {
    relationships
        .iter()
        .filter(|r| r.involves(viewer))
        .filter(|r| !(r.is_blocked() && r.blocked_by() == Some(viewer)))
        .collect()
}
