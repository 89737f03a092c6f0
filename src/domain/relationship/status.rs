//! Relationship status state machine.
//!
//! The `none` state is the absence of a record and has no variant here.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Consent state between two users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipStatus {
    /// One side asked, the other has not answered.
    Pending,

    /// Both sides agreed; messaging and real names are unlocked.
    Consented,

    /// Consent withdrawn. A fresh request restarts the cycle.
    Revoked,

    /// Closed until the blocker unblocks. Unblocking lands in `Revoked`.
    Blocked,
}

impl RelationshipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipStatus::Pending => "pending",
            RelationshipStatus::Consented => "consented",
            RelationshipStatus::Revoked => "revoked",
            RelationshipStatus::Blocked => "blocked",
        }
    }
}

impl StateMachine for RelationshipStatus {
    fn valid_transitions(&self) -> &'static [Self] {
        use RelationshipStatus::*;
        match self {
            // Re-request keeps the pair pending.
            Pending => &[Pending, Consented, Revoked, Blocked],
            Consented => &[Pending, Revoked, Blocked],
            Revoked => &[Pending, Revoked, Blocked],
            // Leaving a block goes through unblock only.
            Blocked => &[Blocked, Revoked],
        }
    }
}
