//! Relationship-specific error types.
//!
//! # Error Code Mapping
//!
//! | Error | Code |
//! |-------|------|
//! | NotParticipant | Forbidden |
//! | CannotAccept | InvalidStateTransition |
//! | InvalidTransition | InvalidStateTransition |
//! | ChatNotAllowed | Forbidden |
//! | InvalidKey | ValidationFailed |

use thiserror::Error;

use super::RelationshipStatus;
use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationshipError {
    #[error("User {0} is not part of this relationship")]
    NotParticipant(UserId),

    #[error("Cannot accept: {reason}")]
    CannotAccept { reason: String },

    #[error("Cannot {action} a relationship that is {}", .current.as_str())]
    InvalidTransition {
        current: RelationshipStatus,
        action: &'static str,
    },

    #[error("Messaging requires mutual consent")]
    ChatNotAllowed,

    #[error(transparent)]
    InvalidKey(#[from] ValidationError),
}

impl RelationshipError {
    pub fn cannot_accept(reason: impl Into<String>) -> Self {
        RelationshipError::CannotAccept {
            reason: reason.into(),
        }
    }

    pub fn invalid_transition(current: RelationshipStatus, action: &'static str) -> Self {
        RelationshipError::InvalidTransition { current, action }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RelationshipError::NotParticipant(_) | RelationshipError::ChatNotAllowed => {
                ErrorCode::Forbidden
            }
            RelationshipError::CannotAccept { .. } | RelationshipError::InvalidTransition { .. } => {
                ErrorCode::InvalidStateTransition
            }
            RelationshipError::InvalidKey(_) => ErrorCode::ValidationFailed,
        }
    }
}

impl From<RelationshipError> for DomainError {
    fn from(err: RelationshipError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_message_names_state() {
        let err = RelationshipError::invalid_transition(RelationshipStatus::Blocked, "request");
        assert_eq!(err.to_string(), "Cannot request a relationship that is blocked");
    }

    #[test]
    fn converts_to_domain_error_with_code() {
        let err: DomainError = RelationshipError::ChatNotAllowed.into();
        assert_eq!(err.code, ErrorCode::Forbidden);

        let err: DomainError = RelationshipError::cannot_accept("already consented").into();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert!(err.message.contains("already consented"));
    }

    #[test]
    fn key_validation_maps_to_validation_failed() {
        let err = RelationshipError::from(ValidationError::empty_field("participant_a"));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
