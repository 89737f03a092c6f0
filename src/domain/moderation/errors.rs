//! Moderation-specific error types.

use thiserror::Error;

use super::ModerationStatus;
use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModerationError {
    #[error("Only the author can {action} this content")]
    NotOwner { user: UserId, action: &'static str },

    #[error("A moderator is required to {action} content")]
    NotPrivileged { action: &'static str },

    #[error("Cannot {action} content that is {}", .current.as_str())]
    InvalidTransition {
        current: ModerationStatus,
        action: &'static str,
    },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl ModerationError {
    pub fn invalid_transition(current: ModerationStatus, action: &'static str) -> Self {
        ModerationError::InvalidTransition { current, action }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ModerationError::NotOwner { .. } | ModerationError::NotPrivileged { .. } => {
                ErrorCode::Forbidden
            }
            ModerationError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            ModerationError::Invalid(_) => ErrorCode::ValidationFailed,
        }
    }
}

impl From<ModerationError> for DomainError {
    fn from(err: ModerationError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
