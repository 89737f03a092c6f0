//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, errors and the state machine trait
//! that form the vocabulary of the Wellspring domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCategory, ErrorCode, ValidationError};
pub use ids::{AssessmentId, ContentId, EntryId, StrategyId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
