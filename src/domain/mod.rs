//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, errors, state machine)
//! - `emotion` - Emotion entries, feeling vocabulary and profiles
//! - `assessment` - PHQ-9 / GAD-7 scoring and severity mapping
//! - `recommendation` - Coping strategy eligibility and ranking
//! - `relationship` - Consent-gated pairwise relationships
//! - `moderation` - Content items and visibility policy
//! - `safety` - Crisis screening for chat

pub mod assessment;
pub mod emotion;
pub mod foundation;
pub mod moderation;
pub mod recommendation;
pub mod relationship;
pub mod safety;
