//! Moderation module - content visibility under automatic and privileged review.
//!
//! Classification is recorded on content but never changes visibility by
//! itself; status changes are explicit transitions.

mod classification;
mod content;
mod errors;
mod policy;
mod status;

pub use classification::{Classification, SAFE_LABEL};
pub use content::{visible_only, ActorRole, ContentItem, ContentKind, Vote};
pub use errors::ModerationError;
pub use policy::{ModerationPolicy, DEFAULT_FLAG_THRESHOLD, DEFAULT_RISKY_LABELS};
pub use status::ModerationStatus;
