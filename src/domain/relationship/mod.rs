//! Relationship module - consent-gated pairwise relationships.
//!
//! One symmetric record per unordered pair of users governs whether they
//! may message each other and whether real names are disclosed.

mod aggregate;
mod disclosure;
mod errors;
mod key;
mod status;

pub use aggregate::{visible_conversations, Relationship};
pub use disclosure::{display_name_for, PublicProfile, ANONYMOUS};
pub use errors::RelationshipError;
pub use key::RelationshipKey;
pub use status::RelationshipStatus;
