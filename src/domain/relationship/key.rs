//! Symmetric relationship key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, ValidationError};

const SEPARATOR: char = '_';

/// Identity of the single relationship record an unordered pair may have.
///
/// Built by sorting both ids lexicographically and joining them, so
/// `key(a, b) == key(b, a)`. The join is prefixed with the byte length of the
/// first id; user ids may contain the separator themselves, and without the
/// prefix `("a_b", "c")` and `("a", "b_c")` would share a key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationshipKey(String);

impl RelationshipKey {
    /// Builds the key for two distinct users.
    pub fn new(a: &UserId, b: &UserId) -> Result<Self, ValidationError> {
        Self::for_pair(a.as_str(), b.as_str())
    }

    /// Builds the key from raw ids, failing on a missing or repeated id.
    pub fn for_pair(a: &str, b: &str) -> Result<Self, ValidationError> {
        if a.trim().is_empty() {
            return Err(ValidationError::empty_field("participant_a"));
        }
        if b.trim().is_empty() {
            return Err(ValidationError::empty_field("participant_b"));
        }
        if a == b {
            return Err(ValidationError::invalid_format(
                "participants",
                "a relationship needs two distinct users",
            ));
        }
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Ok(Self(format!("{}:{}{}{}", first.len(), first, SEPARATOR, second)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelationshipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two participants in lexicographic order.
pub fn sorted_pair(a: &UserId, b: &UserId) -> [UserId; 2] {
    if a <= b {
        [a.clone(), b.clone()]
    } else {
        [b.clone(), a.clone()]
    }
}
