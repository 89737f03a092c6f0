//! Display-name disclosure between users.

use serde::{Deserialize, Serialize};

use super::Relationship;
use crate::domain::foundation::UserId;

/// Fallback name when a user has no pseudonym.
pub const ANONYMOUS: &str = "Anonymous";

/// The naming facts one user exposes to others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicProfile {
    pub user_id: UserId,
    pub username: String,
    pub discriminator: String,
    pub pseudonym: Option<String>,
}

impl PublicProfile {
    /// `username#discriminator`.
    pub fn real_name(&self) -> String {
        format!("{}#{}", self.username, self.discriminator)
    }

    fn pseudonym_or_anonymous(&self) -> String {
        match self.pseudonym.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => ANONYMOUS.to_string(),
        }
    }
}

/// Name `viewer` may see for `counterpart`.
///
/// The real name is only disclosed inside a consented relationship that
/// includes both users.
pub fn display_name_for(
    viewer: &UserId,
    counterpart: &PublicProfile,
    relationship: Option<&Relationship>,
) -> String {
    let disclosed = relationship.is_some_and(|r| {
        r.is_consented() && r.counterpart(viewer) == Some(&counterpart.user_id)
    });

    if disclosed {
        counterpart.real_name()
    } else {
        counterpart.pseudonym_or_anonymous()
    }
}
