//! Identifier value objects.
//!
//! User and strategy ids are opaque strings owned by other systems; content,
//! diary entries and screenings get random UUIDs at creation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Declares a non-blank string id. `$field` names the value in validation errors.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// Declares a UUID-backed id that is freshly generated by `new`.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps a stored UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

string_id!(
    /// Platform user, as issued by the external auth provider.
    UserId,
    "user_id"
);

string_id!(
    /// Coping strategy in the shared catalog.
    StrategyId,
    "strategy_id"
);

uuid_id!(
    /// Post or comment.
    ContentId
);

uuid_id!(
    /// Diary entry.
    EntryId
);

uuid_id!(
    /// Completed screening questionnaire.
    AssessmentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_user_id_names_the_field() {
        assert_eq!(UserId::new("   "), Err(ValidationError::empty_field("user_id")));
        assert_eq!(StrategyId::new(""), Err(ValidationError::empty_field("strategy_id")));
    }

    #[test]
    fn user_id_displays_raw_value() {
        let id = UserId::new("uid-123").unwrap();
        assert_eq!(id.as_str(), "uid-123");
        assert_eq!(id.to_string(), "uid-123");
    }

    #[test]
    fn string_ids_order_lexically() {
        let a = UserId::new("alice").unwrap();
        let b = UserId::new("bob").unwrap();
        assert!(a < b);
    }

    #[test]
    fn content_id_parses_its_display_form() {
        let id = ContentId::new();
        let parsed: ContentId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<EntryId>().is_err());
    }

    #[test]
    fn ids_serialize_as_bare_values() {
        let user = UserId::new("alice").unwrap();
        assert_eq!(serde_json::to_string(&user).unwrap(), "\"alice\"");

        let uuid = Uuid::nil();
        let assessment = AssessmentId::from_uuid(uuid);
        assert_eq!(
            serde_json::to_string(&assessment).unwrap(),
            format!("\"{}\"", uuid)
        );
    }
}
