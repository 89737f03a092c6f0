//! Emotion entry - one user-authored emotional data point.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, EntryId, ErrorCode, Timestamp, UserId, ValidationError};

/// Valence bucket every entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Pleasant,
    Neutral,
    Unpleasant,
}

impl EmotionCategory {
    /// All categories in display order.
    pub const ALL: [EmotionCategory; 3] = [
        EmotionCategory::Pleasant,
        EmotionCategory::Neutral,
        EmotionCategory::Unpleasant,
    ];

    /// Lower-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionCategory::Pleasant => "pleasant",
            EmotionCategory::Neutral => "neutral",
            EmotionCategory::Unpleasant => "unpleasant",
        }
    }
}

/// One emotion-tagged diary, event or post entry.
///
/// # Invariants
///
/// - Exactly one category
/// - Feeling labels are trimmed, non-blank and unique ignoring case
/// - `date_key` is the author's local calendar day at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionEntry {
    pub id: EntryId,
    pub author_id: UserId,
    pub category: EmotionCategory,
    feelings: Vec<String>,
    pub body: Option<String>,
    pub created_at: Timestamp,
    pub date_key: String,
    pub updated_at: Timestamp,
}

impl EmotionEntry {
    /// Creates a new entry, deriving the day bucket from the author's offset.
    pub fn new(
        author_id: UserId,
        category: EmotionCategory,
        feelings: Vec<String>,
        body: Option<String>,
        created_at: Timestamp,
        local_offset: FixedOffset,
    ) -> Result<Self, ValidationError> {
        let feelings = normalize_feelings(feelings)?;
        Ok(Self {
            id: EntryId::new(),
            author_id,
            category,
            feelings,
            body,
            created_at,
            date_key: created_at.date_key(local_offset),
            updated_at: created_at,
        })
    }

    /// Feeling labels as written by the author.
    pub fn feelings(&self) -> &[String] {
        &self.feelings
    }

    /// Owner-only edit of category, feelings and body.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if `editor` is not the author
    /// - validation errors for blank feeling labels
    pub fn edit(
        &mut self,
        editor: &UserId,
        category: EmotionCategory,
        feelings: Vec<String>,
        body: Option<String>,
    ) -> Result<(), DomainError> {
        self.ensure_owner(editor)?;
        self.feelings = normalize_feelings(feelings)?;
        self.category = category;
        self.body = body;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Checks that `actor` may delete this entry.
    pub fn ensure_owner(&self, actor: &UserId) -> Result<(), DomainError> {
        if &self.author_id != actor {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Only the author may modify this entry",
            )
            .with_detail("entry_id", self.id.to_string()));
        }
        Ok(())
    }
}

fn normalize_feelings(feelings: Vec<String>) -> Result<Vec<String>, ValidationError> {
    let mut seen: Vec<String> = Vec::with_capacity(feelings.len());
    let mut out = Vec::with_capacity(feelings.len());
    for raw in feelings {
        let label = raw.trim();
        if label.is_empty() {
            return Err(ValidationError::empty_field("feeling"));
        }
        let key = label.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            out.push(label.to_string());
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn author() -> UserId {
        UserId::new("author-1").unwrap()
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    #[test]
    fn new_entry_derives_date_key() {
        let entry = EmotionEntry::new(
            author(),
            EmotionCategory::Unpleasant,
            vec!["Anxious".into()],
            None,
            at("2024-03-01T22:00:00Z"),
            FixedOffset::east_opt(3 * 3600).unwrap(),
        )
        .unwrap();

        assert_eq!(entry.date_key, "2024-03-02");
    }

    #[test]
    fn duplicate_feelings_collapse_ignoring_case() {
        let entry = EmotionEntry::new(
            author(),
            EmotionCategory::Unpleasant,
            vec!["Anxious".into(), " anxious ".into(), "Drained".into()],
            None,
            Timestamp::now(),
            utc(),
        )
        .unwrap();

        assert_eq!(entry.feelings(), &["Anxious".to_string(), "Drained".to_string()]);
    }

    #[test]
    fn blank_feeling_is_rejected() {
        let result = EmotionEntry::new(
            author(),
            EmotionCategory::Neutral,
            vec!["  ".into()],
            None,
            Timestamp::now(),
            utc(),
        );
        assert_eq!(result, Err(ValidationError::empty_field("feeling")));
    }

    #[test]
    fn only_author_can_edit() {
        let mut entry = EmotionEntry::new(
            author(),
            EmotionCategory::Neutral,
            vec!["Tired".into()],
            None,
            Timestamp::now(),
            utc(),
        )
        .unwrap();
        let stranger = UserId::new("someone-else").unwrap();

        let err = entry
            .edit(&stranger, EmotionCategory::Pleasant, vec!["Calm".into()], None)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);

        entry
            .edit(&author(), EmotionCategory::Pleasant, vec!["Calm".into()], Some("better".into()))
            .unwrap();
        assert_eq!(entry.category, EmotionCategory::Pleasant);
        assert_eq!(entry.feelings(), &["Calm".to_string()]);
    }
}
