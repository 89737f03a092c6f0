//! Per-user feeling vocabulary.
//!
//! The effective vocabulary for a category is the platform defaults, minus
//! the defaults the user hid, plus the user's custom feelings.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::EmotionCategory;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Maximum custom feelings per category.
pub const MAX_CUSTOM_FEELINGS: usize = 5;

/// Maximum length of a custom feeling, in characters.
pub const MAX_FEELING_LEN: usize = 20;

/// Platform default feelings for a category.
pub fn default_feelings(category: EmotionCategory) -> &'static [&'static str] {
    match category {
        EmotionCategory::Pleasant => &[
            "Happy", "Grateful", "Calm", "Excited", "Proud", "Hopeful", "Loved", "Relieved",
        ],
        EmotionCategory::Neutral => &[
            "Okay", "Tired", "Bored", "Curious", "Indifferent", "Pensive",
        ],
        EmotionCategory::Unpleasant => &[
            "Anxious", "Sad", "Angry", "Stressed", "Lonely", "Drained", "Guilty", "Hopeless",
            "Afraid", "Overwhelmed", "Irritable", "Restless",
        ],
    }
}

/// Rejections for vocabulary edits, worded for direct display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("Feeling cannot be empty")]
    Empty,

    #[error("Feeling must be at most {max} characters")]
    TooLong { max: usize },

    #[error("Feeling cannot contain emoji")]
    ContainsEmoji,

    #[error("'{0}' is already in your feelings")]
    Duplicate(String),

    #[error("Maximum {max} custom feelings reached")]
    LimitReached { max: usize },

    #[error("'{0}' is not one of your feelings")]
    NotFound(String),
}

impl From<VocabularyError> for DomainError {
    fn from(err: VocabularyError) -> Self {
        let code = match err {
            VocabularyError::NotFound(_) => ErrorCode::InvalidFormat,
            VocabularyError::Empty => ErrorCode::EmptyField,
            VocabularyError::TooLong { .. } | VocabularyError::LimitReached { .. } => {
                ErrorCode::OutOfRange
            }
            _ => ErrorCode::ValidationFailed,
        };
        DomainError::new(code, err.to_string()).with_detail("field", "feeling")
    }
}

/// A user's customisations on top of the platform defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeelingVocabulary {
    hidden: BTreeMap<EmotionCategory, BTreeSet<String>>,
    custom: BTreeMap<EmotionCategory, Vec<String>>,
}

impl FeelingVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective feelings for a category: visible defaults, then customs.
    pub fn effective(&self, category: EmotionCategory) -> Vec<String> {
        let hidden = self.hidden.get(&category);
        default_feelings(category)
            .iter()
            .filter(|d| !hidden.is_some_and(|h| h.contains(&d.to_lowercase())))
            .map(|d| d.to_string())
            .chain(self.customs(category).iter().cloned())
            .collect()
    }

    /// Custom feelings added to a category.
    pub fn customs(&self, category: EmotionCategory) -> &[String] {
        self.custom.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Adds a custom feeling after validating it.
    ///
    /// Returns the stored label (trimmed, original casing).
    pub fn add_custom(
        &mut self,
        category: EmotionCategory,
        input: &str,
    ) -> Result<String, VocabularyError> {
        let label = validate_label(input)?;

        if self.customs(category).len() >= MAX_CUSTOM_FEELINGS {
            return Err(VocabularyError::LimitReached {
                max: MAX_CUSTOM_FEELINGS,
            });
        }

        // Hidden defaults are not part of the effective list and may come back as customs.
        let key = label.to_lowercase();
        if self
            .effective(category)
            .iter()
            .any(|f| f.to_lowercase() == key)
        {
            return Err(VocabularyError::Duplicate(label));
        }

        self.custom.entry(category).or_default().push(label.clone());
        Ok(label)
    }

    /// Removes a custom feeling.
    pub fn remove_custom(
        &mut self,
        category: EmotionCategory,
        label: &str,
    ) -> Result<(), VocabularyError> {
        let key = label.trim().to_lowercase();
        let customs = self.custom.entry(category).or_default();
        let before = customs.len();
        customs.retain(|c| c.to_lowercase() != key);
        if customs.len() == before {
            return Err(VocabularyError::NotFound(label.trim().to_string()));
        }
        Ok(())
    }

    /// Hides a platform default from the user's picker.
    pub fn hide_default(
        &mut self,
        category: EmotionCategory,
        label: &str,
    ) -> Result<(), VocabularyError> {
        let key = label.trim().to_lowercase();
        if !default_feelings(category)
            .iter()
            .any(|d| d.to_lowercase() == key)
        {
            return Err(VocabularyError::NotFound(label.trim().to_string()));
        }
        self.hidden.entry(category).or_default().insert(key);
        Ok(())
    }

    /// Restores a previously hidden default.
    ///
    /// A custom feeling with the same name is dropped in its favour.
    pub fn unhide_default(&mut self, category: EmotionCategory, label: &str) {
        let key = label.trim().to_lowercase();
        let restored = self
            .hidden
            .get_mut(&category)
            .is_some_and(|hidden| hidden.remove(&key));
        if restored {
            if let Some(customs) = self.custom.get_mut(&category) {
                customs.retain(|c| c.to_lowercase() != key);
            }
        }
    }
}

fn validate_label(input: &str) -> Result<String, VocabularyError> {
    let label = input.trim();
    if label.is_empty() {
        return Err(VocabularyError::Empty);
    }
    if label.chars().count() > MAX_FEELING_LEN {
        return Err(VocabularyError::TooLong {
            max: MAX_FEELING_LEN,
        });
    }
    if label.chars().any(is_emoji) {
        return Err(VocabularyError::ContainsEmoji);
    }
    Ok(label.to_string())
}

fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF // pictographs, emoticons, flags, symbols
            | 0x2600..=0x27BF // misc symbols, dingbats
            | 0x2B00..=0x2BFF
            | 0xFE0F // variation selector
            | 0x200D // zero width joiner
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_starts_with_defaults() {
        let vocab = FeelingVocabulary::new();
        assert_eq!(
            vocab.effective(EmotionCategory::Neutral).len(),
            default_feelings(EmotionCategory::Neutral).len()
        );
    }

    #[test]
    fn add_custom_trims_and_appends() {
        let mut vocab = FeelingVocabulary::new();
        let stored = vocab
            .add_custom(EmotionCategory::Pleasant, "  Cozy ")
            .unwrap();

        assert_eq!(stored, "Cozy");
        assert_eq!(
            vocab.effective(EmotionCategory::Pleasant).last().map(String::as_str),
            Some("Cozy")
        );
    }

    #[test]
    fn sixth_custom_is_rejected() {
        let mut vocab = FeelingVocabulary::new();
        for label in ["One", "Two", "Three", "Four", "Five"] {
            vocab.add_custom(EmotionCategory::Pleasant, label).unwrap();
        }

        let err = vocab
            .add_custom(EmotionCategory::Pleasant, "Six")
            .unwrap_err();
        assert_eq!(err.to_string(), "Maximum 5 custom feelings reached");

        // The cap is per category.
        assert!(vocab.add_custom(EmotionCategory::Neutral, "Six").is_ok());
    }

    #[test]
    fn rejects_empty_long_and_emoji() {
        let mut vocab = FeelingVocabulary::new();
        assert_eq!(
            vocab.add_custom(EmotionCategory::Neutral, "   "),
            Err(VocabularyError::Empty)
        );
        assert_eq!(
            vocab.add_custom(EmotionCategory::Neutral, "abcdefghijklmnopqrstu"),
            Err(VocabularyError::TooLong { max: 20 })
        );
        assert_eq!(
            vocab.add_custom(EmotionCategory::Neutral, "meh 😐"),
            Err(VocabularyError::ContainsEmoji)
        );
    }

    #[test]
    fn twenty_characters_is_allowed() {
        let mut vocab = FeelingVocabulary::new();
        assert!(vocab
            .add_custom(EmotionCategory::Neutral, "abcdefghijklmnopqrst")
            .is_ok());
    }

    #[test]
    fn duplicates_are_case_insensitive() {
        let mut vocab = FeelingVocabulary::new();
        assert_eq!(
            vocab.add_custom(EmotionCategory::Unpleasant, "anxious"),
            Err(VocabularyError::Duplicate("anxious".into()))
        );

        vocab.add_custom(EmotionCategory::Unpleasant, "Numb").unwrap();
        assert!(matches!(
            vocab.add_custom(EmotionCategory::Unpleasant, "NUMB"),
            Err(VocabularyError::Duplicate(_))
        ));
    }

    #[test]
    fn hidden_defaults_leave_effective_vocabulary() {
        let mut vocab = FeelingVocabulary::new();
        vocab.hide_default(EmotionCategory::Unpleasant, "Angry").unwrap();
        assert!(!vocab
            .effective(EmotionCategory::Unpleasant)
            .contains(&"Angry".to_string()));

        vocab.unhide_default(EmotionCategory::Unpleasant, "angry");
        assert!(vocab
            .effective(EmotionCategory::Unpleasant)
            .contains(&"Angry".to_string()));
    }

    #[test]
    fn hidden_default_can_return_as_custom() {
        let mut vocab = FeelingVocabulary::new();
        vocab.hide_default(EmotionCategory::Unpleasant, "Sad").unwrap();

        let stored = vocab.add_custom(EmotionCategory::Unpleasant, "sad").unwrap();

        assert_eq!(stored, "sad");
        let effective = vocab.effective(EmotionCategory::Unpleasant);
        assert_eq!(effective.iter().filter(|f| f.eq_ignore_ascii_case("sad")).count(), 1);
    }

    #[test]
    fn unhiding_replaces_custom_of_the_same_name() {
        let mut vocab = FeelingVocabulary::new();
        vocab.hide_default(EmotionCategory::Unpleasant, "Sad").unwrap();
        vocab.add_custom(EmotionCategory::Unpleasant, "sad").unwrap();

        vocab.unhide_default(EmotionCategory::Unpleasant, "Sad");

        assert!(vocab.customs(EmotionCategory::Unpleasant).is_empty());
        let effective = vocab.effective(EmotionCategory::Unpleasant);
        assert_eq!(effective.iter().filter(|f| f.eq_ignore_ascii_case("sad")).count(), 1);
        assert!(effective.contains(&"Sad".to_string()));
    }

    #[test]
    fn hiding_unknown_default_fails() {
        let mut vocab = FeelingVocabulary::new();
        assert!(matches!(
            vocab.hide_default(EmotionCategory::Pleasant, "Nope"),
            Err(VocabularyError::NotFound(_))
        ));
    }

    #[test]
    fn remove_custom_frees_a_slot() {
        let mut vocab = FeelingVocabulary::new();
        vocab.add_custom(EmotionCategory::Neutral, "Meh").unwrap();
        vocab.remove_custom(EmotionCategory::Neutral, "meh").unwrap();
        assert!(vocab.customs(EmotionCategory::Neutral).is_empty());
        assert!(vocab.remove_custom(EmotionCategory::Neutral, "meh").is_err());
    }
}
