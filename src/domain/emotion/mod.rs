//! Emotion module - diary entries, feeling vocabularies and frequency profiles.

mod entry;
mod profile;
mod vocabulary;

pub use entry::{EmotionCategory, EmotionEntry};
pub use profile::EmotionProfile;
pub use vocabulary::{
    default_feelings, FeelingVocabulary, VocabularyError, MAX_CUSTOM_FEELINGS, MAX_FEELING_LEN,
};
