//! Emotion entry reader port (read side).

use async_trait::async_trait;

use crate::domain::emotion::EmotionEntry;
use crate::domain::foundation::{DomainError, Timestamp, UserId};

/// Read access to a user's emotion entries.
#[async_trait]
pub trait EmotionEntryReader: Send + Sync {
    /// Entries authored by `user` created at or after `since`, oldest first.
    async fn entries_since(
        &self,
        user: &UserId,
        since: Timestamp,
    ) -> Result<Vec<EmotionEntry>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_entry_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn EmotionEntryReader) {}
    }
}
