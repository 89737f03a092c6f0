//! Emotion profile - feeling frequency aggregated over a user's entries.

use std::collections::HashMap;

use serde::Serialize;

use super::EmotionEntry;
use crate::domain::foundation::Timestamp;

/// Occurrence count per lower-cased feeling label.
///
/// Iteration order is first-seen order, which is also the tie-break used by
/// [`EmotionProfile::dominant_feeling`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmotionProfile {
    counts: Vec<(String, u32)>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl EmotionProfile {
    /// Builds a profile from entries in the order given.
    ///
    /// Each entry contributes at most once per distinct feeling it lists.
    /// Empty input yields an empty profile.
    pub fn build<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a EmotionEntry>,
    {
        let mut profile = Self::default();
        for entry in entries {
            let mut seen_in_entry: Vec<String> = Vec::new();
            for feeling in entry.feelings() {
                let key = feeling.trim().to_lowercase();
                if key.is_empty() || seen_in_entry.contains(&key) {
                    continue;
                }
                profile.increment(&key);
                seen_in_entry.push(key);
            }
        }
        profile
    }

    /// Builds a profile from entries created within the trailing `days` before `now`.
    pub fn from_window(entries: &[EmotionEntry], now: Timestamp, days: i64) -> Self {
        let since = now.minus_days(days);
        Self::build(
            entries
                .iter()
                .filter(|e| !e.created_at.is_before(&since) && !e.created_at.is_after(&now)),
        )
    }

    fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.counts.len());
                self.counts.push((key.to_string(), 1));
            }
        }
    }

    /// Feeling with the highest count; first-seen wins ties.
    pub fn dominant_feeling(&self) -> Option<&str> {
        let mut best: Option<&(String, u32)> = None;
        for pair in &self.counts {
            match best {
                Some((_, c)) if pair.1 <= *c => {}
                _ => best = Some(pair),
            }
        }
        best.map(|(f, _)| f.as_str())
    }

    /// Count for a feeling, matched case-insensitively.
    pub fn count(&self, feeling: &str) -> u32 {
        self.index
            .get(&feeling.to_lowercase())
            .map(|&i| self.counts[i].1)
            .unwrap_or(0)
    }

    /// Returns true if the feeling occurs at least once.
    pub fn contains(&self, feeling: &str) -> bool {
        self.count(feeling) > 0
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `(feeling, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(f, c)| (f.as_str(), *c))
    }
}
