//! Coping strategy catalog entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::assessment::DomainSeverity;
use crate::domain::foundation::{StrategyId, ValidationError};

/// Intervention category a strategy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyTag {
    Breathing,
    Grounding,
    Journaling,
    Mindfulness,
    Exercise,
    Sleep,
    Social,
    Creative,
    Therapy,
}

impl StrategyTag {
    pub const ALL: [StrategyTag; 9] = [
        StrategyTag::Breathing,
        StrategyTag::Grounding,
        StrategyTag::Journaling,
        StrategyTag::Mindfulness,
        StrategyTag::Exercise,
        StrategyTag::Sleep,
        StrategyTag::Social,
        StrategyTag::Creative,
        StrategyTag::Therapy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyTag::Breathing => "BREATHING",
            StrategyTag::Grounding => "GROUNDING",
            StrategyTag::Journaling => "JOURNALING",
            StrategyTag::Mindfulness => "MINDFULNESS",
            StrategyTag::Exercise => "EXERCISE",
            StrategyTag::Sleep => "SLEEP",
            StrategyTag::Social => "SOCIAL",
            StrategyTag::Creative => "CREATIVE",
            StrategyTag::Therapy => "THERAPY",
        }
    }
}

impl fmt::Display for StrategyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StrategyTag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyTag::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_format("tag", format!("unknown tag '{}'", s)))
    }
}

/// Reference to an uploaded image or video held in object storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub url: String,
    pub content_type: Option<String>,
}

/// A catalog entry, curated by admins and readable by everyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopingStrategy {
    pub id: StrategyId,
    pub title: String,
    pub author: String,
    pub description: String,
    pub instructions: String,
    /// Ordered; the first tag is the primary intervention category.
    pub tags: Vec<StrategyTag>,
    /// Lowest severity at which the strategy may be surfaced. `None` = always.
    pub min_severity: Option<DomainSeverity>,
    #[serde(default)]
    pub media: Vec<MediaRef>,
}

impl CopingStrategy {
    /// Creates a strategy with empty descriptive text; useful for seeding.
    pub fn new(id: StrategyId, title: impl Into<String>, tags: Vec<StrategyTag>) -> Self {
        Self {
            id,
            title: title.into(),
            author: String::new(),
            description: String::new(),
            instructions: String::new(),
            tags,
            min_severity: None,
            media: Vec::new(),
        }
    }

    pub fn with_min_severity(mut self, severity: DomainSeverity) -> Self {
        self.min_severity = Some(severity);
        self
    }

    pub fn with_description(
        mut self,
        author: impl Into<String>,
        description: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        self.author = author.into();
        self.description = description.into();
        self.instructions = instructions.into();
        self
    }

    /// First tag, used for diversity selection.
    pub fn primary_tag(&self) -> Option<StrategyTag> {
        self.tags.first().copied()
    }

    /// Severity floor check: absent floor, or floor at or below `severity`.
    pub fn is_eligible_at(&self, severity: DomainSeverity) -> bool {
        self.min_severity.map_or(true, |floor| floor <= severity)
    }
}
