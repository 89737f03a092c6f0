//! Severity classification for screening questionnaires.
//!
//! Thresholds are ordered constant tables so boundaries can be tested
//! independently of the lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported screening questionnaires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssessmentType {
    #[serde(rename = "PHQ-9")]
    Phq9,
    #[serde(rename = "GAD-7")]
    Gad7,
}

impl AssessmentType {
    /// Number of questions; each is answered 0..=3.
    pub fn question_count(&self) -> usize {
        match self {
            AssessmentType::Phq9 => 9,
            AssessmentType::Gad7 => 7,
        }
    }

    /// Highest attainable score.
    pub fn max_score(&self) -> u32 {
        self.question_count() as u32 * MAX_ANSWER as u32
    }

    /// Upper-inclusive score bounds; scores above the last row are `Severe`.
    pub fn thresholds(&self) -> &'static [(u32, ClinicalSeverity)] {
        match self {
            AssessmentType::Phq9 => PHQ9_THRESHOLDS,
            AssessmentType::Gad7 => GAD7_THRESHOLDS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentType::Phq9 => "PHQ-9",
            AssessmentType::Gad7 => "GAD-7",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Highest per-question answer.
pub const MAX_ANSWER: u8 = 3;

const PHQ9_THRESHOLDS: &[(u32, ClinicalSeverity)] = &[
    (4, ClinicalSeverity::Minimal),
    (9, ClinicalSeverity::Mild),
    (14, ClinicalSeverity::Moderate),
    (19, ClinicalSeverity::ModeratelySevere),
];

// GAD-7 has no "Moderately Severe" tier.
const GAD7_THRESHOLDS: &[(u32, ClinicalSeverity)] = &[
    (4, ClinicalSeverity::Minimal),
    (9, ClinicalSeverity::Mild),
    (14, ClinicalSeverity::Moderate),
];

/// Clinical severity vocabulary, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClinicalSeverity {
    Minimal,
    Mild,
    Moderate,
    #[serde(rename = "Moderately Severe")]
    ModeratelySevere,
    Severe,
}

impl ClinicalSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ClinicalSeverity::Minimal => "Minimal",
            ClinicalSeverity::Mild => "Mild",
            ClinicalSeverity::Moderate => "Moderate",
            ClinicalSeverity::ModeratelySevere => "Moderately Severe",
            ClinicalSeverity::Severe => "Severe",
        }
    }
}

impl fmt::Display for ClinicalSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Label that is not part of the clinical vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown severity label '{0}'")]
pub struct UnknownSeverity(pub String);

impl FromStr for ClinicalSeverity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimal" => Ok(ClinicalSeverity::Minimal),
            "mild" => Ok(ClinicalSeverity::Mild),
            "moderate" => Ok(ClinicalSeverity::Moderate),
            "moderately severe" => Ok(ClinicalSeverity::ModeratelySevere),
            "severe" => Ok(ClinicalSeverity::Severe),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

/// Coping-domain severity used to gate strategies.
///
/// Strict total order: `None < Mild < Moderate < ModeratelySevere < Severe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainSeverity {
    None,
    Mild,
    Moderate,
    #[serde(rename = "MODERATELY SEVERE")]
    ModeratelySevere,
    Severe,
}

impl DomainSeverity {
    /// Every tier in ascending order.
    pub const ALL: [DomainSeverity; 5] = [
        DomainSeverity::None,
        DomainSeverity::Mild,
        DomainSeverity::Moderate,
        DomainSeverity::ModeratelySevere,
        DomainSeverity::Severe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainSeverity::None => "NONE",
            DomainSeverity::Mild => "MILD",
            DomainSeverity::Moderate => "MODERATE",
            DomainSeverity::ModeratelySevere => "MODERATELY SEVERE",
            DomainSeverity::Severe => "SEVERE",
        }
    }
}

impl fmt::Display for DomainSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DomainSeverity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainSeverity::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}

impl From<ClinicalSeverity> for DomainSeverity {
    fn from(clinical: ClinicalSeverity) -> Self {
        match clinical {
            ClinicalSeverity::Minimal => DomainSeverity::None,
            ClinicalSeverity::Mild => DomainSeverity::Mild,
            ClinicalSeverity::Moderate => DomainSeverity::Moderate,
            ClinicalSeverity::ModeratelySevere => DomainSeverity::ModeratelySevere,
            ClinicalSeverity::Severe => DomainSeverity::Severe,
        }
    }
}

/// Maps a score onto its clinical tier.
///
/// Callers validate `score <= kind.max_score()` upstream; scores are always
/// sums of bounded answers.
pub fn score_to_severity(kind: AssessmentType, score: u32) -> ClinicalSeverity {
    kind.thresholds()
        .iter()
        .find(|(upper, _)| score <= *upper)
        .map(|(_, severity)| *severity)
        .unwrap_or(ClinicalSeverity::Severe)
}

/// Maps a stored clinical label onto the coping-domain vocabulary.
///
/// Labels outside the clinical vocabulary yield `UnknownSeverity`.
pub fn to_domain_severity(clinical_label: &str) -> Result<DomainSeverity, UnknownSeverity> {
    clinical_label.parse::<ClinicalSeverity>().map(DomainSeverity::from)
}
