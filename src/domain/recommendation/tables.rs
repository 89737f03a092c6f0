//! Static lookup tables driving both recommenders.

use crate::domain::assessment::DomainSeverity;

use super::StrategyTag;

/// Tags considered most appropriate at each severity, most preferred first.
pub fn preferred_tags(severity: DomainSeverity) -> &'static [StrategyTag] {
    use StrategyTag::*;
    match severity {
        DomainSeverity::None => &[Mindfulness, Exercise, Creative],
        DomainSeverity::Mild => &[Breathing, Mindfulness, Journaling],
        DomainSeverity::Moderate => &[Breathing, Grounding, Journaling],
        DomainSeverity::ModeratelySevere => &[Grounding, Journaling, Therapy],
        DomainSeverity::Severe => &[Therapy, Grounding, Social],
    }
}

/// Lower-cased feelings a tag is emotionally appropriate for.
pub fn allowed_feelings(tag: StrategyTag) -> &'static [&'static str] {
    match tag {
        StrategyTag::Breathing => &["anxious", "stressed", "overwhelmed", "restless", "angry"],
        StrategyTag::Grounding => &["anxious", "overwhelmed", "afraid", "restless", "numb"],
        StrategyTag::Journaling => &["sad", "confused", "lonely", "pensive", "guilty"],
        StrategyTag::Mindfulness => &["stressed", "irritable", "overwhelmed", "distracted"],
        StrategyTag::Exercise => &["sad", "bored", "stressed", "angry", "irritable"],
        StrategyTag::Sleep => &["tired", "drained", "restless", "exhausted"],
        StrategyTag::Social => &["lonely", "sad", "bored", "isolated"],
        StrategyTag::Creative => &["bored", "curious", "sad", "stuck"],
        StrategyTag::Therapy => &["guilty", "hopeless", "afraid", "trauma"],
    }
}
