//! Content moderation status.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Visibility of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModerationStatus {
    /// Shown to everyone. Every item starts here.
    #[default]
    Visible,

    /// Marked by automatic classification, awaiting a privileged decision.
    Flagged,

    /// Removed by its owner or by a privileged takedown.
    Hidden,
}

impl ModerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationStatus::Visible => "Visible",
            ModerationStatus::Flagged => "Flagged",
            ModerationStatus::Hidden => "Hidden",
        }
    }

    /// Only `Visible` items appear in feeds and accept votes.
    pub fn is_publicly_visible(&self) -> bool {
        *self == ModerationStatus::Visible
    }
}

impl StateMachine for ModerationStatus {
    fn valid_transitions(&self) -> &'static [Self] {
        use ModerationStatus::*;
        match self {
            Visible => &[Flagged, Hidden],
            Flagged => &[Visible, Hidden],
            Hidden => &[Visible],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_items_are_visible() {
        assert_eq!(ModerationStatus::default(), ModerationStatus::Visible);
    }

    #[test]
    fn hidden_never_returns_to_flagged() {
        assert!(!ModerationStatus::Hidden.can_transition_to(&ModerationStatus::Flagged));
        assert!(ModerationStatus::Hidden.can_transition_to(&ModerationStatus::Visible));
    }

    #[test]
    fn flagged_resolves_either_way() {
        let flagged = ModerationStatus::Flagged;
        assert_eq!(flagged.transition_to(ModerationStatus::Visible), Ok(ModerationStatus::Visible));
        assert_eq!(flagged.transition_to(ModerationStatus::Hidden), Ok(ModerationStatus::Hidden));
    }

    #[test]
    fn self_transitions_are_rejected() {
        for status in [
            ModerationStatus::Visible,
            ModerationStatus::Flagged,
            ModerationStatus::Hidden,
        ] {
            assert!(!status.can_transition_to(&status));
        }
    }

    #[test]
    fn only_visible_is_publicly_visible() {
        assert!(ModerationStatus::Visible.is_publicly_visible());
        assert!(!ModerationStatus::Flagged.is_publicly_visible());
        assert!(!ModerationStatus::Hidden.is_publicly_visible());
    }
}
