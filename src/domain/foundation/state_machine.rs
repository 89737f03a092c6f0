//! Validated transitions for lifecycle status enums.

use super::ValidationError;

/// A status enum with a fixed transition table.
///
/// Implementors list the targets reachable from each state; checking and
/// applying a transition are derived from that table.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug + 'static {
    /// Targets reachable from `self`, self-loops included.
    fn valid_transitions(&self) -> &'static [Self];

    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Returns `target` if the table allows it.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if !self.can_transition_to(&target) {
            return Err(ValidationError::invalid_format(
                "status",
                format!("{:?} cannot move to {:?}", self, target),
            ));
        }
        Ok(target)
    }

    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Ticket {
        Open,
        Closed,
        Archived,
    }

    impl StateMachine for Ticket {
        fn valid_transitions(&self) -> &'static [Self] {
            match self {
                Ticket::Open => &[Ticket::Closed],
                Ticket::Closed => &[Ticket::Open, Ticket::Archived],
                Ticket::Archived => &[],
            }
        }
    }

    #[test]
    fn listed_target_is_returned() {
        assert_eq!(Ticket::Closed.transition_to(Ticket::Archived), Ok(Ticket::Archived));
    }

    #[test]
    fn unlisted_target_is_rejected_with_both_states() {
        let err = Ticket::Open.transition_to(Ticket::Archived).unwrap_err();
        assert_eq!(
            err,
            ValidationError::invalid_format("status", "Open cannot move to Archived")
        );
    }

    #[test]
    fn terminal_means_no_targets() {
        assert!(Ticket::Archived.is_terminal());
        assert!(!Ticket::Closed.is_terminal());
        assert!(!Ticket::Archived.can_transition_to(&Ticket::Open));
    }
}
