//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold for every reachable
//! history. They are checked in debug builds after each applied move, and
//! always when a history is rebuilt from serialized form.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        collect::<S, I4>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_markers;
pub mod no_moves_after_win;
pub mod non_empty_timeline;
pub mod single_cell_growth;

pub use alternating_markers::AlternatingMarkersInvariant;
pub use no_moves_after_win::NoMovesAfterWinInvariant;
pub use non_empty_timeline::NonEmptyTimelineInvariant;
pub use single_cell_growth::SingleCellGrowthInvariant;

/// All move-history invariants as a composable set.
pub type TimelineInvariants = (
    NonEmptyTimelineInvariant,
    SingleCellGrowthInvariant,
    AlternatingMarkersInvariant,
    NoMovesAfterWinInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, MoveHistory, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(TimelineInvariants::check_all(&MoveHistory::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut history = MoveHistory::new();
        for index in [4, 0, 8] {
            history.apply_move(index);
        }
        history.jump_to(1);
        history.apply_move(2);
        assert!(TimelineInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let first = Board::new().with_mark(Position::Center, Player::O);
        let history = MoveHistory::from_parts_unchecked(vec![Board::new(), first], 1);

        let violations = TimelineInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            AlternatingMarkersInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (NonEmptyTimelineInvariant, SingleCellGrowthInvariant);
        assert!(TwoInvariants::check_all(&MoveHistory::new()).is_ok());
    }

    #[test]
    fn test_three_invariants_as_set() {
        type ShapeInvariants = (
            NonEmptyTimelineInvariant,
            SingleCellGrowthInvariant,
            AlternatingMarkersInvariant,
        );
        let history = MoveHistory::from_parts_unchecked(Vec::new(), 0);
        let violations = ShapeInvariants::check_all(&history).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(NonEmptyTimelineInvariant::description())]
        );
    }
}
