//! Growth invariant: each snapshot adds exactly one mark to its predecessor.

use super::super::{MoveHistory, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square, which
/// went from empty to occupied.
///
/// Marks are never overwritten or removed along a timeline.
pub struct SingleCellGrowthInvariant;

impl Invariant<MoveHistory> for SingleCellGrowthInvariant {
    fn holds(history: &MoveHistory) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            match after.changes_from(before).as_slice() {
                [pos] => before.get(*pos) == Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Position};

    #[test]
    fn test_played_history_holds() {
        let mut history = MoveHistory::new();
        for index in [0, 4, 8, 2] {
            history.apply_move(index);
        }
        assert!(SingleCellGrowthInvariant::holds(&history));
    }

    #[test]
    fn test_two_marks_at_once_violates() {
        let jump = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O);
        let history = MoveHistory::from_parts_unchecked(vec![Board::new(), jump], 1);
        assert!(!SingleCellGrowthInvariant::holds(&history));
    }

    #[test]
    fn test_overwrite_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let overwritten = first.with_mark(Position::Center, Player::O);
        let history =
            MoveHistory::from_parts_unchecked(vec![Board::new(), first, overwritten], 2);
        assert!(!SingleCellGrowthInvariant::holds(&history));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let history = MoveHistory::from_parts_unchecked(vec![Board::new(), Board::new()], 0);
        assert!(!SingleCellGrowthInvariant::holds(&history));
    }
}
