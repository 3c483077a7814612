//! Timeline shape invariant: starts empty, never vanishes, cursor in range.

use super::super::{MoveHistory, Square};
use super::Invariant;

/// Invariant: the history holds at least the opening board, which is
/// empty, and the cursor indexes an existing snapshot.
pub struct NonEmptyTimelineInvariant;

impl Invariant<MoveHistory> for NonEmptyTimelineInvariant {
    fn holds(history: &MoveHistory) -> bool {
        let Some(first) = history.snapshots().first() else {
            return false;
        };

        first.squares().iter().all(|s| *s == Square::Empty)
            && history.cursor() < history.snapshots().len()
    }

    fn description() -> &'static str {
        "History starts from an empty board and the cursor is in range"
    }
}
