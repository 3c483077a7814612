//! Terminal-win invariant: a won board is the end of its timeline.

use super::super::{MoveHistory, evaluate};
use super::Invariant;

/// Invariant: only the last snapshot may have a winner.
///
/// Moves on a won board are ignored, so no reachable history continues
/// past one.
pub struct NoMovesAfterWinInvariant;

impl Invariant<MoveHistory> for NoMovesAfterWinInvariant {
    fn holds(history: &MoveHistory) -> bool {
        match history.snapshots().split_last() {
            Some((_, earlier)) => earlier
                .iter()
                .all(|board| evaluate(board).winner().is_none()),
            None => true,
        }
    }

    fn description() -> &'static str {
        "No moves follow a win"
    }
}
