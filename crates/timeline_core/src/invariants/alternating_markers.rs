//! Alternating marker invariant: X, O, X, O, ...

use super::super::{MoveHistory, Player};
use super::Invariant;

/// Invariant: the mark added at step `k` belongs to X when `k - 1` is
/// even and to O otherwise.
///
/// Steps whose change is not a single new mark are left to
/// [`SingleCellGrowthInvariant`](super::SingleCellGrowthInvariant).
pub struct AlternatingMarkersInvariant;

impl Invariant<MoveHistory> for AlternatingMarkersInvariant {
    fn holds(history: &MoveHistory) -> bool {
        let mut expected = Player::X;
        history.snapshots().windows(2).all(|pair| {
            let matches = pair[1]
                .changes_from(&pair[0])
                .iter()
                .all(|pos| pair[1].get(*pos).player() == Some(expected));
            expected = expected.opponent();
            matches
        })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
