//! Display-facing views derived from a move history.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Status line for the snapshot under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The displayed board has a winner.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// No winner yet; `next` moves from the displayed board.
    #[display("Next player: {next}")]
    InProgress {
        /// Player to move.
        next: Player,
    },
}

impl Status {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(*player),
            Status::InProgress { .. } => None,
        }
    }
}

/// One row of the jump-to list, one per snapshot in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TimelineEntry {
    /// Index into the history.
    step: usize,
    /// Button text.
    label: String,
    /// Whether the cursor is on this entry.
    is_current: bool,
}

impl TimelineEntry {
    /// Creates the entry for `step`.
    pub fn new(step: usize, is_current: bool) -> Self {
        Self {
            step,
            label: Self::label_for(step),
            is_current,
        }
    }

    /// Button text for `step`.
    pub fn label_for(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{step}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(
            Status::InProgress { next: Player::O }.to_string(),
            "Next player: O"
        );
    }

    #[test]
    fn test_entry_labels() {
        assert_eq!(TimelineEntry::new(0, true).label(), "Go to game start");
        assert_eq!(TimelineEntry::new(3, false).label(), "Go to move #3");
        assert!(!*TimelineEntry::new(3, false).is_current());
    }
}
