//! Move history with time travel.
//!
//! The history is a linear timeline of board snapshots plus a cursor
//! naming the displayed one. Playing a move from an earlier snapshot
//! discards everything after the cursor before appending.

use super::invariants::{InvariantSet, TimelineInvariants};
use super::position::Position;
use super::rules::{Outcome, evaluate};
use super::status::{Status, TimelineEntry};
use super::types::{Board, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Why a move left the history unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum IgnoredMove {
    /// The cell index is not on the board.
    #[display("Cell {_0} is off the board")]
    OutOfRange(usize),
    /// The displayed board already has a winner.
    #[display("{_0} has already won")]
    GameWon(Player),
    /// The square is taken.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),
}

/// What happened when a move was attempted.
///
/// Ignored moves are a normal part of play (clicking a taken square), so
/// this is an observation rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed and the cursor advanced to `step`.
    Applied {
        /// Where the mark went.
        position: Position,
        /// Whose mark it was.
        player: Player,
        /// Cursor after the move.
        step: usize,
    },
    /// Nothing changed.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// True if the move changed the history.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Linear timeline of board snapshots with a movable cursor.
///
/// The player to move is derived from the cursor's parity rather than
/// stored, so it cannot drift out of step after a jump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct MoveHistory {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl MoveHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Builds a history without validating it.
    pub(crate) fn from_parts_unchecked(snapshots: Vec<Board>, cursor: usize) -> Self {
        Self { snapshots, cursor }
    }

    /// Plays the next mark at cell `index` (0-8) of the displayed board.
    ///
    /// Out-of-range cells, occupied squares and boards that already have a
    /// winner leave the history unchanged.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.place(pos),
            None => {
                debug!(index, "Ignoring move off the board");
                MoveOutcome::Ignored(IgnoredMove::OutOfRange(index))
            }
        }
    }

    /// Plays the next mark at `pos` of the displayed board.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn place(&mut self, pos: Position) -> MoveOutcome {
        let current = *self.current();

        if let Outcome::Winner(winner) = evaluate(&current) {
            debug!(%winner, "Ignoring move after a win");
            return MoveOutcome::Ignored(IgnoredMove::GameWon(winner));
        }

        if !current.is_empty(pos) {
            debug!(position = %pos, "Ignoring move on occupied square");
            return MoveOutcome::Ignored(IgnoredMove::SquareOccupied(pos));
        }

        let player = self.to_move();
        let discarded = self.snapshots.len() - (self.cursor + 1);
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(current.with_mark(pos, player));
        self.cursor = self.snapshots.len() - 1;

        debug_assert!(
            TimelineInvariants::check_all(&*self).is_ok(),
            "move broke history invariants"
        );

        info!(position = %pos, %player, step = self.cursor, discarded, "Move applied");
        MoveOutcome::Applied {
            position: pos,
            player,
            step: self.cursor,
        }
    }

    /// Moves the cursor to `step`.
    ///
    /// Returns false, leaving the cursor where it was, if `step` does not
    /// name a snapshot. The snapshots themselves are never touched.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.snapshots.len() {
            debug!("Ignoring jump past the end of the history");
            return false;
        }
        self.cursor = step;
        debug!(to_move = %self.to_move(), "Cursor moved");
        true
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Every snapshot on the timeline, starting with the empty board.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the history has no snapshots.
    ///
    /// A history always keeps its opening board, so this holds only for a
    /// value that breaks the timeline invariants.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// True when the cursor is on the newest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    /// Player who moves next from the displayed snapshot.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.cursor)
    }

    /// Evaluation of the displayed snapshot.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current())
    }

    /// Status line for the displayed snapshot.
    pub fn status(&self) -> Status {
        match self.outcome().winner() {
            Some(player) => Status::Winner(player),
            None => Status::InProgress {
                next: self.to_move(),
            },
        }
    }

    /// One jump-to entry per snapshot.
    pub fn entries(&self) -> Vec<TimelineEntry> {
        (0..self.snapshots.len())
            .map(|step| TimelineEntry::new(step, step == self.cursor))
            .collect()
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form of a [`MoveHistory`], validated on the way in.
#[derive(Debug, Clone, Deserialize)]
struct HistoryRecord {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl TryFrom<HistoryRecord> for MoveHistory {
    type Error = HistoryError;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        let history = Self::from_parts_unchecked(record.snapshots, record.cursor);
        TimelineInvariants::check_all(&history).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            HistoryError::new(format!("Invalid history: {}", descriptions))
        })?;
        Ok(history)
    }
}

/// A serialized history that could not be restored.
#[derive(Debug, Clone, Display, Error)]
#[display("History error: {} at {}:{}", message, file, line)]
pub struct HistoryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl HistoryError {
    /// Creates a new history error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
