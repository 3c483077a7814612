//! Tic-tac-toe game logic with a time-travel move history.
//!
//! - **Rules**: [`evaluate`] checks a board against the eight winning lines.
//! - **History**: [`MoveHistory`] owns the timeline of snapshots and the
//!   cursor, applies moves and jumps between past boards.
//! - **Invariants**: properties every reachable history satisfies.
//!
//! # Example
//!
//! ```
//! use timeline_core::{MoveHistory, Status, Player};
//!
//! let mut history = MoveHistory::new();
//! history.apply_move(0);
//! assert_eq!(history.status(), Status::InProgress { next: Player::O });
//!
//! history.jump_to(0);
//! history.apply_move(5);
//! assert_eq!(history.len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use history::{HistoryError, IgnoredMove, MoveHistory, MoveOutcome};
pub use position::Position;
pub use rules::{LINES, Outcome, evaluate};
pub use status::{Status, TimelineEntry};
pub use types::{Board, Player, Snapshot, Square};
