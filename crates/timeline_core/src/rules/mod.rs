//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from
//! board storage so the history engine can consult them for any snapshot.

pub mod win;

pub use win::{LINES, Outcome, evaluate};
