//! Terminal front-end for tic-tac-toe with time travel.
//!
//! The game logic lives in [`timeline_core`]; this crate maps typed
//! commands onto the move history and renders it as text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod session;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use render::{render_moves, render_view};
pub use session::{CommandError, Input, Session};
