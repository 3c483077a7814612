//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Terminal tic-tac-toe with a time-travel move list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "timeline.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play,

    /// Apply cell indices in order and print the result
    Replay {
        /// Cell indices (0-8), row-major
        moves: Vec<usize>,

        /// Print the serialized history instead of the board
        #[arg(long)]
        json: bool,
    },
}
