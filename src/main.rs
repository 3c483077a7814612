//! Tic-tac-toe timeline - terminal entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_timeline::{AppConfig, Cli, Command, Session, render_view};
use timeline_core::MoveHistory;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(config),
        Command::Replay { moves, json } => run_replay(config, &moves, json),
    }
}

/// Run the interactive game on stdin/stdout
fn run_play(config: AppConfig) -> Result<()> {
    info!("Starting interactive game");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(config).run(stdin.lock(), stdout.lock())
}

/// Apply a list of moves and print the outcome
#[instrument(skip(config))]
fn run_replay(config: AppConfig, moves: &[usize], json: bool) -> Result<()> {
    let mut history = MoveHistory::new();
    for &index in moves {
        history.apply_move(index);
    }
    info!(winner = ?history.status().winner(), steps = history.len() - 1, "Replay finished");

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&history).context("Failed to serialize history")?
        );
    } else {
        println!("{}", render_view(&history, *config.number_empty_squares()));
    }
    Ok(())
}
