//! Interactive session: parses command lines and drives the move history.

use crate::config::AppConfig;
use crate::render::{render_moves, render_view};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use timeline_core::{MoveHistory, Position};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  <cell> | play <cell>   place the next mark (cell 0-8 or a label like 'center')
  jump <step>            show the board after <step> moves (0 = game start)
  board | show           redraw the board
  history                list the moves
  json                   print the history as JSON
  help                   show this text
  quit                   leave";

/// A parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the next mark at a cell index.
    Play(usize),
    /// Move the cursor to a step.
    Jump(usize),
    /// Redraw the board.
    Board,
    /// List the moves.
    History,
    /// Print the serialized history.
    Json,
    /// Show the command list.
    Help,
    /// End the session.
    Quit,
}

/// A command line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized command: {input}")]
pub struct CommandError {
    /// The offending line.
    pub input: String,
}

impl CommandError {
    fn new(input: &str) -> Self {
        Self {
            input: input.trim().to_string(),
        }
    }
}

impl Input {
    /// Parses one command line.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let (Some(word), rest) = (words.next(), words.collect::<Vec<_>>().join(" ")) else {
            return Err(CommandError::new(line));
        };

        match (word.to_lowercase().as_str(), rest.as_str()) {
            ("play" | "p", cell) if !cell.is_empty() => Self::parse_cell(cell, line),
            ("jump" | "j", step) => step
                .parse()
                .map(Input::Jump)
                .map_err(|_| CommandError::new(line)),
            ("board" | "show", "") => Ok(Input::Board),
            ("history", "") => Ok(Input::History),
            ("json", "") => Ok(Input::Json),
            ("help" | "?", "") => Ok(Input::Help),
            ("quit" | "exit" | "q", "") => Ok(Input::Quit),
            _ => Self::parse_bare_cell(line),
        }
    }

    /// Cell after `play`: a number or any unambiguous label fragment.
    fn parse_cell(cell: &str, line: &str) -> Result<Self, CommandError> {
        if let Ok(index) = cell.trim().parse::<usize>() {
            return Ok(Input::Play(index));
        }
        Position::from_label_or_number(cell)
            .map(|pos| Input::Play(pos.to_index()))
            .ok_or_else(|| CommandError::new(line))
    }

    /// A line that is only a cell: a number or a full label, so a stray
    /// word never places a mark.
    fn parse_bare_cell(line: &str) -> Result<Self, CommandError> {
        if let Ok(index) = line.trim().parse::<usize>() {
            return Ok(Input::Play(index));
        }
        Position::from_exact_label(line)
            .map(|pos| Input::Play(pos.to_index()))
            .ok_or_else(|| CommandError::new(line))
    }
}

/// One player's-eye session over a [`MoveHistory`].
#[derive(Debug, Clone)]
pub struct Session {
    history: MoveHistory,
    config: AppConfig,
}

impl Session {
    /// Starts a session on an empty board.
    pub fn new(config: AppConfig) -> Self {
        Self {
            history: MoveHistory::new(),
            config,
        }
    }

    /// The history being played.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Renders the full view.
    pub fn view(&self) -> String {
        render_view(&self.history, *self.config.number_empty_squares())
    }

    /// Executes a command, returning the text to show, or `None` to quit.
    ///
    /// Rejected moves and out-of-range jumps redraw the unchanged board.
    #[instrument(skip(self))]
    pub fn execute(&mut self, input: Input) -> anyhow::Result<Option<String>> {
        let text = match input {
            Input::Play(index) => {
                let outcome = self.history.apply_move(index);
                debug!(?outcome, "Move attempted");
                self.view()
            }
            Input::Jump(step) => {
                self.history.jump_to(step);
                self.view()
            }
            Input::Board => self.view(),
            Input::History => render_moves(&self.history),
            Input::Json => serde_json::to_string_pretty(&self.history)?,
            Input::Help => HELP.to_string(),
            Input::Quit => return Ok(None),
        };
        Ok(Some(text))
    }

    /// Reads commands from `input` until it ends or the player quits.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        info!("Session started");
        writeln!(output, "{}", self.view())?;
        write!(output, "{}", self.config.prompt())?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                write!(output, "{}", self.config.prompt())?;
                output.flush()?;
                continue;
            }

            match Input::parse(&line) {
                Ok(command) => match self.execute(command)? {
                    Some(text) => writeln!(output, "{text}")?,
                    None => break,
                },
                Err(e) => writeln!(output, "{e}\n{HELP}")?,
            }
            write!(output, "{}", self.config.prompt())?;
            output.flush()?;
        }

        info!(moves = self.history.len() - 1, "Session ended");
        Ok(())
    }
}
