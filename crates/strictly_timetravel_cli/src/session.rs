//! Line-oriented presentation layer over the engine.
//!
//! Each input line is one event: a cell click or a history click. After an
//! accepted event the session re-reads the engine's view and labels and
//! re-renders them. Rejected events print the reason and leave the view as
//! it was.

use crate::config::DriverConfig;
use anyhow::{Context, Result};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use strictly_timetravel::{GameEngine, MoveError, ViewSnapshot};
use tracing::{debug, instrument};

const HELP: &str = "\
Commands:
  <0-8> | move <0-8>   mark a cell (0 is top-left, 8 is bottom-right)
  jump <n>             view history entry n (0 is the game start)
  show                 print the current view
  history              print the history entries
  help                 print this message
  quit                 leave the game";

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Cell click.
    Move(usize),
    /// History click.
    Jump(usize),
    /// Re-render the view.
    Show,
    /// Print history labels.
    History,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized command: {:?} (type `help`)", input)]
pub struct CommandError {
    /// The offending line.
    pub input: String,
}

impl SessionCommand {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();
        let invalid = || CommandError {
            input: line.trim().to_string(),
        };

        if words.next().is_some() {
            return Err(invalid());
        }

        let index = |arg: Option<&str>| {
            arg.and_then(|a| a.parse::<usize>().ok())
                .ok_or_else(invalid)
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "move" | "m" => SessionCommand::Move(index(arg)?),
            "jump" | "j" => SessionCommand::Jump(index(arg)?),
            "show" if arg.is_none() => SessionCommand::Show,
            "history" | "h" if arg.is_none() => SessionCommand::History,
            "help" | "?" if arg.is_none() => SessionCommand::Help,
            "quit" | "q" | "exit" if arg.is_none() => SessionCommand::Quit,
            other if arg.is_none() => {
                SessionCommand::Move(other.parse::<usize>().map_err(|_| invalid())?)
            }
            _ => return Err(invalid()),
        };
        Ok(Some(command))
    }
}

/// Terminal session owning one engine.
#[derive(Debug)]
pub struct Session {
    engine: GameEngine,
    config: DriverConfig,
}

impl Session {
    /// Starts a session on a fresh game.
    pub fn new(config: DriverConfig) -> Self {
        Self::with_engine(GameEngine::new(), config)
    }

    /// Starts a session on an existing engine.
    pub fn with_engine(engine: GameEngine, config: DriverConfig) -> Self {
        Self { engine, config }
    }

    /// The engine driven by this session.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        self.render(out)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            match SessionCommand::parse(&line) {
                Ok(Some(SessionCommand::Quit)) => break,
                Ok(Some(command)) => self.dispatch(command, out)?,
                Ok(None) => {}
                Err(e) => writeln!(out, "{e}")?,
            }
            write!(out, "> ")?;
            out.flush()?;
        }

        writeln!(out)?;
        Ok(())
    }

    /// Applies one command and writes the result.
    #[instrument(skip(self, out))]
    pub fn dispatch(&mut self, command: SessionCommand, out: &mut impl Write) -> Result<()> {
        let outcome: Result<(), MoveError> = match command {
            SessionCommand::Move(cell) => self.engine.apply_index(cell).map(|placed| {
                debug!(%placed, "Cell clicked");
            }),
            SessionCommand::Jump(index) => self.engine.jump_to(index),
            SessionCommand::Show => Ok(()),
            SessionCommand::History => return self.render_history(out),
            SessionCommand::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(());
            }
            SessionCommand::Quit => return Ok(()),
        };

        match outcome {
            Ok(()) => self.render(out),
            Err(e) => {
                writeln!(out, "{e}")?;
                Ok(())
            }
        }
    }

    /// Writes the current view, and the history when configured.
    pub fn render(&self, out: &mut impl Write) -> Result<()> {
        if *self.config.json() {
            let json = ViewSnapshot::capture(&self.engine)
                .to_json()
                .context("Failed to serialize view")?;
            writeln!(out, "{json}")?;
            return Ok(());
        }

        let view = self.engine.current_view();
        writeln!(out, "{}", view.board)?;
        writeln!(out, "{}", view.status)?;
        if *self.config.show_history() {
            self.render_history(out)?;
        }
        Ok(())
    }

    fn render_history(&self, out: &mut impl Write) -> Result<()> {
        for label in self.engine.history_labels() {
            let marker = if label.is_current { '*' } else { ' ' };
            writeln!(out, "{marker} {}. {label}", label.index)?;
        }
        Ok(())
    }
}
