//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with replayable history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with time travel through the move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(long, global = true, default_value = "strictly_timetravel.toml")]
    pub config: PathBuf,

    /// Print views as JSON instead of a text grid
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play,

    /// Play the given cells (0-8) from a fresh game and print the result
    Replay {
        /// Cell indices in move order
        cells: Vec<usize>,

        /// History entry to view after the moves are played
        #[arg(long)]
        jump: Option<usize>,
    },
}
