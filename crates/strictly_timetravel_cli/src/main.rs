//! Strictly Timetravel - terminal driver
//!
//! Plays tic-tac-toe against the engine from a terminal, with jumps through
//! the move history.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::DriverConfig;
use session::Session;
use strictly_timetravel::{GameEngine, Position};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = DriverConfig::load(&cli.config)?.with_json(cli.json);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { cells, jump } => run_replay(config, &cells, jump),
    }
}

/// Interactive game over stdin/stdout.
#[instrument(skip(config))]
fn run_play(config: DriverConfig) -> Result<()> {
    info!("Starting interactive game");
    let mut session = Session::new(config);
    let stdin = std::io::stdin();
    session.run(stdin.lock(), &mut std::io::stdout())?;

    let engine = session.engine();
    info!(entries = engine.history().len(), status = %engine.status(), "Game ended");
    Ok(())
}

/// Plays `cells` from a fresh game, optionally jumps, and prints the view.
#[instrument(skip(config))]
fn run_replay(config: DriverConfig, cells: &[usize], jump: Option<usize>) -> Result<()> {
    let positions = cells
        .iter()
        .map(|&cell| Position::try_from(cell))
        .collect::<Result<Vec<_>, _>>()?;

    let mut engine = GameEngine::replay(&positions).context("Replay rejected")?;
    if let Some(index) = jump {
        engine.jump_to(index).context("Jump rejected")?;
    }

    info!(moves = positions.len(), view = engine.view_pointer(), "Replay finished");
    Session::with_engine(engine, config).render(&mut std::io::stdout())
}
