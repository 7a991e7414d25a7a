//! Strictly Timetravel - tic-tac-toe with replayable history
//!
//! A pure game-state engine: no rendering, no I/O. A presentation layer
//! feeds it cell clicks and history clicks, then re-reads the view.
//!
//! # Architecture
//!
//! - **Engine**: owns the board history and the view pointer
//! - **Rules**: win and draw detection over a single board
//! - **Invariants**: history properties checked after every move
//! - **View**: read-only copies for presentation layers
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameEngine, Mark, Status};
//!
//! # fn example() -> Result<(), strictly_timetravel::MoveError> {
//! let mut engine = GameEngine::new();
//! engine.apply_index(4)?;
//! engine.apply_index(0)?;
//!
//! // Travel back to the first move and branch from there.
//! engine.jump_to(1)?;
//! engine.apply_index(8)?;
//! assert_eq!(engine.history().len(), 3);
//! assert_eq!(engine.current_view().status, Status::InProgress(Mark::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod engine;
mod history;
mod invariants;
mod position;
mod rules;
mod status;
mod types;
mod view;

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, Cell, Mark};

// Crate-level exports - Actions
pub use action::{Move, MoveError};

// Crate-level exports - Engine
pub use engine::{GameEngine, turn_for};
pub use history::{GameHistory, HistoryEntry, HistoryLabel};
pub use status::Status;
pub use view::{GameView, ViewSnapshot};

// Crate-level exports - Rules
pub use rules::{LINES, WinningLine, evaluate, is_draw, is_full, winning_line};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingMarksInvariant, HistoryInvariants, InitialBoardInvariant, Invariant,
    InvariantSet, InvariantViolation, SingleCellDeltaInvariant, assert_invariants,
};
