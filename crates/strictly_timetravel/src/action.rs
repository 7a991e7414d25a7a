//! Move actions and the errors that reject them.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A mark placed at a position by an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Error returned when the engine rejects an operation.
///
/// Every variant leaves the engine state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already marked", _0)]
    AlreadyMarked(Position),

    /// A winning line already exists on the viewed board.
    #[display("Game is already over: {} has won", _0)]
    GameOver(Mark),

    /// The history index does not name an entry.
    #[display("Move {} is out of range (history has {} entries)", index, len)]
    OutOfRange {
        /// Requested history index.
        index: usize,
        /// Number of history entries.
        len: usize,
    },

    /// A raw cell index outside 0-8.
    #[display("Cell index {} is not on the board (expected 0-8)", _0)]
    InvalidCell(usize),
}

impl std::error::Error for MoveError {}
