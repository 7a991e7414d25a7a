//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Immutable 3x3 board snapshot.
///
/// A board never changes after construction. Placing a mark produces a new
/// board via [`Board::with_mark`], so snapshots stored in history are never
/// altered after the fact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from explicit cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// The receiver is left untouched.
    #[instrument(level = "trace")]
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[pos.index()] = Cell::Occupied(mark);
        Self { cells }
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with empty cells shown as their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.cells[idx] {
                    Cell::Empty => write!(f, "{}", idx + 1)?,
                    Cell::Occupied(mark) => write!(f, "{mark}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
