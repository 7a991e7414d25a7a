//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::evaluate;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// A full board with no winning line.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && evaluate(board).is_none()
}
