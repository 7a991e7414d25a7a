//! Game engine with replayable move history.
//!
//! The engine owns the full list of board snapshots and a view pointer into
//! it. Jumping moves the pointer without touching history; playing a move
//! from an earlier snapshot discards every later snapshot first, so there is
//! only ever one linear future.

use super::action::{Move, MoveError};
use super::history::{GameHistory, HistoryLabel};
use super::invariants::assert_invariants;
use super::rules::evaluate;
use super::status::Status;
use super::view::GameView;
use super::{Board, Mark, Position};
use tracing::{debug, instrument, warn};

/// Mark to move when `view_pointer` moves have been played.
///
/// X moves first, so even pointers belong to X and odd ones to O.
pub fn turn_for(view_pointer: usize) -> Mark {
    if view_pointer % 2 == 0 {
        Mark::X
    } else {
        Mark::X.opponent()
    }
}

/// Tic-tac-toe engine with time travel.
///
/// All mutation goes through [`GameEngine::apply_move`] and
/// [`GameEngine::jump_to`]. Readers get copies or shared borrows only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    history: GameHistory,
    view: usize,
}

impl GameEngine {
    /// Creates an engine holding only the empty board, viewed at move 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: GameHistory::new(),
            view: 0,
        }
    }

    /// Builds an engine by playing `positions` in order from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for &pos in positions {
            engine.apply_move(pos)?;
        }
        Ok(engine)
    }

    /// Places the next mark at `pos` on the viewed board.
    ///
    /// On success the history is truncated to the viewed entry, the new
    /// board is appended, and the view jumps to it.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the viewed board already has a winning
    ///   line, whatever the target cell.
    /// - [`MoveError::AlreadyMarked`] if the target cell is occupied.
    ///
    /// State is unchanged on error.
    #[instrument(skip(self), fields(view = self.view, len = self.history.len()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<Move, MoveError> {
        let current = *self.current_board();

        if let Some(winner) = evaluate(&current) {
            warn!(%winner, "Move rejected: game is over");
            return Err(MoveError::GameOver(winner));
        }

        if !current.is_empty(pos) {
            warn!(position = %pos, "Move rejected: cell already marked");
            return Err(MoveError::AlreadyMarked(pos));
        }

        let placed = Move::new(self.turn(), pos);
        let next = current.with_mark(pos, placed.mark);
        self.view = self.history.branch_from(self.view, next, placed);

        debug!(%placed, view = self.view, "Move applied");
        assert_invariants(&self.history);

        Ok(placed)
    }

    /// Boundary entry point for a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidCell`] for indices past 8, otherwise as
    /// [`GameEngine::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, cell_index: usize) -> Result<Move, MoveError> {
        let pos = Position::try_from(cell_index)?;
        self.apply_move(pos)
    }

    /// Points the view at history entry `move_index`.
    ///
    /// Never changes history. Allowed at any time, including after a win.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] if `move_index` names no entry.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), MoveError> {
        let len = self.history.len();
        if move_index >= len {
            warn!("Jump rejected: index out of range");
            return Err(MoveError::OutOfRange {
                index: move_index,
                len,
            });
        }

        self.view = move_index;
        debug!(view = self.view, "View moved");
        Ok(())
    }

    /// Read-only projection of the viewed entry.
    #[instrument(level = "trace", skip(self))]
    pub fn current_view(&self) -> GameView {
        GameView {
            board: *self.current_board(),
            turn: self.turn(),
            status: self.status(),
            view_pointer: self.view,
        }
    }

    /// One positional label per history entry.
    pub fn history_labels(&self) -> Vec<HistoryLabel> {
        self.history.labels(self.view)
    }

    /// Index of the viewed history entry.
    pub fn view_pointer(&self) -> usize {
        self.view
    }

    /// The full history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Mark to move from the viewed entry.
    pub fn turn(&self) -> Mark {
        turn_for(self.view)
    }

    /// Status of the viewed board.
    pub fn status(&self) -> Status {
        Status::of(self.current_board(), self.turn())
    }

    /// Empty cells of the viewed board; none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_over() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    fn current_board(&self) -> &Board {
        // The view pointer is only ever set to an existing index.
        self.history.entries()[self.view].board()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
