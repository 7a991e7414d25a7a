//! Game status derived from a board snapshot.

use super::rules::{evaluate, is_full};
use super::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Status of the viewed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// No line yet and cells remain; the given mark moves next.
    InProgress(Mark),
    /// A line is complete.
    Won(Mark),
    /// Every cell is marked and no line is complete.
    Draw,
}

impl Status {
    /// Computes the status of `board` with `to_move` as the next mark.
    pub fn of(board: &Board, to_move: Mark) -> Self {
        if let Some(winner) = evaluate(board) {
            Status::Won(winner)
        } else if is_full(board) {
            Status::Draw
        } else {
            Status::InProgress(to_move)
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Status::Won(mark) => Some(*mark),
            Status::InProgress(_) | Status::Draw => None,
        }
    }

    /// True once the board is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::InProgress(_))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress(mark) => write!(f, "Next player: {mark}"),
            Status::Won(mark) => write!(f, "Winner: {mark}"),
            Status::Draw => write!(f, "Draw"),
        }
    }
}
