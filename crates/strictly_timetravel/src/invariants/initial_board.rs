//! Initial board invariant: history starts from an empty board.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: entry 0 is the all-empty board with no move.
pub struct InitialBoardInvariant;

impl Invariant<GameHistory> for InitialBoardInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.get(0).is_some_and(|entry| {
            entry.placed().is_none() && entry.board().marked_count() == 0
        })
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
