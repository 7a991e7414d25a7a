//! Alternating marks invariant: X, O, X, O, ...

use super::super::{GameHistory, turn_for};
use super::Invariant;

/// Invariant: the move recorded at entry `k` (k ≥ 1) is X for odd `k`
/// and O for even `k`.
///
/// Equivalently, the mark placed from view pointer `k - 1` is the turn
/// derived from that pointer's parity.
pub struct AlternatingMarksInvariant;

impl Invariant<GameHistory> for AlternatingMarksInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .entries()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(k, entry)| entry.placed().is_some_and(|m| m.mark == turn_for(k - 1)))
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, O, ... starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::{Board, GameEngine, Mark, Move, Position};

    #[test]
    fn test_empty_history_holds() {
        assert!(AlternatingMarksInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let engine = GameEngine::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ])
        .expect("Valid replay");
        assert!(AlternatingMarksInvariant::holds(engine.history()));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let first = Board::new().with_mark(Position::TopLeft, Mark::X);
        let second = first.with_mark(Position::Center, Mark::X);
        let history = GameHistory::from_entries(vec![
            HistoryEntry::initial(),
            HistoryEntry::from_parts(first, Some(Move::new(Mark::X, Position::TopLeft))),
            HistoryEntry::from_parts(second, Some(Move::new(Mark::X, Position::Center))),
        ]);
        assert!(!AlternatingMarksInvariant::holds(&history));
    }
}
