//! Ordered board snapshots, one per accepted move.

use super::action::Move;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// One board snapshot in the game history.
///
/// Entry `k` is the board after `k` moves. Entry 0 is the empty board and
/// carries no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    placed: Option<Move>,
}

impl HistoryEntry {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    /// Board snapshot after this entry's move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Move that produced this entry; `None` for the initial entry.
    pub fn placed(&self) -> Option<Move> {
        self.placed
    }
}

/// Append/truncate-only sequence of history entries.
///
/// Never empty: it always holds at least the initial entry. Entries are
/// never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    entries: Vec<HistoryEntry>,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    /// Number of entries (always at least 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Index of the newest entry.
    pub fn last_index(&self) -> usize {
        self.entries.len() - 1
    }

    /// Entry at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// All entries in move order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Discards every entry after `index` and appends a new snapshot.
    ///
    /// Returns the index of the appended entry. `index` must name an
    /// existing entry; the engine only ever passes its view pointer.
    #[instrument(skip(self, board), fields(len = self.entries.len()))]
    pub(crate) fn branch_from(&mut self, index: usize, board: Board, placed: Move) -> usize {
        let discarded = self.entries.len().saturating_sub(index + 1);
        if discarded > 0 {
            trace!(discarded, "Truncating future history");
        }
        self.entries.truncate(index + 1);
        self.entries.push(HistoryEntry {
            board,
            placed: Some(placed),
        });
        self.last_index()
    }

    /// Positional labels for every entry.
    pub fn labels(&self, current: usize) -> Vec<HistoryLabel> {
        (0..self.entries.len())
            .map(|index| HistoryLabel {
                index,
                is_initial: index == 0,
                is_current: index == current,
            })
            .collect()
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl GameHistory {
    /// Builds a history from raw entries, bypassing the engine.
    pub(crate) fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
impl HistoryEntry {
    pub(crate) fn from_parts(board: Board, placed: Option<Move>) -> Self {
        Self { board, placed }
    }
}

/// Positional "go to move N" affordance for one history entry.
///
/// Exposes no board data. The `Display` text is a default; presentation
/// layers are free to render their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryLabel {
    /// History index this label jumps to.
    pub index: usize,
    /// True for entry 0, the empty board.
    pub is_initial: bool,
    /// True for the entry currently viewed.
    pub is_current: bool,
}

impl std::fmt::Display for HistoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_initial {
            write!(f, "Go to game start")
        } else {
            write!(f, "Go to move #{}", self.index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    fn push(history: &mut GameHistory, from: usize, pos: Position, mark: Mark) -> usize {
        let board = history.entries()[from].board().with_mark(pos, mark);
        history.branch_from(from, board, Move::new(mark, pos))
    }

    #[test]
    fn test_new_history_has_initial_entry() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0], HistoryEntry::initial());
        assert_eq!(history.get(0).and_then(HistoryEntry::placed), None);
    }

    #[test]
    fn test_branch_from_end_appends() {
        let mut history = GameHistory::new();
        assert_eq!(push(&mut history, 0, Position::Center, Mark::X), 1);
        assert_eq!(push(&mut history, 1, Position::TopLeft, Mark::O), 2);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_branch_from_past_truncates() {
        let mut history = GameHistory::new();
        push(&mut history, 0, Position::Center, Mark::X);
        push(&mut history, 1, Position::TopLeft, Mark::O);
        push(&mut history, 2, Position::TopRight, Mark::X);

        let index = push(&mut history, 1, Position::BottomLeft, Mark::O);
        assert_eq!(index, 2);
        assert_eq!(history.len(), 3);
        assert_eq!(
            history.entries()[2].placed(),
            Some(Move::new(Mark::O, Position::BottomLeft))
        );
    }

    #[test]
    fn test_labels_are_positional() {
        let mut history = GameHistory::new();
        push(&mut history, 0, Position::Center, Mark::X);

        let labels = history.labels(0);
        assert_eq!(labels.len(), 2);
        assert!(labels[0].is_initial && labels[0].is_current);
        assert!(!labels[1].is_initial && !labels[1].is_current);
        assert_eq!(labels[0].to_string(), "Go to game start");
        assert_eq!(labels[1].to_string(), "Go to move #1");
    }
}
