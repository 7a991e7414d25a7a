//! Read-only projections handed to presentation layers.

use super::history::HistoryLabel;
use super::status::Status;
use super::{Board, GameEngine, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the presentation layer needs to draw the viewed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board of the viewed entry.
    pub board: Board,
    /// Mark to move from the viewed entry.
    pub turn: Mark,
    /// Status of the viewed board.
    pub status: Status,
    /// Index of the viewed entry.
    pub view_pointer: usize,
}

/// Plain-data copy of the view and history labels.
///
/// Cells are `None`, `Some(X)` or `Some(O)`, which serialize as `null`,
/// `"X"` and `"O"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    /// Cells of the viewed board, row-major.
    pub cells: [Option<Mark>; 9],
    /// Display text of the status.
    pub status_text: String,
    /// Structured status.
    pub status: Status,
    /// Mark to move.
    pub turn: Mark,
    /// Index of the viewed entry.
    pub view_pointer: usize,
    /// One label per history entry.
    pub history: Vec<HistoryLabel>,
}

impl ViewSnapshot {
    /// Captures the engine's current view and labels.
    #[instrument(level = "trace", skip(engine))]
    pub fn capture(engine: &GameEngine) -> Self {
        let view = engine.current_view();
        Self {
            cells: view.board.cells().map(|c| c.mark()),
            status_text: view.status.to_string(),
            status: view.status,
            turn: view.turn,
            view_pointer: view.view_pointer,
            history: engine.history_labels(),
        }
    }

    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
