//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in scan order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// The mark filling the line.
    pub mark: Mark,
    /// The three cells of the line.
    pub cells: [Position; 3],
}

/// Returns the first completed line in scan order, if any.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark)).then_some(
            WinningLine {
                mark,
                cells: [a, b, c],
            },
        )
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line (in [`LINES`] order) held
/// entirely by one mark, `None` otherwise.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Option<Mark> {
    winning_line(board).map(|line| line.mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Occupied(Mark::X);
    const O: Cell = Cell::Occupied(Mark::O);

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        assert_eq!(evaluate(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_left_column() {
        let board = Board::from_cells([X, O, E, X, O, E, X, E, E]);
        assert_eq!(evaluate(&board), Some(Mark::X));
        assert_eq!(
            winning_line(&board).map(|l| l.cells),
            Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
        );
    }

    #[test]
    fn test_winner_main_diagonal() {
        let board = Board::from_cells([X, O, O, O, X, O, O, O, X]);
        assert_eq!(evaluate(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_anti_diagonal_for_o() {
        let board = Board::from_cells([X, X, O, E, O, X, O, E, E]);
        assert_eq!(evaluate(&board), Some(Mark::O));
    }

    #[test]
    fn test_full_board_without_line() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_scan_order_prefers_rows() {
        // Not reachable in play, but the scan order must stay fixed.
        let board = Board::from_cells([O, O, O, X, X, X, E, E, E]);
        assert_eq!(evaluate(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_cells([X, X, E, E, E, E, E, E, E]);
        assert_eq!(evaluate(&board), None);
    }
}
