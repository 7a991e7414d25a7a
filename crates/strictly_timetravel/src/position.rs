//! Typed cell addresses for the 3x3 board.

use super::action::MoveError;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell position on the board (index 0-8, row-major).
///
/// Presentation layers speak in raw indices; the engine converts them once
/// at the boundary with [`Position::try_from`] and works with this enum
/// from then on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the empty positions of `board`, in index order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl TryFrom<usize> for Position {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(MoveError::InvalidCell(index))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_index_round_trip_matches_declaration_order() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
        assert_eq!(Position::Center.index(), 4);
    }

    #[test]
    fn test_try_from_rejects_out_of_bounds() {
        assert_eq!(Position::try_from(8), Ok(Position::BottomRight));
        assert_eq!(Position::try_from(9), Err(MoveError::InvalidCell(9)));
    }

    #[test]
    fn test_valid_moves_filters_occupied() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::O);

        let valid = Position::valid_moves(&board);
        assert_eq!(valid.len(), 7);
        assert!(!valid.contains(&Position::TopLeft));
        assert!(!valid.contains(&Position::Center));
        assert!(valid.contains(&Position::BottomRight));
    }
}
