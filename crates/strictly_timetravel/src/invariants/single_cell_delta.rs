//! Single cell delta invariant: each entry adds exactly one mark.

use super::super::{Cell, GameHistory};
use super::Invariant;

/// Invariant: entry `k` differs from entry `k-1` in exactly one cell.
///
/// That cell is the one named by entry `k`'s move. It was empty before and
/// holds the move's mark after. Earlier marks are never overwritten.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameHistory> for SingleCellDeltaInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.entries().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(placed) = after.placed() else {
                return false;
            };

            let changed: Vec<usize> = before
                .board()
                .cells()
                .iter()
                .zip(after.board().cells())
                .enumerate()
                .filter(|(_, (b, a))| b != a)
                .map(|(i, _)| i)
                .collect();

            changed == [placed.position.index()]
                && before.board().get(placed.position) == Cell::Empty
                && after.board().get(placed.position) == Cell::Occupied(placed.mark)
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to an empty cell"
    }
}
