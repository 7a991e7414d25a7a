//! Tests for win detection through the public API.

use strictly_timetravel::{
    Board, Cell, GameEngine, LINES, Mark, Position, Status, evaluate, is_draw, winning_line,
};

const E: Cell = Cell::Empty;
const X: Cell = Cell::Occupied(Mark::X);
const O: Cell = Cell::Occupied(Mark::O);

#[test]
fn test_top_row() {
    let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
    assert_eq!(evaluate(&board), Some(Mark::X));
}

#[test]
fn test_left_column() {
    let board = Board::from_cells([X, O, E, X, O, E, X, E, E]);
    assert_eq!(evaluate(&board), Some(Mark::X));
}

#[test]
fn test_main_diagonal() {
    let board = Board::from_cells([X, O, O, O, X, O, O, O, X]);
    assert_eq!(evaluate(&board), Some(Mark::X));
    assert_eq!(
        winning_line(&board).map(|l| l.cells),
        Some([Position::TopLeft, Position::Center, Position::BottomRight])
    );
}

#[test]
fn test_full_board_no_line() {
    let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
    assert_eq!(evaluate(&board), None);
    assert!(is_draw(&board));
}

#[test]
fn test_every_line_is_detected() {
    for line in LINES {
        let board = line
            .iter()
            .fold(Board::new(), |board, &pos| board.with_mark(pos, Mark::O));
        assert_eq!(evaluate(&board), Some(Mark::O), "line {line:?}");
    }
}

#[test]
fn test_engine_status_follows_detector() {
    // O wins the middle column.
    let engine = GameEngine::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomRight,
        Position::BottomCenter,
    ])
    .expect("Valid replay");

    let view = engine.current_view();
    assert_eq!(view.status, Status::Won(Mark::O));
    assert_eq!(evaluate(&view.board), Some(Mark::O));
    assert_eq!(view.status.to_string(), "Winner: O");
}
