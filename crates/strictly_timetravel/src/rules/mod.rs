//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Nothing here knows about
//! history or whose turn it is.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, evaluate, winning_line};
