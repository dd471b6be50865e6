//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The controller decides
//! what to do with the answers.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{LINES, WinningLine, check_winner, winning_line};
