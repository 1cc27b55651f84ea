//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! the engine so the strategies and the engine share one line scan.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{LINES, Line, LineKind, find_threat};
pub use win::{check_winner, is_winner};
