//! Win detection logic for tic-tac-toe.

use super::super::{Actor, Board};
use super::lines::LINES;
use tracing::instrument;

/// Checks whether `actor` holds any full row, column or diagonal.
#[instrument(skip(board))]
pub fn is_winner(board: &Board, actor: Actor) -> bool {
    LINES.iter().any(|line| line.is_held_by(board, actor))
}

/// Checks if there is a winner on the board.
///
/// The user is checked first, so a board where both actors hold a line
/// reports the user.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Actor> {
    [Actor::User, Actor::Computer]
        .into_iter()
        .find(|actor| is_winner(board, *actor))
}
