//! History consistency invariant: every recorded move is still on the board.

use super::super::{Cell, Game};
use super::Invariant;
use rand::Rng;

/// Invariant: each history entry's cell holds that entry's actor.
///
/// Games seeded from an external board may have marks with no history entry,
/// so only the history-to-board direction is checked.
pub struct HistoryConsistentInvariant;

impl<R: Rng> Invariant<Game<R>> for HistoryConsistentInvariant {
    fn holds(game: &Game<R>) -> bool {
        game.move_history().iter().all(|mv| {
            mv.position()
                .is_some_and(|pos| game.board().get(pos) == Cell::Occupied(mv.actor))
        })
    }

    fn description() -> &'static str {
        "Every recorded move matches the mark on its cell"
    }
}
