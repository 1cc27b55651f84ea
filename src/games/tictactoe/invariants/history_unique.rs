//! History uniqueness invariant: no cell is recorded twice.

use super::super::Game;
use super::Invariant;
use rand::Rng;
use std::collections::HashSet;

/// Invariant: no two history entries share coordinates.
///
/// A cell is written at most once between clears, so a duplicate means a
/// move was accepted on a taken cell.
pub struct HistoryUniqueInvariant;

impl<R: Rng> Invariant<Game<R>> for HistoryUniqueInvariant {
    fn holds(game: &Game<R>) -> bool {
        let mut seen = HashSet::new();
        game.move_history().iter().all(|mv| seen.insert((mv.x, mv.y)))
    }

    fn description() -> &'static str {
        "No cell appears twice in the move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Actor, Game, Move};

    #[test]
    fn test_distinct_moves_hold() {
        let mut game = Game::with_seed(5);
        game.accept_user_move(0, 1).unwrap();
        game.accept_move(1, 0, Actor::Computer).unwrap();
        assert!(HistoryUniqueInvariant::holds(&game));
    }

    #[test]
    fn test_rejected_move_keeps_history_unique() {
        let mut game = Game::with_seed(5);
        game.accept_user_move(2, 2).unwrap();
        assert!(game.accept_move(2, 2, Actor::Computer).is_err());
        assert!(HistoryUniqueInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_entry_violates() {
        let mut game = Game::with_seed(5);
        game.accept_user_move(2, 2).unwrap();
        game.history_mut().push(Move::new(Actor::Computer, 2, 2));
        assert!(!HistoryUniqueInvariant::holds(&game));
    }
}
