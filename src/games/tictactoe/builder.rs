//! Builds games from a textual board layout.

use super::action::EngineError;
use super::game::Game;
use super::types::{Board, Cell};
use super::Position;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::instrument;

/// Builder that replays a layout into a fresh game.
///
/// Unlike [`Game::from_board`], every mark is committed as a move, so the
/// history lists the layout's marks in row-major order.
#[derive(Debug, Clone)]
pub struct GameBuilder<R = ChaCha8Rng> {
    game: Game<R>,
}

impl GameBuilder<ChaCha8Rng> {
    /// Starts from an empty, entropy-seeded game.
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Starts from an empty game with a deterministic random source.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            game: Game::with_seed(seed),
        }
    }
}

impl Default for GameBuilder<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameBuilder<R> {
    /// Starts from an existing game.
    pub fn from_game(game: Game<R>) -> Self {
        Self { game }
    }

    /// Places every mark of `layout` (`x` user, `o` computer, `.` empty).
    #[instrument(skip(self))]
    pub fn with_board_state(mut self, layout: &str) -> Result<Self, EngineError> {
        let board: Board = layout.parse()?;
        for pos in Position::ALL {
            if let Cell::Occupied(actor) = board.get(pos) {
                let (x, y) = pos.coords();
                self.game.accept_move(x, y, actor)?;
            }
        }
        Ok(self)
    }

    /// Returns the built game.
    pub fn build(self) -> Game<R> {
        self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Actor, Move};

    #[test]
    fn test_history_in_row_major_order() {
        let game = GameBuilder::with_seed(0)
            .with_board_state("o . x\n. . .\nx . .")
            .unwrap()
            .build();
        assert_eq!(
            game.move_history(),
            &[
                Move::new(Actor::Computer, 0, 0),
                Move::new(Actor::User, 0, 2),
                Move::new(Actor::User, 2, 0),
            ]
        );
    }

    #[test]
    fn test_conflicting_layout_fails() {
        let result = GameBuilder::with_seed(0)
            .with_board_state("x . .\n. . .\n. . .")
            .unwrap()
            .with_board_state("o . .\n. . .\n. . .");
        assert_eq!(result.unwrap_err(), EngineError::CellTaken { x: 0, y: 0 });
    }
}
