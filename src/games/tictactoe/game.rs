//! Game engine for tic-tac-toe.
//!
//! [`Game`] owns the board, the move history, the computer's strategy list
//! and its random source. Every operation validates first and mutates
//! second, so a returned error always leaves the game untouched.

use super::action::{EngineError, Move};
use super::invariants::{EngineInvariants, InvariantSet};
use super::rules;
use super::strategy::Strategy;
use super::types::{Actor, Board, Cell, GameStatus, SIZE};
use super::Position;
use crate::config::EngineConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// The random source is a type parameter so tests can pin the fallback
/// pick; production code uses the seeded or entropy-backed [`ChaCha8Rng`].
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    board: Board,
    history: Vec<Move>,
    strategies: Vec<Strategy>,
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Creates an empty game seeded from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Creates an empty game with a deterministic random source.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a game from an existing board, seeded from OS entropy.
    ///
    /// The history starts empty regardless of the marks on the board.
    #[instrument(skip(board))]
    pub fn from_board(board: Board) -> Self {
        Self::from_board_with_rng(board, ChaCha8Rng::from_entropy())
    }

    /// Creates a game from an existing board with a deterministic random source.
    #[instrument(skip(board))]
    pub fn from_board_with_seed(board: Board, seed: u64) -> Self {
        Self::from_board_with_rng(board, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates an empty game from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &EngineConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
            None => ChaCha8Rng::from_entropy(),
        };
        info!(seed = ?config.seed(), strategies = ?config.strategies(), "Game created from config");
        Self::with_rng(rng).with_strategies(config.strategies().clone())
    }
}

impl Default for Game<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Game<R> {
    /// Creates an empty game drawing fallback picks from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self::from_board_with_rng(Board::new(), rng)
    }

    /// Creates a game from an existing board drawing fallback picks from `rng`.
    pub fn from_board_with_rng(board: Board, rng: R) -> Self {
        Self {
            board,
            history: Vec::new(),
            strategies: Strategy::default_order(),
            rng,
        }
    }

    /// Replaces the computer's strategy list.
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// The computer's strategies in priority order.
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Returns the board as a 3x3 grid, indexed `[x][y]`.
    pub fn state(&self) -> [[Cell; SIZE]; SIZE] {
        self.board.rows()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns moves in the order they were played.
    pub fn move_history(&self) -> &[Move] {
        &self.history
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        SIZE
    }

    /// Empties the board and the history.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        debug!(moves = self.history.len(), "Clearing game");
        self.board = Board::new();
        self.history.clear();
    }

    /// Places the user's mark at `(x, y)`.
    #[instrument(skip(self))]
    pub fn accept_user_move(&mut self, x: usize, y: usize) -> Result<Move, EngineError> {
        self.accept_move(x, y, Actor::User)
    }

    /// Places `actor`'s mark at `(x, y)` and records the move.
    ///
    /// Both the user path and the computer path commit through here.
    #[instrument(skip(self))]
    pub fn accept_move(&mut self, x: usize, y: usize, actor: Actor) -> Result<Move, EngineError> {
        let pos = Position::from_coords(x, y).ok_or_else(|| {
            warn!(x, y, "Move rejected: out of bounds");
            EngineError::OutOfBounds { x, y }
        })?;

        if !self.board.is_empty(pos) {
            warn!(x, y, %actor, "Move rejected: cell is taken");
            return Err(EngineError::CellTaken { x, y });
        }

        let mv = Move::new(actor, x, y);
        self.history.push(mv);
        self.board.set(pos, Cell::Occupied(actor));
        self.assert_invariants();

        debug!(%mv, "Move accepted");
        Ok(mv)
    }

    /// Chooses and plays the computer's move.
    ///
    /// Strategies are tried in order; the first one that proposes a cell
    /// decides the move.
    #[instrument(skip(self))]
    pub fn create_computer_move(&mut self) -> Result<Move, EngineError> {
        if self.board.free_count() == 0 {
            warn!("Computer asked to move on a full board");
            return Err(EngineError::NoCellsAvailable);
        }

        let mut choice = None;
        for strategy in &self.strategies {
            if let Some(pos) = strategy.pick(&self.board, Actor::Computer, &mut self.rng)? {
                choice = Some(pos);
                break;
            }
        }

        let (x, y) = choice.ok_or(EngineError::NoStrategyMatched)?.coords();
        self.accept_move(x, y, Actor::Computer)
    }

    /// Checks whether `actor` holds a full line.
    pub fn is_winner(&self, actor: Actor) -> bool {
        rules::is_winner(&self.board, actor)
    }

    /// Reports the game's status.
    ///
    /// Order: user won, computer won, draw, in progress.
    #[instrument(skip(self))]
    pub fn check_game(&self) -> GameStatus {
        if let Some(winner) = rules::check_winner(&self.board) {
            GameStatus::Won(winner)
        } else if rules::is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    fn assert_invariants(&self) {
        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated"
        );
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut Vec<Move> {
        &mut self.history
    }
}
