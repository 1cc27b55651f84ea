//! Tic-tac-toe game engine with a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Game**: owns the board and move history, validates moves
//! - **Rules**: precomputed lines, win and draw detection
//! - **Strategy**: ordered, independently testable move pickers
//! - **Config**: seed and strategy order loaded from TOML
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Actor, Cell, Game, GameStatus};
//!
//! let mut game = Game::with_seed(7);
//! game.accept_user_move(1, 1)?;
//! game.create_computer_move()?;
//!
//! assert_eq!(game.state()[1][1], Cell::Occupied(Actor::User));
//! assert_eq!(game.move_history().len(), 2);
//! assert_eq!(game.check_game(), GameStatus::InProgress);
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Actor, Board, Cell, DRAW_MESSAGE, EMPTY_SYMBOL, EngineError, Game, GameBuilder, GameStatus,
    Move, Position, SIZE, Strategy,
};

/// Pure rule functions and the precomputed line table.
pub use games::tictactoe::rules;

/// Engine invariants, checked after every mutation in debug builds.
pub use games::tictactoe::invariants;
