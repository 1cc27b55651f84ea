//! Tic-tac-toe engine: board, rules, computer strategies.

mod action;
mod builder;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod strategy;
mod types;

pub use action::{EngineError, Move};
pub use builder::GameBuilder;
pub use game::Game;
pub use position::Position;
pub use strategy::Strategy;
pub use types::{Actor, Board, Cell, DRAW_MESSAGE, EMPTY_SYMBOL, GameStatus, SIZE};
