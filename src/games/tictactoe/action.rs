//! Move records and engine errors.
//!
//! Moves are domain events: one is appended to the history for every
//! accepted placement and never changed afterwards.

use super::{Actor, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// An accepted move: an actor placing their mark at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The actor making the move.
    pub actor: Actor,
    /// Row index.
    pub x: usize,
    /// Column index.
    pub y: usize,
}

impl Move {
    /// Creates a move from a board position.
    pub fn at(actor: Actor, position: Position) -> Self {
        let (x, y) = position.coords();
        Self::new(actor, x, y)
    }

    /// Returns the board position of this move.
    ///
    /// Moves are only constructed from validated coordinates, so this is
    /// `None` only for hand-built records.
    pub fn position(&self) -> Option<Position> {
        Position::from_coords(self.x, self.y)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.actor, self.x, self.y)
    }
}

/// Error raised by an engine operation.
///
/// Every error is raised before any mutation, so the game is unchanged
/// when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The target cell already holds a mark.
    #[display("cell is already taken: ({}, {})", x, y)]
    CellTaken {
        /// Row index.
        x: usize,
        /// Column index.
        y: usize,
    },

    /// The computer was asked to move on a full board.
    #[display("no cells available")]
    NoCellsAvailable,

    /// A winning or blocking line was found but no empty cell resolved in it.
    ///
    /// This is a logic bug, not a recoverable condition.
    #[display("no winning move found in a line reported as open")]
    NoWinningMoveFound,

    /// Coordinates fall outside the 3x3 grid.
    #[display("coordinates out of bounds: ({}, {})", x, y)]
    OutOfBounds {
        /// Row index.
        x: usize,
        /// Column index.
        y: usize,
    },

    /// Every configured strategy declined to pick a cell.
    #[display("no strategy produced a move")]
    NoStrategyMatched,

    /// A textual board layout could not be parsed.
    #[display("invalid board layout: {}", _0)]
    InvalidLayout(String),
}

impl std::error::Error for EngineError {}
