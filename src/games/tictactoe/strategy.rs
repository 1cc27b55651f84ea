//! Move-selection strategies for the computer opponent.
//!
//! Each strategy is a pure function of the board, the actor to move and a
//! random source. The engine walks an ordered list and plays the first cell
//! any of them proposes.

use super::action::EngineError;
use super::rules::find_threat;
use super::{Actor, Board, Position};
use rand::RngCore;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One rule of the computer's decision procedure.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    /// Complete a line already holding two of our marks.
    WinNow,
    /// Fill the open cell of a line holding two opponent marks.
    BlockOpponent,
    /// Take the center if it is free.
    PreferCenter,
    /// Any empty cell, uniformly at random.
    RandomFree,
}

impl Strategy {
    /// The standard priority order: win, then block, then a random cell.
    ///
    /// `PreferCenter` is not part of it; add it through config or
    /// `Game::with_strategies`.
    pub fn default_order() -> Vec<Strategy> {
        vec![
            Strategy::WinNow,
            Strategy::BlockOpponent,
            Strategy::RandomFree,
        ]
    }

    /// Proposes a cell for `actor`, or `None` if this rule does not apply.
    ///
    /// Only the line-completing rules can fail, and only on an internal
    /// inconsistency.
    #[instrument(skip(board, rng))]
    pub fn pick(
        self,
        board: &Board,
        actor: Actor,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Position>, EngineError> {
        let choice = match self {
            Strategy::WinNow => complete_line(board, actor)?,
            Strategy::BlockOpponent => complete_line(board, actor.opponent())?,
            Strategy::PreferCenter => center(board),
            Strategy::RandomFree => random_free(board, rng),
        };
        if let Some(pos) = choice {
            debug!(strategy = %self, position = %pos, "Strategy picked a cell");
        }
        Ok(choice)
    }
}

/// Open cell of the first line where `owner` holds two marks.
fn complete_line(board: &Board, owner: Actor) -> Result<Option<Position>, EngineError> {
    match find_threat(board, owner) {
        Some(line) => line
            .first_free(board)
            .map(Some)
            .ok_or(EngineError::NoWinningMoveFound),
        None => Ok(None),
    }
}

fn center(board: &Board) -> Option<Position> {
    board
        .is_empty(Position::Center)
        .then_some(Position::Center)
}

fn random_free(board: &Board, rng: &mut dyn RngCore) -> Option<Position> {
    board.free_positions().choose(rng).copied()
}
