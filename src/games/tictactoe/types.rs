//! Core domain types for tic-tac-toe.

use super::action::EngineError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Party making a move.
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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Actor {
    /// The human player.
    User,
    /// The engine's own opponent.
    Computer,
}

impl Actor {
    /// Returns the opposing actor.
    pub fn opponent(self) -> Self {
        match self {
            Actor::User => Actor::Computer,
            Actor::Computer => Actor::User,
        }
    }

    /// Mark written into the textual board layout.
    pub fn symbol(self) -> char {
        match self {
            Actor::User => 'x',
            Actor::Computer => 'o',
        }
    }

    /// Resolves a layout mark back to its actor.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'x' => Some(Actor::User),
            'o' => Some(Actor::Computer),
            _ => None,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding an actor's mark.
    Occupied(Actor),
}

impl Cell {
    /// Returns the layout mark for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Occupied(actor) => actor.symbol(),
        }
    }

    /// Checks whether this cell holds `actor`'s mark.
    pub fn is(self, actor: Actor) -> bool {
        self == Cell::Occupied(actor)
    }
}

/// Layout mark for an empty cell.
pub const EMPTY_SYMBOL: char = '.';

/// Side length of the board.
pub const SIZE: usize = 3;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a row-major grid.
    pub fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Self {
        let mut board = Self::new();
        for (x, row) in rows.iter().enumerate() {
            for (y, cell) in row.iter().enumerate() {
                board.cells[x * SIZE + y] = *cell;
            }
        }
        board
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; SIZE * SIZE] {
        &self.cells
    }

    /// Number of empty cells.
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Empty).count()
    }

    /// Empty positions in row-major order.
    pub fn free_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Returns the board as a 3x3 grid, indexed `[x][y]`.
    pub fn rows(&self) -> [[Cell; SIZE]; SIZE] {
        let mut rows = [[Cell::Empty; SIZE]; SIZE];
        for (i, cell) in self.cells.iter().enumerate() {
            rows[i / SIZE][i % SIZE] = *cell;
        }
        rows
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (x, row) in self.rows().iter().enumerate() {
            let line = row
                .iter()
                .map(|cell| cell.symbol().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            if x + 1 < SIZE {
                writeln!(f, "{}", line)?;
            } else {
                write!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parses the textual layout: `x` user, `o` computer, `.` empty.
    ///
    /// Rows are separated by newlines, cells by whitespace. Blank lines and
    /// indentation are ignored.
    fn from_str(layout: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<&str>> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.split_whitespace().collect())
            .collect();

        if rows.len() != SIZE {
            return Err(EngineError::InvalidLayout(format!(
                "expected {} rows, found {}",
                SIZE,
                rows.len()
            )));
        }

        let mut board = Board::new();
        for (x, row) in rows.iter().enumerate() {
            if row.len() != SIZE {
                return Err(EngineError::InvalidLayout(format!(
                    "row {} has {} cells, expected {}",
                    x,
                    row.len(),
                    SIZE
                )));
            }
            for (y, token) in row.iter().enumerate() {
                let unknown = || {
                    EngineError::InvalidLayout(format!(
                        "unknown token {:?} at ({}, {})",
                        token, x, y
                    ))
                };
                let mut chars = token.chars();
                let cell = match (chars.next(), chars.next()) {
                    (Some(EMPTY_SYMBOL), None) => Cell::Empty,
                    (Some(symbol), None) => {
                        Cell::Occupied(Actor::from_symbol(symbol).ok_or_else(unknown)?)
                    }
                    _ => return Err(unknown()),
                };
                board.cells[x * SIZE + y] = cell;
            }
        }
        Ok(board)
    }
}

/// Message shown when the board fills up with no winner.
pub const DRAW_MESSAGE: &str = "nobody won :–(";

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Actor),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game has a winner or a full board.
    pub fn is_finished(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "continue"),
            GameStatus::Won(actor) => write!(f, "{} won!", actor),
            GameStatus::Draw => write!(f, "{}", DRAW_MESSAGE),
        }
    }
}
