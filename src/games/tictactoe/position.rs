//! Named cells of the 3x3 board and their coordinate mappings.

use serde::{Deserialize, Serialize};

/// A cell position on the board.
///
/// Coordinates follow the engine's `(x, y)` convention: `x` is the row
/// (top to bottom), `y` the column (left to right).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (0, 0)
    TopLeft,
    /// Top-center (0, 1)
    TopCenter,
    /// Top-right (0, 2)
    TopRight,
    /// Middle-left (1, 0)
    MiddleLeft,
    /// Center (1, 1)
    Center,
    /// Middle-right (1, 2)
    MiddleRight,
    /// Bottom-left (2, 0)
    BottomLeft,
    /// Bottom-center (2, 1)
    BottomCenter,
    /// Bottom-right (2, 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from `(x, y)` coordinates, both in `0..3`.
    pub fn from_coords(x: usize, y: usize) -> Option<Self> {
        if x >= 3 || y >= 3 {
            return None;
        }
        Self::from_index(x * 3 + y)
    }

    /// Returns the `(x, y)` coordinates of this position.
    pub fn coords(self) -> (usize, usize) {
        let index = self.to_index();
        (index / 3, index % 3)
    }

    /// Row index.
    pub fn x(self) -> usize {
        self.coords().0
    }

    /// Column index.
    pub fn y(self) -> usize {
        self.coords().1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_coords_cover_grid() {
        for pos in Position::iter() {
            let (x, y) = pos.coords();
            assert_eq!(Position::from_coords(x, y), Some(pos));
        }
    }

    #[test]
    fn test_out_of_range_coords() {
        assert_eq!(Position::from_coords(3, 0), None);
        assert_eq!(Position::from_coords(0, 3), None);
    }

    #[test]
    fn test_center_coords() {
        assert_eq!(Position::Center.coords(), (1, 1));
        assert_eq!(Position::TopRight.coords(), (0, 2));
        assert_eq!(Position::BottomLeft.coords(), (2, 0));
    }
}
