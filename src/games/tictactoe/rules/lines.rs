//! The eight lines of the board, precomputed in scan order.

use super::super::{Actor, Board, Cell, Position};
use tracing::instrument;

/// Which row, column or diagonal a line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Row, indexed top to bottom.
    Row(usize),
    /// Column, indexed left to right.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// Three cells checked together for a win.
///
/// Cells are stored in scan order: rows left to right, columns top to
/// bottom, diagonals by increasing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    kind: LineKind,
    cells: [Position; 3],
}

impl Line {
    const fn new(kind: LineKind, cells: [Position; 3]) -> Self {
        Self { kind, cells }
    }

    /// Which line this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The line's positions in scan order.
    pub fn cells(&self) -> &[Position; 3] {
        &self.cells
    }

    /// Number of cells on this line holding `actor`'s mark.
    pub fn count(&self, board: &Board, actor: Actor) -> usize {
        self.cells.iter().filter(|p| board.get(**p).is(actor)).count()
    }

    /// Number of empty cells on this line.
    pub fn free(&self, board: &Board) -> usize {
        self.cells.iter().filter(|p| board.is_empty(**p)).count()
    }

    /// First empty cell in scan order.
    pub fn first_free(&self, board: &Board) -> Option<Position> {
        self.cells.iter().copied().find(|p| board.is_empty(*p))
    }

    /// True if all three cells hold `actor`'s mark.
    pub fn is_held_by(&self, board: &Board, actor: Actor) -> bool {
        self.cells
            .iter()
            .all(|p| board.get(*p) == Cell::Occupied(actor))
    }

    /// True if `actor` holds two cells and the third is empty.
    pub fn is_threat(&self, board: &Board, actor: Actor) -> bool {
        self.count(board, actor) == 2 && self.free(board) == 1
    }
}

use Position::*;

/// All lines in scan order: rows, columns, main diagonal, anti-diagonal.
pub static LINES: [Line; 8] = [
    Line::new(LineKind::Row(0), [TopLeft, TopCenter, TopRight]),
    Line::new(LineKind::Row(1), [MiddleLeft, Center, MiddleRight]),
    Line::new(LineKind::Row(2), [BottomLeft, BottomCenter, BottomRight]),
    Line::new(LineKind::Column(0), [TopLeft, MiddleLeft, BottomLeft]),
    Line::new(LineKind::Column(1), [TopCenter, Center, BottomCenter]),
    Line::new(LineKind::Column(2), [TopRight, MiddleRight, BottomRight]),
    Line::new(LineKind::MainDiagonal, [TopLeft, Center, BottomRight]),
    Line::new(LineKind::AntiDiagonal, [TopRight, Center, BottomLeft]),
];

/// First line in scan order where `actor` could complete three next move.
#[instrument(skip(board))]
pub fn find_threat(board: &Board, actor: Actor) -> Option<&'static Line> {
    LINES.iter().find(|line| line.is_threat(board, actor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_order() {
        let kinds: Vec<_> = LINES.iter().map(Line::kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Row(0),
                LineKind::Row(1),
                LineKind::Row(2),
                LineKind::Column(0),
                LineKind::Column(1),
                LineKind::Column(2),
                LineKind::MainDiagonal,
                LineKind::AntiDiagonal,
            ]
        );
    }

    #[test]
    fn test_lines_match_coordinates() {
        for line in &LINES {
            let coords: Vec<_> = line.cells().iter().map(|p| p.coords()).collect();
            let expected: Vec<_> = match line.kind() {
                LineKind::Row(x) => (0..3).map(|y| (x, y)).collect(),
                LineKind::Column(y) => (0..3).map(|x| (x, y)).collect(),
                LineKind::MainDiagonal => (0..3).map(|i| (i, i)).collect(),
                LineKind::AntiDiagonal => (0..3).map(|i| (i, 2 - i)).collect(),
            };
            assert_eq!(coords, expected);
        }
    }

    #[test]
    fn test_find_threat_prefers_rows() {
        // Column 0 and row 2 are both open for x; row comes first.
        let board: Board = "x . .\nx . .\n. x x".parse().unwrap();
        let line = find_threat(&board, Actor::User).unwrap();
        assert_eq!(line.kind(), LineKind::Row(2));
        assert_eq!(line.first_free(&board), Some(BottomLeft));
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        let board: Board = "x x o\n. . .\n. . .".parse().unwrap();
        assert_eq!(find_threat(&board, Actor::User), None);
    }
}
