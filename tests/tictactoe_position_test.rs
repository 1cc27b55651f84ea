//! Tests for tic-tac-toe positions and board lookups.

use tictactoe_engine::{Actor, Board, Cell, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_position_coords_are_row_then_column() {
    assert_eq!(Position::from_coords(0, 2), Some(Position::TopRight));
    assert_eq!(Position::from_coords(2, 0), Some(Position::BottomLeft));
    assert_eq!(Position::MiddleRight.x(), 1);
    assert_eq!(Position::MiddleRight.y(), 2);
}

#[test]
fn test_free_positions_empty_board() {
    let board = Board::new();
    assert_eq!(board.free_positions().len(), 9);
}

#[test]
fn test_free_positions_filters_occupied() {
    let board: Board = "x . .\n. o .\n. . .".parse().unwrap();

    let free = board.free_positions();
    assert_eq!(free.len(), 7);
    assert!(!free.contains(&Position::TopLeft));
    assert!(!free.contains(&Position::Center));
    assert!(free.contains(&Position::BottomRight));
    assert_eq!(board.get(Position::Center), Cell::Occupied(Actor::Computer));
}
