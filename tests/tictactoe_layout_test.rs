//! Tests for the textual board layout and the layout builder.

use tictactoe_engine::{Actor, Board, Cell, EngineError, Game, GameBuilder, Move};

#[test]
fn test_builder_state_round_trip() {
    let layout = "x o .\n. x .\no . x";
    let game = GameBuilder::new()
        .with_board_state(layout)
        .expect("Valid layout")
        .build();

    let expected: Board = layout.parse().unwrap();
    assert_eq!(game.state(), expected.rows());
    assert_eq!(game.board().to_string(), layout);
}

#[test]
fn test_builder_records_moves() {
    let game = GameBuilder::new()
        .with_board_state(
            "
            x x .
            . . .
            . . .
            ",
        )
        .expect("Valid layout")
        .build();

    assert_eq!(
        game.move_history(),
        &[Move::new(Actor::User, 0, 0), Move::new(Actor::User, 0, 1)]
    );
}

#[test]
fn test_from_board_has_no_history() {
    let board: Board = "x . .\n. o .\n. . .".parse().unwrap();
    let game = Game::from_board(board);

    assert!(game.move_history().is_empty());
    assert_eq!(game.state()[0][0], Cell::Occupied(Actor::User));
    assert_eq!(game.state()[1][1], Cell::Occupied(Actor::Computer));
}

#[test]
fn test_invalid_layouts() {
    for layout in ["", "x . .\n. . .", "x . . .\n. . .\n. . .", "x . .\n. X .\n. . ."] {
        assert!(
            matches!(layout.parse::<Board>(), Err(EngineError::InvalidLayout(_))),
            "layout {:?} should be rejected",
            layout
        );
    }
}

#[test]
fn test_builder_rejects_invalid_layout() {
    let result = GameBuilder::new().with_board_state("x . q\n. . .\n. . .");
    assert!(matches!(result, Err(EngineError::InvalidLayout(_))));
}
