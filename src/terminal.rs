//! Line-oriented terminal front end.
//!
//! Renders the board after each turn and reads `x y` coordinate pairs. All
//! game logic lives in the engine; this loop only forwards moves.

use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use tictactoe_engine::{Game, GameStatus};
use tracing::{debug, instrument};

/// Runs one game to completion or until input runs out.
#[instrument(skip(game, input, out))]
pub fn play<R, I, W>(
    game: &mut Game<R>,
    computer_first: bool,
    input: I,
    mut out: W,
) -> Result<GameStatus>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    if computer_first {
        let mv = game.create_computer_move()?;
        writeln!(out, "computer plays {} {}", mv.x, mv.y)?;
    }
    render(game, &mut out)?;

    let mut lines = input.lines();
    loop {
        let status = game.check_game();
        if status.is_finished() {
            writeln!(out, "{}", status)?;
            return Ok(status);
        }

        write!(out, "your move (x y): ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            debug!("Input closed before the game finished");
            return Ok(status);
        };
        let line = line?;

        let Some((x, y)) = parse_coords(&line) else {
            writeln!(out, "expected two numbers between 0 and 2, e.g. `1 1`")?;
            continue;
        };
        if let Err(e) = game.accept_user_move(x, y) {
            writeln!(out, "{}", e)?;
            continue;
        }

        if !game.check_game().is_finished() {
            let mv = game.create_computer_move()?;
            writeln!(out, "computer plays {} {}", mv.x, mv.y)?;
        }
        render(game, &mut out)?;
    }
}

fn render<R: Rng, W: Write>(game: &Game<R>, out: &mut W) -> Result<()> {
    writeln!(out, "{}\n", game.board())?;
    Ok(())
}

fn parse_coords(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split(|c: char| c.is_whitespace() || c == ',').filter(|s| !s.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((x, y))
}
