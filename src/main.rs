//! Tic-tac-toe terminal front end.
//!
//! Thin presentation layer over the engine library.

#![warn(missing_docs)]

mod cli;
mod terminal;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe_engine::{EngineConfig, Game};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    info!(computer_first = cli.computer_first, "Starting game");
    let mut game = Game::from_config(&config);

    let stdin = std::io::stdin();
    let status = terminal::play(&mut game, cli.computer_first, stdin.lock(), std::io::stdout())?;
    info!(%status, moves = game.move_history().len(), "Game over");

    if cli.print_history {
        println!("{}", serde_json::to_string_pretty(game.move_history())?);
    }

    Ok(())
}
