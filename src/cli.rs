//! Command-line interface for the terminal front end.

use clap::Parser;

/// Tic-tac-toe against the engine's computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the computer's random fallback (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to an engine config file (TOML)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Let the computer open the game
    #[arg(long)]
    pub computer_first: bool,

    /// Print the move history as JSON when the game ends
    #[arg(long)]
    pub print_history: bool,
}
