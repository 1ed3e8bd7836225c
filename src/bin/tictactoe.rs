//! Tic-tac-toe in the terminal
//!
//! Play interactively with move history navigation, or replay a scripted
//! sequence of moves and inspect the result.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-tac-toe with move history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(tictactoe_history::cli::commands::play::PlayArgs),

    /// Replay a sequence of cells and print the result
    Replay(tictactoe_history::cli::commands::replay::ReplayArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => tictactoe_history::cli::commands::play::execute(args),
        Commands::Replay(args) => tictactoe_history::cli::commands::replay::execute(args),
    }
}
