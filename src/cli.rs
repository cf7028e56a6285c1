//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against a computer that plays at random
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a random-move computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for reproducible games (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before computer moves, in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Play many rounds headless and print the score
    Simulate {
        /// Number of rounds
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for a reproducible run (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the score as JSON
        #[arg(long)]
        json: bool,
    },
}
