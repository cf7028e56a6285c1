//! tictactoe - play against a random-move computer in the terminal.

#![warn(missing_docs)]

mod cli;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use random_tictactoe_cli::{simulate, GameConfig, Orchestrator};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            delay_ms,
        } => run_play(config, seed, delay_ms).await,
        Command::Simulate {
            games,
            config,
            seed,
            json,
        } => run_simulate(games, config, seed, json),
    }
}

fn load_config(path: Option<PathBuf>, seed: Option<u64>) -> Result<GameConfig> {
    let mut config = GameConfig::load(path.as_deref()).context("Failed to load configuration")?;
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

/// Run an interactive terminal session
#[instrument]
async fn run_play(path: Option<PathBuf>, seed: Option<u64>, delay_ms: Option<u64>) -> Result<()> {
    let mut config = load_config(path, seed)?;
    if let Some(delay_ms) = delay_ms {
        config = config.with_computer_delay_ms(delay_ms);
    }

    let game = config.build_game().context("Failed to set up game")?;
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let orchestrator = Orchestrator::new(game, config.computer_delay(), event_tx);

    info!("Starting terminal session");
    terminal::run(orchestrator, event_rx).await
}

/// Run a headless batch of rounds
#[instrument]
fn run_simulate(games: u32, path: Option<PathBuf>, seed: Option<u64>, json: bool) -> Result<()> {
    let config = load_config(path, seed)?;
    let tally = simulate(&config, games).context("Simulation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{} rounds: {}", tally.rounds(), tally);
    }
    Ok(())
}
