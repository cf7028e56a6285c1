//! Terminal front end for tic-tac-toe against a random-move computer.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for board size, symbols, pacing and seed
//! - **Orchestrator**: gates human input, paces computer moves, keeps score
//! - **Simulate**: headless batches of rounds
//!
//! The game rules live in the `random_tictactoe` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod simulate;

pub use config::{ConfigError, GameConfig};
pub use orchestrator::{round_message, GameEvent, Orchestrator, RejectReason, Tally};
pub use simulate::simulate;
