//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_tictactoe::{Board, ComputerPlayer, Game, HumanPlayer, Mark};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Mark the human plays.
    #[serde(default = "default_human_symbol")]
    human_symbol: Mark,

    /// Mark the computer plays.
    #[serde(default = "default_computer_symbol")]
    computer_symbol: Mark,

    /// Pause before each computer move, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// RNG seed. Unset means seeded from the OS.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

fn default_board_size() -> usize {
    Board::STANDARD_SIZE
}

fn default_human_symbol() -> Mark {
    Mark::X
}

fn default_computer_symbol() -> Mark {
    Mark::O
}

fn default_computer_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            human_symbol: default_human_symbol(),
            computer_symbol: default_computer_symbol(),
            computer_delay_ms: default_computer_delay_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(
            board_size = config.board_size,
            human = %config.human_symbol,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads from `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Rejects settings no game can be built from.
    ///
    /// `board_size` must lie in `1..=Board::MAX_SIZE`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("board_size must be at least 1".to_string()));
        }
        if self.board_size > Board::MAX_SIZE {
            return Err(ConfigError::new(format!(
                "board_size {} exceeds the maximum of {}",
                self.board_size,
                Board::MAX_SIZE
            )));
        }
        if self.human_symbol == self.computer_symbol {
            return Err(ConfigError::new(format!(
                "human_symbol and computer_symbol are both {}",
                self.human_symbol
            )));
        }
        Ok(())
    }

    /// Pacing delay before computer moves.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// RNG for this configuration: seeded if a seed is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Builds a fresh game from these settings.
    #[instrument(skip(self))]
    pub fn build_game(&self) -> Result<Game, ConfigError> {
        self.validate()?;
        let board = Board::new(self.board_size)
            .map_err(|e| ConfigError::new(format!("Invalid board: {}", e)))?;
        Game::new(
            board,
            HumanPlayer::new(self.human_symbol),
            ComputerPlayer::new(self.computer_symbol),
            self.rng(),
        )
        .map_err(|e| ConfigError::new(format!("Invalid players: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
