//! Tests for loading game configuration from TOML.

use random_tictactoe::{Board, Mark, Participant};
use random_tictactoe_cli::GameConfig;
use std::io::Write;
use std::time::Duration;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(*config.board_size(), 3);
    assert_eq!(*config.human_symbol(), Mark::X);
    assert_eq!(*config.computer_symbol(), Mark::O);
    assert_eq!(config.computer_delay(), Duration::from_millis(500));
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let file = write_config("human_symbol = \"O\"\ncomputer_symbol = \"X\"\nseed = 9\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.human_symbol(), Mark::O);
    assert_eq!(*config.seed(), Some(9));
    assert_eq!(*config.computer_delay_ms(), 500);

    let game = config.build_game().unwrap();
    assert_eq!(game.human().symbol(), Mark::O);
    assert_eq!(game.computer().symbol(), Mark::X);
}

#[test]
fn test_missing_file_is_error() {
    let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let file = write_config("board_size = \"three\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_shared_symbols_rejected() {
    let file = write_config("human_symbol = \"X\"\ncomputer_symbol = \"X\"\n");
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_zero_board_rejected() {
    let config = GameConfig::default().with_board_size(0);
    assert!(config.validate().is_err());
    assert!(config.build_game().is_err());
}

#[test]
fn test_oversized_board_rejected() {
    let config = GameConfig::default().with_board_size(100_000);
    let err = config.validate().unwrap_err();
    assert!(err.message.contains("exceeds the maximum of 64"));
    assert!(config.build_game().is_err());

    let file = write_config("board_size = 4294967296\n");
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_largest_board_accepted() {
    let config = GameConfig::default().with_board_size(Board::MAX_SIZE);
    assert!(config.validate().is_ok());
    assert_eq!(config.build_game().unwrap().board().size(), Board::MAX_SIZE);
}

#[test]
fn test_load_without_path_uses_defaults() {
    assert_eq!(GameConfig::load(None).unwrap(), GameConfig::default());
}

#[test]
fn test_same_seed_same_opening() {
    let config = GameConfig::default().with_seed(1234);
    let a = config.build_game().unwrap();
    let b = config.build_game().unwrap();
    assert_eq!(a.current_side(), b.current_side());
}
