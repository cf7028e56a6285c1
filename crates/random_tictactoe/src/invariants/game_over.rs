//! Game-over consistency: the flag matches the board.

use super::Invariant;
use crate::Game;

/// Invariant: the game is over exactly when the board has a complete line
/// or is full.
pub struct GameOverConsistent;

impl<R> Invariant<Game<R>> for GameOverConsistent {
    fn holds(game: &Game<R>) -> bool {
        let board = game.board();
        let terminal = board.winning_line().is_some() || board.is_full();
        game.is_game_over() == terminal
    }

    fn description() -> &'static str {
        "Game over iff a line is complete or the board is full"
    }
}
