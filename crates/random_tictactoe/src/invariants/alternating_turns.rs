//! Alternating turn invariant: the two sides take turns.

use super::Invariant;
use crate::Game;

/// Invariant: consecutive moves come from different sides, and the side to
/// move is the one that did not move last (unless the game is over, in
/// which case the last mover stays current).
pub struct AlternatingTurns;

impl<R> Invariant<Game<R>> for AlternatingTurns {
    fn holds(game: &Game<R>) -> bool {
        let history = game.history();

        if history.windows(2).any(|pair| pair[0].side == pair[1].side) {
            return false;
        }

        match history.last() {
            None => true,
            Some(last) if game.is_game_over() => game.current_side() == last.side,
            Some(last) => game.current_side() == last.side.other(),
        }
    }

    fn description() -> &'static str {
        "Human and computer alternate turns"
    }
}
