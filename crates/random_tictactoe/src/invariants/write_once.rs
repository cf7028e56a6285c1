//! Write-once board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: replaying the move history onto an empty board never hits an
/// occupied cell and reproduces the current board.
pub struct WriteOnceBoard;

impl<R> Invariant<Game<R>> for WriteOnceBoard {
    fn holds(game: &Game<R>) -> bool {
        let Ok(mut replay) = Board::new(game.board().size()) else {
            return false;
        };

        for mv in game.history() {
            match replay.set_cell(mv.coord.row, mv.coord.col, mv.mark) {
                Ok(true) => {}
                _ => return false,
            }
        }

        replay == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are write-once (history replays onto the board)"
    }
}
