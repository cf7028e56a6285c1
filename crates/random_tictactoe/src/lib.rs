//! Game-state core for tic-tac-toe against a random-move computer.
//!
//! # Architecture
//!
//! - **Board**: the grid of cell marks, with legality, fullness and win queries
//! - **Game**: turn sequencing and game-over state over an exclusively owned board
//! - **Players**: a passive human symbol holder and a uniform-random computer policy
//! - **Rules**: pure win/draw functions the board delegates to
//! - **Invariants**: properties checked after every accepted move
//!
//! The core performs no I/O. Randomness is injected through [`rand::Rng`] so games
//! can be replayed from a seed.
//!
//! # Example
//!
//! ```
//! use random_tictactoe::{Game, MoveOutcome};
//!
//! let mut game = Game::with_seed(7);
//! if game.is_current_player_computer() {
//!     game.computer_move();
//! }
//! let outcome = game.make_move(1, 1).expect("in bounds");
//! assert!(matches!(
//!     outcome,
//!     Some(MoveOutcome::Continue) | Some(MoveOutcome::Invalid)
//! ));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod invariants;
mod players;
pub mod rules;
mod types;

pub use board::Board;
pub use error::{BoardError, BoardErrorKind, GameError, GameErrorKind};
pub use game::{evaluate, Game, GameStatus, MoveOutcome};
pub use invariants::{
    AlternatingTurns, GameInvariants, GameOverConsistent, Invariant, InvariantSet,
    InvariantViolation, WriteOnceBoard,
};
pub use players::{ComputerPlayer, HumanPlayer, Participant};
pub use types::{Cell, Coord, Mark, Move, Side, WinningLine};
