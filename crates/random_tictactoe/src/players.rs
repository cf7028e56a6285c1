//! The two participants: a passive human and a random-move computer.

use crate::board::Board;
use crate::types::{Coord, Mark, Side};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Anything seated at the board.
pub trait Participant {
    /// Mark this participant places.
    fn symbol(&self) -> Mark;

    /// Which side this participant plays.
    fn side(&self) -> Side;
}

/// Human player. Holds a symbol; moves arrive from outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanPlayer {
    symbol: Mark,
}

impl HumanPlayer {
    /// Creates a human playing `symbol`.
    pub fn new(symbol: Mark) -> Self {
        Self { symbol }
    }
}

impl Participant for HumanPlayer {
    fn symbol(&self) -> Mark {
        self.symbol
    }

    fn side(&self) -> Side {
        Side::Human
    }
}

/// Computer player that picks uniformly among the empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerPlayer {
    symbol: Mark,
}

impl ComputerPlayer {
    /// Creates a computer playing `symbol`.
    pub fn new(symbol: Mark) -> Self {
        Self { symbol }
    }

    /// Chooses a move without touching the board.
    ///
    /// Each empty cell is picked with probability 1/k. Returns `None` when
    /// the board is full.
    #[instrument(skip_all, fields(symbol = %self.symbol))]
    pub fn make_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Coord> {
        let candidates = board.empty_cells();
        let choice = candidates.choose(rng).copied();
        debug!(candidates = candidates.len(), ?choice, "Computer chose cell");
        choice
    }
}

impl Participant for ComputerPlayer {
    fn symbol(&self) -> Mark {
        self.symbol
    }

    fn side(&self) -> Side {
        Side::Computer
    }
}
