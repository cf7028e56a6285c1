//! Error types for board access and game construction.

use crate::types::Mark;
use derive_more::{Display, Error};

/// What went wrong when touching the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// Coordinates fall outside the grid.
    #[display("cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the board.
        size: usize,
    },
    /// A board needs at least one cell.
    #[display("board size must be at least 1")]
    ZeroSize,
    /// Requested side length exceeds [`Board::MAX_SIZE`](crate::Board::MAX_SIZE).
    #[display("board size {size} exceeds the maximum of {max}")]
    TooLarge {
        /// Requested side length.
        size: usize,
        /// Largest supported side length.
        max: usize,
    },
    /// Serialized grid does not hold `size * size` cells.
    #[display("a {size}x{size} board needs {} cells, got {cells}", size * size)]
    GridMismatch {
        /// Declared side length.
        size: usize,
        /// Number of cells supplied.
        cells: usize,
    },
}

/// Board error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// Error kind.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// What went wrong when assembling a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Both players were given the same symbol.
    #[display("human and computer cannot both play {}", _0)]
    SharedSymbol(Mark),
}

/// Game construction error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// Error kind.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
