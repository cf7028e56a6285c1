//! Square grid of cell marks.

use crate::error::{BoardError, BoardErrorKind};
use crate::rules;
use crate::types::{Cell, Coord, Mark, WinningLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Square tic-tac-toe board.
///
/// Cells are write-once: [`Board::set_cell`] only fills empty cells, and the
/// only way to clear a cell is [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    grid: Vec<Cell>,
}

impl Board {
    /// Side length of the classic board.
    pub const STANDARD_SIZE: usize = 3;

    /// Largest supported side length.
    pub const MAX_SIZE: usize = 64;

    /// Creates an empty `size` x `size` board.
    ///
    /// `size` must lie in `1..=Board::MAX_SIZE`.
    #[track_caller]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let cells = Self::cell_count(size)?;
        Ok(Self {
            size,
            grid: vec![Cell::Empty; cells],
        })
    }

    #[track_caller]
    fn cell_count(size: usize) -> Result<usize, BoardError> {
        if size == 0 {
            return Err(BoardError::new(BoardErrorKind::ZeroSize));
        }
        let too_large = || {
            BoardError::new(BoardErrorKind::TooLarge {
                size,
                max: Self::MAX_SIZE,
            })
        };
        if size > Self::MAX_SIZE {
            return Err(too_large());
        }
        size.checked_mul(size).ok_or_else(too_large)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Clears every cell.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.grid.fill(Cell::Empty);
        debug!("Board cleared");
    }

    /// Returns the cell at the given coordinates.
    #[track_caller]
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let idx = self.index(row, col)?;
        Ok(self.grid[idx])
    }

    /// Places `mark` if the cell is empty.
    ///
    /// Returns `Ok(false)` and leaves the board untouched when the cell is
    /// already occupied. Out-of-range coordinates are an error.
    #[track_caller]
    pub fn set_cell(&mut self, row: usize, col: usize, mark: Mark) -> Result<bool, BoardError> {
        let idx = self.index(row, col)?;
        if !self.grid[idx].is_empty() {
            debug!(row, col, %mark, "Cell already occupied");
            return Ok(false);
        }
        self.grid[idx] = Cell::Occupied(mark);
        Ok(true)
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.grid.chunks(self.size)
    }

    /// Every cell with its coordinate, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size;
        self.grid
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (Coord::new(idx / size, idx % size), *cell))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the mark holding a complete line, if any.
    pub fn check_winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Returns the first complete line in scan order, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::winning_line(self)
    }

    /// Cell lookup for coordinates produced inside the crate.
    pub(crate) fn at(&self, coord: Coord) -> Cell {
        self.grid[coord.row * self.size + coord.col]
    }

    #[track_caller]
    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::new(BoardErrorKind::OutOfBounds {
                row,
                col,
                size: self.size,
            }));
        }
        Ok(row * self.size + col)
    }
}

/// Wire shape of a [`Board`], checked before it becomes one.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    grid: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let cells = Self::cell_count(raw.size)?;
        if raw.grid.len() != cells {
            return Err(BoardError::new(BoardErrorKind::GridMismatch {
                size: raw.size,
                cells: raw.grid.len(),
            }));
        }
        Ok(Self {
            size: raw.size,
            grid: raw.grid,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: Self::STANDARD_SIZE,
            grid: vec![Cell::Empty; Self::STANDARD_SIZE * Self::STANDARD_SIZE],
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.size].join("+");
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "{}", separator)?;
            }
            let line = row
                .iter()
                .map(|cell| cell.to_string())
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
