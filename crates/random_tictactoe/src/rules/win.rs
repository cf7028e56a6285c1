//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Coord, Mark, WinningLine};
use tracing::instrument;

/// Every line of an `size` x `size` board in scan order.
///
/// Rows top to bottom, columns left to right, then the main diagonal and
/// the anti-diagonal. The first complete line in this order is the winner.
pub fn lines(size: usize) -> impl Iterator<Item = Vec<Coord>> {
    let rows = (0..size).map(move |r| (0..size).map(|c| Coord::new(r, c)).collect::<Vec<_>>());
    let cols = (0..size).map(move |c| (0..size).map(|r| Coord::new(r, c)).collect::<Vec<_>>());
    let main = (0..size).map(|i| Coord::new(i, i)).collect::<Vec<_>>();
    let anti = (0..size)
        .map(|i| Coord::new(i, size - 1 - i))
        .collect::<Vec<_>>();

    rows.chain(cols)
        .chain(std::iter::once(main))
        .chain(std::iter::once(anti))
}

/// Returns the first complete line on the board, if any.
///
/// A line is complete when every cell on it holds the same mark.
#[instrument(level = "trace", skip(board), fields(size = board.size()))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    lines(board.size()).find_map(|line| {
        let first = board.at(*line.first()?).mark()?;
        if line.iter().all(|&coord| board.at(coord).mark() == Some(first)) {
            Some(WinningLine {
                winner: first,
                cells: line,
            })
        } else {
            None
        }
    })
}

/// Returns the mark holding a complete line, if any.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|line| line.winner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::default();
        for &(row, col, mark) in marks {
            board.set_cell(row, col, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_standard_board_has_eight_lines() {
        let all: Vec<_> = lines(3).collect();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
        assert_eq!(all[3], vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]);
        assert_eq!(all[7], vec![Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)]);
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::default();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_middle_column() {
        let board = board_with(&[(0, 1, Mark::X), (1, 1, Mark::X), (2, 1, Mark::X)]);
        let line = winning_line(&board).unwrap();
        assert_eq!(line.winner, Mark::X);
        assert_eq!(
            line.cells,
            vec![Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)]
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(0, 2, Mark::O), (1, 1, Mark::O), (2, 0, Mark::O)]);
        let line = winning_line(&board).unwrap();
        assert_eq!(line.winner, Mark::O);
        assert_eq!(
            line.cells,
            vec![Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, 0, Mark::X), (0, 1, Mark::O), (0, 2, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        // Row 0 and column 0 are both complete; the row comes first.
        let board = board_with(&[
            (0, 0, Mark::X),
            (0, 1, Mark::X),
            (0, 2, Mark::X),
            (1, 0, Mark::X),
            (2, 0, Mark::X),
        ]);
        let line = winning_line(&board).unwrap();
        assert_eq!(line.cells[2], Coord::new(0, 2));
    }

    #[test]
    fn test_four_by_four_needs_full_line() {
        let mut board = Board::new(4).unwrap();
        for col in 0..3 {
            board.set_cell(3, col, Mark::O).unwrap();
        }
        assert_eq!(check_winner(&board), None);
        board.set_cell(3, 3, Mark::O).unwrap();
        let line = winning_line(&board).unwrap();
        assert_eq!(line.cells.len(), 4);
        assert_eq!(line.cells[0], Coord::new(3, 0));
    }
}
