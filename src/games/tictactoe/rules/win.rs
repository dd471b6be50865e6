//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use tracing::instrument;

/// The 8 winning triples, enumerated rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line of three identical marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    mark: Mark,
    indices: [usize; 3],
}

impl WinningLine {
    /// Mark that completed the line.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Board indices of the line, in ascending order.
    pub fn indices(&self) -> [usize; 3] {
        self.indices
    }

    /// Checks if `index` lies on this line.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}

/// Returns the first line in [`LINES`] order fully held by `mark`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    let target = Some(Square::Occupied(mark));
    LINES
        .iter()
        .find(|line| line.iter().all(|&i| board.get(i) == target))
        .map(|&indices| WinningLine { mark, indices })
}

/// Returns the first completed line for either mark.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a)?.mark()?;
        let held = Some(Square::Occupied(mark));
        (board.get(b) == held && board.get(c) == held).then_some(WinningLine {
            mark,
            indices: [a, b, c],
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, indices: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in indices {
            board.place_mark(i, mark);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board, Mark::X), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let board = board_with(Mark::O, &line);
            let found = winning_line(&board, Mark::O).expect("line should win");
            assert_eq!(found.indices(), line);
            assert_eq!(found.mark(), Mark::O);
            assert_eq!(winning_line(&board, Mark::X), None);
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::X, &[0, 1, 4, 5]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Mark::X, &[0, 1]);
        board.place_mark(2, Mark::O);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // Row 0 and column 0 both complete; the row comes first.
        let board = board_with(Mark::X, &[0, 1, 2, 3, 6]);
        let line = check_winner(&board).expect("winner");
        assert_eq!(line.indices(), [0, 1, 2]);
        assert!(line.contains(1));
        assert!(!line.contains(3));
    }
}
