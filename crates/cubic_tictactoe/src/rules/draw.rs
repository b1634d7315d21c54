//! Draw detection for cubic tic-tac-toe.

use super::super::{Board, LineCatalog};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip_all)]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no completed line.
#[instrument(skip_all)]
pub fn is_draw(board: &Board, catalog: &LineCatalog) -> bool {
    is_full(board) && check_winner(board, catalog).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GridSize, Mark};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::default()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::default();
        board.set(13, Cell::Occupied(Mark::X)).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_cube_always_has_a_line() {
        // Alternating fill of the 3×3×3 cube completes the space diagonal.
        let cells = (0..27)
            .map(|i| Cell::Occupied(if i % 2 == 0 { Mark::X } else { Mark::O }))
            .collect();
        let board = Board::from_cells(GridSize::DEFAULT, cells).unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board, &LineCatalog::default()));
    }

    #[test]
    fn test_draw_detection() {
        let size = GridSize::new(4).unwrap();
        let board = crate::test_support::drawn_board();
        assert!(is_draw(&board, &LineCatalog::new(size)));
    }
}
