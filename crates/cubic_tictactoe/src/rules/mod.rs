//! Game rules for cubic tic-tac-toe.
//!
//! Pure functions evaluating a board against the line catalog. Rules are
//! kept apart from board storage so the engine and the contract checks can
//! compose them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use super::{Board, LineCatalog, WinResult};
use tracing::instrument;

/// Evaluates the board.
///
/// Returns the first completed line in catalog order, a draw when the
/// board is full without one, and `None` while the game goes on.
#[instrument(skip_all, fields(size = %catalog.size()))]
pub fn evaluate(board: &Board, catalog: &LineCatalog) -> Option<WinResult> {
    if let Some((mark, line)) = check_winner(board, catalog) {
        return Some(WinResult::Winner {
            mark,
            positions: line.clone(),
        });
    }
    is_full(board).then_some(WinResult::Draw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GridSize, Mark};

    #[test]
    fn test_empty_board_continues() {
        for s in GridSize::MIN..=GridSize::MAX {
            let size = GridSize::new(s).unwrap();
            assert_eq!(evaluate(&Board::new(size), &LineCatalog::new(size)), None);
        }
    }

    #[test]
    fn test_space_diagonal_win() {
        let mut board = Board::default();
        for i in [0, 13, 26] {
            board.set(i, Cell::Occupied(Mark::O)).unwrap();
        }
        assert_eq!(
            evaluate(&board, &LineCatalog::default()),
            Some(WinResult::Winner {
                mark: Mark::O,
                positions: vec![0, 13, 26],
            })
        );
    }

    #[test]
    fn test_first_line_in_catalog_wins_ties() {
        // X completes row [0,1,2] and column [0,3,6] at once.
        let mut board = Board::default();
        for i in [0, 1, 2, 3, 6] {
            board.set(i, Cell::Occupied(Mark::X)).unwrap();
        }
        let result = evaluate(&board, &LineCatalog::default());
        assert_eq!(result.as_ref().map(WinResult::positions), Some(&[0, 1, 2][..]));
    }
}
