//! Monotonic board invariant: cells never change once claimed.

use super::super::{Board, Cell, Engine};
use super::Invariant;

/// Invariant: cells only go from empty to occupied.
///
/// Replaying the history onto an empty board must never overwrite a cell
/// and must reproduce the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<Engine> for MonotonicBoardInvariant {
    fn holds(engine: &Engine) -> bool {
        let mut reconstructed = Board::new(engine.size());

        for mov in engine.history() {
            if !reconstructed.is_empty(mov.index) {
                return false;
            }
            if reconstructed.set(mov.index, Cell::Occupied(mov.mark)).is_err() {
                return false;
            }
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Move};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&Engine::default()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut engine = Engine::default();
        for i in [0, 13, 26, 4] {
            engine.apply_move(i).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut engine = Engine::default();
        engine.apply_move(13).unwrap();
        engine.board.set(13, Cell::Occupied(Mark::O)).unwrap();
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_repeated_history_entry_violates() {
        let mut engine = Engine::default();
        engine.apply_move(13).unwrap();
        engine.history.push(Move::new(Mark::O, 13));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}
