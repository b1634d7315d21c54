//! First-class action types for cubic tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record which mark
//! landed where and can be replayed to rebuild a game.

use super::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a mark placed at a flat cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Flat index of the cell.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, index: usize) -> Self {
        Self { mark, index }
    }

    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the cell index of this move.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is a local logical rejection. The interaction layer
/// ignores them; they never leave the board half-updated.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// A result has already been recorded for this game.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The index does not address a cell of the board.
    #[display("Cell index {} is out of bounds", _0)]
    InvalidIndex(usize),

    /// A replayed move carried the wrong mark for its turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Mark),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
