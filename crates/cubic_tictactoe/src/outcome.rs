//! Outcome of a finished game.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Result recorded once a game ends.
///
/// Produced once per game and never mutated afterwards; only a reset
/// clears it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum WinResult {
    /// A mark completed a line.
    Winner {
        /// The winning mark.
        mark: Mark,
        /// The S cells of the winning line, in catalog order.
        positions: Vec<usize>,
    },
    /// The board filled up with no completed line.
    Draw,
}

impl WinResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            WinResult::Winner { mark, .. } => Some(*mark),
            WinResult::Draw => None,
        }
    }

    /// Returns the winning cells (empty on a draw).
    pub fn positions(&self) -> &[usize] {
        match self {
            WinResult::Winner { positions, .. } => positions,
            WinResult::Draw => &[],
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, WinResult::Draw)
    }

    /// First and last cell of the winning line, used to draw it.
    pub fn endpoints(&self) -> Option<(usize, usize)> {
        let positions = self.positions();
        Some((*positions.first()?, *positions.last()?))
    }
}

impl std::fmt::Display for WinResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinResult::Winner { mark, .. } => write!(f, "Winner is: {}", mark),
            WinResult::Draw => write!(f, "Draw!"),
        }
    }
}
