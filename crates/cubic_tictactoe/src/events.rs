//! Notifications for the presentation layer.
//!
//! The engine queues events as state changes; a renderer drains them once
//! per frame to know what to redraw.

use super::{GridSize, Mark, WinResult};
use serde::{Deserialize, Serialize};

/// A state change the presentation layer may react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A mark was placed; draw it.
    MarkPlaced {
        /// Cell index.
        index: usize,
        /// Mark placed.
        mark: Mark,
    },
    /// The turn passed to `mark`; update the turn banner.
    TurnChanged {
        /// Mark to move next.
        mark: Mark,
    },
    /// The game ended; show the banner and the win line.
    GameOver {
        /// Recorded result.
        result: WinResult,
    },
    /// The board was cleared.
    BoardReset {
        /// Edge length of the new board.
        size: GridSize,
    },
    /// The highlighted cell changed.
    HighlightChanged {
        /// Cell that lost its highlight.
        previous: Option<usize>,
        /// Cell now highlighted.
        current: Option<usize>,
    },
}
