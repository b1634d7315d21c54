//! Cubic tic-tac-toe - rules engine for S×S×S boards
//!
//! Pure game logic for tic-tac-toe on a cube of edge length 2 to 5, with
//! no rendering. A presentation layer reads the engine's state, feeds it
//! picking results and commands, and drains events to know what to redraw.
//!
//! # Architecture
//!
//! - **Lines**: the winning-line catalog for a size, in a fixed order
//! - **Rules**: pure evaluation of a board against the catalog
//! - **Engine**: owned board, turn flag and result, with contract checks
//! - **Interaction**: hover/commit state machine on top of the engine
//! - **Geometry**: cell placement in world space and ray picking
//!
//! # Example
//!
//! ```
//! use cubic_tictactoe::{Interaction, Mark, SelectionState, WinResult};
//!
//! let mut ui = Interaction::default();
//! for cell in [0, 9, 1, 10, 2] {
//!     ui.pointer_moved(Some(cell));
//!     ui.commit();
//! }
//! assert_eq!(ui.state(), SelectionState::GameOver);
//! assert_eq!(
//!     ui.engine().win_result(),
//!     Some(&WinResult::Winner { mark: Mark::X, positions: vec![0, 1, 2] })
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod events;
mod geometry;
mod interaction;
mod invariants;
mod lines;
mod outcome;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{
    CellIsEmpty, Contract, GameNotOver, IndexInBounds, LegalMove, MoveContract, PlayersTurn,
};
pub use engine::Engine;
pub use events::GameEvent;
pub use geometry::{Aabb, CellLayout, Picker, Ray, RayPicker, Vec3};
pub use interaction::{CommitOutcome, Interaction, SelectionState};
pub use invariants::{
    AlternatingTurnInvariant, CubicInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use lines::{Line, LineCatalog, generate_lines, line_count};
pub use outcome::WinResult;
pub use rules::evaluate;
pub use types::{Board, Cell, Coord, GridSize, Mark, SizeError};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{Board, Cell, GridSize, Mark};

    /// A full 4×4×4 board with no completed line, one layer per row.
    pub const DRAWN_4: [&str; 4] = [
        "XXXO OOOX OXOO XXXO",
        "OOXO OXOX OOXX XOOX",
        "OXXX OXOX XOOO OOOX",
        "OXOX XXXO OOXX XOXX",
    ];

    pub fn drawn_board() -> Board {
        let cells = DRAWN_4
            .iter()
            .flat_map(|layer| layer.chars())
            .filter_map(|c| match c {
                'X' => Some(Cell::Occupied(Mark::X)),
                'O' => Some(Cell::Occupied(Mark::O)),
                _ => None,
            })
            .collect();
        Board::from_cells(GridSize::new(4).unwrap(), cells).unwrap()
    }
}
