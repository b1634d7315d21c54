//! Contract-based validation for cubic tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} action {Q}`.

use super::action::{Move, MoveError};
use super::engine::Engine;
use super::invariants::{CubicInvariants, InvariantSet};
use tracing::{debug, instrument};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: no result has been recorded yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game has a result.
    #[instrument(skip_all)]
    pub fn check(engine: &Engine) -> Result<(), MoveError> {
        if engine.is_over() {
            debug!("Rejecting move: game already over");
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index addresses a cell of the board.
pub struct IndexInBounds;

impl IndexInBounds {
    /// Rejects indices outside `[0, S³)`.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &Engine) -> Result<(), MoveError> {
        if engine.size().contains(mov.index) {
            Ok(())
        } else {
            debug!("Rejecting move: index out of bounds");
            Err(MoveError::InvalidIndex(mov.index))
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied cell.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &Engine) -> Result<(), MoveError> {
        if engine.board().is_empty(mov.index) {
            Ok(())
        } else {
            debug!("Rejecting move: cell occupied");
            Err(MoveError::CellOccupied(mov.index))
        }
    }
}

/// Precondition: the move carries the mark whose turn it is.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a mark played out of turn.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &Engine) -> Result<(), MoveError> {
        if mov.mark == engine.current_player() {
            Ok(())
        } else {
            debug!("Rejecting move: wrong player");
            Err(MoveError::WrongPlayer(mov.mark))
        }
    }
}

/// Composite precondition, checked in the order rejections are reported.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &Engine) -> Result<(), MoveError> {
        GameNotOver::check(engine)?;
        IndexInBounds::check(mov, engine)?;
        CellIsEmpty::check(mov, engine)?;
        PlayersTurn::check(mov, engine)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions: the board is monotonic, marks alternate, and the history
/// matches the occupied cells.
pub struct MoveContract;

impl Contract<Engine, Move> for MoveContract {
    fn pre(engine: &Engine, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, engine)
    }

    fn post(_before: &Engine, after: &Engine) -> Result<(), MoveError> {
        CubicInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
