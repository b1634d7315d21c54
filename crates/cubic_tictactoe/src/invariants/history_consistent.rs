//! History consistency invariant: history length matches occupied cells.

use super::super::{Engine, Mark};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: every occupied cell has exactly one move in the history,
/// and each mark's count on the board matches its moves.
pub struct HistoryConsistentInvariant;

impl Invariant<Engine> for HistoryConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        let history = engine.history();
        history.len() == engine.board().occupied()
            && Mark::iter().all(|mark| {
                engine.board().count(mark) == history.iter().filter(|m| m.mark == mark).count()
            })
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
