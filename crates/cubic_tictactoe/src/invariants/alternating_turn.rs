//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{Engine, Mark};
use super::Invariant;

/// Invariant: marks alternate, starting with X.
///
/// While the game is live the turn flag matches the parity of the history.
/// Once a result exists the flag stays on the mark that ended the game.
pub struct AlternatingTurnInvariant;

impl Invariant<Engine> for AlternatingTurnInvariant {
    fn holds(engine: &Engine) -> bool {
        let history = engine.history();

        let Some(first) = history.first() else {
            return engine.current_player() == Mark::FIRST && !engine.is_over();
        };

        if first.mark != Mark::FIRST {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        let expected = match (engine.is_over(), history.last()) {
            (true, Some(last)) => last.mark,
            _ if history.len() % 2 == 0 => Mark::FIRST,
            _ => Mark::FIRST.opponent(),
        };

        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
