//! Pointer selection and move commitment.
//!
//! [`Interaction`] sits between the picking layer and the [`Engine`]:
//! pointer updates move the hover highlight, commits turn the highlighted
//! cell into a move. Rejected moves are races between stale pointer state
//! and the board, so they are logged and otherwise ignored.

use super::engine::Engine;
use super::events::GameEvent;
use super::geometry::Picker;
use super::GridSize;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SelectionState {
    /// No cell highlighted.
    #[default]
    Idle,
    /// The pointer rests on an empty cell of a live game.
    Hovering(usize),
    /// Terminal: no highlighting, no moves.
    GameOver,
}

impl SelectionState {
    /// Highlighted cell, if any.
    pub fn highlighted(self) -> Option<usize> {
        match self {
            SelectionState::Hovering(index) => Some(index),
            SelectionState::Idle | SelectionState::GameOver => None,
        }
    }
}

/// Outcome of a commit, for callers that want to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommitOutcome {
    /// Nothing was highlighted, or the game is over.
    Ignored,
    /// The move was rejected by the engine and dropped.
    Rejected,
    /// The move landed and the game goes on.
    Placed(usize),
    /// The move landed and ended the game.
    Finished(usize),
}

/// Selection state machine driving an owned [`Engine`].
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    engine: Engine,
    state: SelectionState,
}

impl Interaction {
    /// Wraps an engine. Starts in `GameOver` if the engine already has a result.
    #[instrument(skip(engine))]
    pub fn new(engine: Engine) -> Self {
        let state = if engine.is_over() {
            SelectionState::GameOver
        } else {
            SelectionState::Idle
        };
        Self { engine, state }
    }

    /// Current selection state.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Cell that should be drawn highlighted.
    pub fn highlighted(&self) -> Option<usize> {
        self.state.highlighted()
    }

    /// The engine behind the selection.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Handles a pointer update resolved to `target` by the picking layer.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn pointer_moved(&mut self, target: Option<usize>) -> SelectionState {
        if self.state == SelectionState::GameOver {
            return self.state;
        }

        let next = match target {
            Some(index) if self.engine.board().is_empty(index) => SelectionState::Hovering(index),
            _ => SelectionState::Idle,
        };
        self.transition(next);
        self.state
    }

    /// Picks through `picker` and handles the result as a pointer update.
    pub fn pointer_at<P: Picker>(&mut self, picker: &P, pointer: &P::Pointer) -> SelectionState {
        let target = picker.pick(pointer);
        self.pointer_moved(target)
    }

    /// Commits the highlighted cell as a move.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn commit(&mut self) -> CommitOutcome {
        let SelectionState::Hovering(index) = self.state else {
            return CommitOutcome::Ignored;
        };

        match self.engine.apply_move(index) {
            Ok(()) if self.engine.is_over() => {
                self.transition(SelectionState::GameOver);
                CommitOutcome::Finished(index)
            }
            Ok(()) => {
                self.transition(SelectionState::Idle);
                CommitOutcome::Placed(index)
            }
            Err(error) => {
                debug!(%error, "Ignoring rejected move");
                self.transition(SelectionState::Idle);
                CommitOutcome::Rejected
            }
        }
    }

    /// Starts a new game of edge length `size`.
    #[instrument(skip(self))]
    pub fn reset(&mut self, size: GridSize) {
        self.transition(SelectionState::Idle);
        self.engine.reset(size);
    }

    /// Takes every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.engine.drain_events()
    }

    /// Moves to `next`, clearing the old highlight first.
    fn transition(&mut self, next: SelectionState) {
        let previous = self.state.highlighted();
        let current = next.highlighted();
        if previous != current {
            debug!(?previous, ?current, "Highlight changed");
            self.engine
                .emit(GameEvent::HighlightChanged { previous, current });
        }
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, WinResult};

    fn highlight_events(events: &[GameEvent]) -> Vec<(Option<usize>, Option<usize>)> {
        events
            .iter()
            .filter_map(|e| match e {
                GameEvent::HighlightChanged { previous, current } => Some((*previous, *current)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_hover_empty_cell() {
        let mut ui = Interaction::default();
        assert_eq!(ui.pointer_moved(Some(4)), SelectionState::Hovering(4));
        assert_eq!(ui.highlighted(), Some(4));
    }

    #[test]
    fn test_hover_occupied_cell_goes_idle() {
        let mut ui = Interaction::default();
        ui.pointer_moved(Some(4));
        ui.commit();
        assert_eq!(ui.pointer_moved(Some(4)), SelectionState::Idle);
        assert_eq!(ui.highlighted(), None);
    }

    #[test]
    fn test_moving_pointer_clears_previous_highlight() {
        let mut ui = Interaction::default();
        ui.pointer_moved(Some(1));
        ui.pointer_moved(Some(2));
        ui.pointer_moved(None);
        assert_eq!(
            highlight_events(&ui.drain_events()),
            vec![(None, Some(1)), (Some(1), Some(2)), (Some(2), None)]
        );
    }

    #[test]
    fn test_same_cell_does_not_rehighlight() {
        let mut ui = Interaction::default();
        ui.pointer_moved(Some(1));
        ui.pointer_moved(Some(1));
        assert_eq!(highlight_events(&ui.drain_events()).len(), 1);
    }

    #[test]
    fn test_commit_from_idle_is_noop() {
        let mut ui = Interaction::default();
        assert_eq!(ui.commit(), CommitOutcome::Ignored);
        assert_eq!(ui.engine().board().occupied(), 0);
    }

    #[test]
    fn test_commit_places_and_returns_to_idle() {
        let mut ui = Interaction::default();
        ui.pointer_moved(Some(13));
        assert_eq!(ui.commit(), CommitOutcome::Placed(13));
        assert_eq!(ui.state(), SelectionState::Idle);
        assert_eq!(ui.engine().current_player(), Mark::O);
    }

    #[test]
    fn test_winning_commit_enters_game_over() {
        let mut ui = Interaction::default();
        for i in [0, 9, 1, 10] {
            ui.pointer_moved(Some(i));
            ui.commit();
        }
        ui.pointer_moved(Some(2));
        assert_eq!(ui.commit(), CommitOutcome::Finished(2));
        assert_eq!(ui.state(), SelectionState::GameOver);
        assert_eq!(
            ui.engine().win_result(),
            Some(&WinResult::Winner {
                mark: Mark::X,
                positions: vec![0, 1, 2],
            })
        );

        // Terminal: no highlight, no moves.
        assert_eq!(ui.pointer_moved(Some(20)), SelectionState::GameOver);
        assert_eq!(ui.commit(), CommitOutcome::Ignored);
        assert_eq!(ui.engine().board().occupied(), 5);
    }

    #[test]
    fn test_out_of_range_target_is_idle() {
        let mut ui = Interaction::default();
        assert_eq!(ui.pointer_moved(Some(99)), SelectionState::Idle);
    }

    #[test]
    fn test_reset_leaves_game_over() {
        let mut ui = Interaction::default();
        for i in [0, 9, 1, 10, 2] {
            ui.pointer_moved(Some(i));
            ui.commit();
        }
        ui.reset(GridSize::new(4).unwrap());
        assert_eq!(ui.state(), SelectionState::Idle);
        assert_eq!(ui.pointer_moved(Some(63)), SelectionState::Hovering(63));
    }

    #[test]
    fn test_new_with_finished_engine_starts_over() {
        let mut engine = Engine::default();
        for i in [0, 9, 1, 10, 2] {
            engine.apply_move(i).unwrap();
        }
        assert_eq!(Interaction::new(engine).state(), SelectionState::GameOver);
    }
}
