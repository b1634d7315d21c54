//! Application state and logic.

use cubic_tictactoe::{
    CommitOutcome, Coord, Engine, GameEvent, GridSize, Interaction, Picker, WinResult,
};
use tracing::{debug, info, trace};

use crate::input::{Action, move_cursor};

/// Main application state.
#[derive(Debug)]
pub struct App {
    ui: Interaction,
    cursor: Coord,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates an application with a fresh game of edge length `size`.
    pub fn new(size: GridSize) -> Self {
        Self {
            ui: Interaction::new(Engine::new(size)),
            cursor: Coord::new(0, 0, 0),
            status_message: "X's move".to_string(),
            should_quit: false,
        }
    }

    /// The selection state machine and its engine.
    pub fn interaction(&self) -> &Interaction {
        &self.ui
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a keyboard action.
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::Move(step) => {
                self.cursor = move_cursor(self.cursor, step, self.size());
                self.hover_cursor();
            }
            Action::Commit => {
                self.hover_cursor();
                self.commit();
            }
            Action::Reset => self.restart(self.size()),
            Action::Grow => match self.size().grow() {
                Some(size) => self.restart(size),
                None => self.status_message = format!("{} is the largest cube", self.size()),
            },
            Action::Shrink => match self.size().shrink() {
                Some(size) => self.restart(size),
                None => self.status_message = format!("{} is the smallest cube", self.size()),
            },
            Action::Quit => self.should_quit = true,
        }
    }

    /// Handles a pointer hovering at a screen position.
    pub fn pointer_moved<P: Picker>(&mut self, picker: &P, pointer: &P::Pointer) {
        let target = picker.pick(pointer);
        if let Some(coord) = target.and_then(|index| Coord::from_index(index, self.size())) {
            self.cursor = coord;
        }
        self.ui.pointer_moved(target);
    }

    /// Handles a click: hover, then commit.
    pub fn clicked<P: Picker>(&mut self, picker: &P, pointer: &P::Pointer) {
        self.pointer_moved(picker, pointer);
        self.commit();
    }

    /// Drains engine events into the status line.
    pub fn process_events(&mut self) {
        for event in self.ui.drain_events() {
            trace!(?event, "Game event");
            match event {
                GameEvent::TurnChanged { mark } => {
                    self.status_message = format!("{}'s move", mark);
                }
                GameEvent::GameOver { result } => {
                    self.status_message = match &result {
                        WinResult::Winner { positions, .. } => format!(
                            "{} on cells {:?}. Press 'r' to restart or 'q' to quit.",
                            result, positions
                        ),
                        WinResult::Draw => {
                            format!("{} Press 'r' to restart or 'q' to quit.", result)
                        }
                    };
                }
                GameEvent::BoardReset { size } => {
                    self.status_message = format!("New {0}×{0}×{0} game. X's move", size);
                }
                GameEvent::MarkPlaced { .. } | GameEvent::HighlightChanged { .. } => {}
            }
        }
    }

    fn size(&self) -> GridSize {
        self.ui.engine().size()
    }

    fn hover_cursor(&mut self) {
        let index = self.cursor.to_index(self.size());
        self.ui.pointer_moved(index);
    }

    fn commit(&mut self) {
        match self.ui.commit() {
            CommitOutcome::Rejected | CommitOutcome::Ignored => {
                if !self.ui.engine().is_over() {
                    self.status_message = "Pick an empty cell".to_string();
                }
            }
            CommitOutcome::Placed(index) | CommitOutcome::Finished(index) => {
                debug!(index, "Mark placed");
            }
        }
    }

    fn restart(&mut self, size: GridSize) {
        info!(%size, "Restarting game");
        self.ui.reset(size);
        self.cursor = Coord::new(0, 0, 0);
        self.process_events();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Step;
    use cubic_tictactoe::{Mark, SelectionState};

    fn play(app: &mut App, cells: &[usize]) {
        let size = app.interaction().engine().size();
        for &cell in cells {
            app.cursor = Coord::from_index(cell, size).unwrap();
            app.handle_action(Action::Commit);
            app.process_events();
        }
    }

    #[test]
    fn test_cursor_hovers_empty_cell() {
        let mut app = App::new(GridSize::DEFAULT);
        app.handle_action(Action::Move(Step::Right));
        assert_eq!(app.interaction().state(), SelectionState::Hovering(1));
    }

    #[test]
    fn test_commit_updates_status() {
        let mut app = App::new(GridSize::DEFAULT);
        play(&mut app, &[13]);
        assert_eq!(app.status_message(), "O's move");
        assert_eq!(app.interaction().engine().board().get(13).and_then(|c| c.mark()), Some(Mark::X));
    }

    #[test]
    fn test_commit_on_occupied_cell_is_ignored() {
        let mut app = App::new(GridSize::DEFAULT);
        play(&mut app, &[13, 13]);
        assert_eq!(app.status_message(), "Pick an empty cell");
        assert_eq!(app.interaction().engine().history().len(), 1);
    }

    #[test]
    fn test_win_status() {
        let mut app = App::new(GridSize::DEFAULT);
        play(&mut app, &[0, 9, 1, 10, 2]);
        assert_eq!(
            app.status_message(),
            "Winner is: X on cells [0, 1, 2]. Press 'r' to restart or 'q' to quit."
        );
        assert_eq!(app.interaction().state(), SelectionState::GameOver);
    }

    #[test]
    fn test_grow_and_reset() {
        let mut app = App::new(GridSize::DEFAULT);
        play(&mut app, &[13]);
        app.handle_action(Action::Grow);
        assert_eq!(app.interaction().engine().size().get(), 4);
        assert_eq!(app.status_message(), "New 4×4×4 game. X's move");
        assert_eq!(app.interaction().engine().board().occupied(), 0);

        app.handle_action(Action::Reset);
        assert_eq!(app.interaction().engine().size().get(), 4);
    }

    #[test]
    fn test_shrink_stops_at_smallest() {
        let mut app = App::new(GridSize::new(2).unwrap());
        app.handle_action(Action::Shrink);
        assert_eq!(app.interaction().engine().size().get(), 2);
        assert_eq!(app.status_message(), "2 is the smallest cube");
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(GridSize::DEFAULT);
        assert!(!app.should_quit());
        app.handle_action(Action::Quit);
        assert!(app.should_quit());
    }
}
