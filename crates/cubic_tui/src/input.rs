//! Keyboard handling and cursor movement.

use crossterm::event::KeyCode;
use cubic_tictactoe::{Coord, GridSize};

/// Cursor step within the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One column left.
    Left,
    /// One column right.
    Right,
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// Previous layer.
    LayerBack,
    /// Next layer.
    LayerForward,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Move(Step),
    /// Place a mark on the highlighted cell.
    Commit,
    /// Start over at the current size.
    Reset,
    /// Start over one size larger.
    Grow,
    /// Start over one size smaller.
    Shrink,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action.
pub fn action_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Left | KeyCode::Char('h') => Action::Move(Step::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Move(Step::Right),
        KeyCode::Up | KeyCode::Char('k') => Action::Move(Step::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Move(Step::Down),
        KeyCode::PageUp | KeyCode::Char('[') => Action::Move(Step::LayerBack),
        KeyCode::PageDown | KeyCode::Char(']') => Action::Move(Step::LayerForward),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Commit,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::Grow,
        KeyCode::Char('-') => Action::Shrink,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves the cursor one step, stopping at the edges of the cube.
pub fn move_cursor(cursor: Coord, step: Step, size: GridSize) -> Coord {
    let last = size.get() - 1;
    let Coord { x, y, z } = cursor;
    match step {
        Step::Left => Coord::new(x.saturating_sub(1), y, z),
        Step::Right => Coord::new((x + 1).min(last), y, z),
        Step::Up => Coord::new(x, y, z.saturating_sub(1)),
        Step::Down => Coord::new(x, y, (z + 1).min(last)),
        Step::LayerBack => Coord::new(x, y.saturating_sub(1), z),
        Step::LayerForward => Coord::new(x, (y + 1).min(last), z),
    }
}
