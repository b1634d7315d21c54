//! Tests for pointer picking driving the selection state machine.

use cubic_tictactoe::{
    CellLayout, CommitOutcome, GameEvent, GridSize, Interaction, Mark, Ray, RayPicker,
    SelectionState,
};

/// Ray from the default camera position through the centre of `index`.
fn aim(layout: &CellLayout, index: usize) -> Ray {
    let target = layout.center(index).expect("cell in bounds");
    Ray::toward([-10.0, -10.0, -15.0], target)
}

#[test]
fn test_ray_hover_and_commit() {
    let layout = CellLayout::default();
    let picker = RayPicker::new(layout);
    let mut ui = Interaction::default();

    // Cell 0 is the corner nearest the camera, so aiming at it picks it.
    assert_eq!(ui.pointer_at(&picker, &aim(&layout, 0)), SelectionState::Hovering(0));
    assert_eq!(ui.commit(), CommitOutcome::Placed(0));

    // The same ray now resolves to an occupied cell.
    assert_eq!(ui.pointer_at(&picker, &aim(&layout, 0)), SelectionState::Idle);
    assert_eq!(ui.commit(), CommitOutcome::Ignored);
    assert_eq!(ui.engine().current_player(), Mark::O);
}

#[test]
fn test_ray_missing_board_is_idle() {
    let picker = RayPicker::default();
    let mut ui = Interaction::default();
    ui.pointer_moved(Some(5));
    let away = Ray::new([-10.0, -10.0, -15.0], [-1.0, 0.0, 0.0]);
    assert_eq!(ui.pointer_at(&picker, &away), SelectionState::Idle);
    assert_eq!(ui.highlighted(), None);
}

#[test]
fn test_full_game_through_interaction() {
    let mut ui = Interaction::default();
    for index in [13, 0, 4, 1, 22] {
        ui.pointer_moved(Some(index));
        ui.commit();
    }
    // X holds 13, 4, 22: the column through the layers at row 1, col 1.
    assert_eq!(ui.state(), SelectionState::GameOver);
    let result = ui.engine().win_result().expect("game over");
    assert_eq!(result.positions(), &[4, 13, 22]);

    let layout = CellLayout::default();
    assert_eq!(
        layout.win_segment(result),
        Some(([0.0, -2.5, 0.0], [0.0, 2.5, 0.0]))
    );
}

#[test]
fn test_highlight_never_survives_a_commit() {
    let mut ui = Interaction::default();
    ui.pointer_moved(Some(7));
    ui.commit();
    assert_eq!(ui.highlighted(), None);
    let events = ui.drain_events();
    assert!(events.contains(&GameEvent::HighlightChanged {
        previous: Some(7),
        current: None,
    }));
}

#[test]
fn test_change_size_mid_game() {
    let mut ui = Interaction::default();
    ui.pointer_moved(Some(3));
    ui.commit();
    let five = GridSize::new(5).expect("supported size");
    ui.reset(five);
    assert_eq!(ui.engine().board().cells().len(), 125);
    assert_eq!(ui.engine().lines().len(), 3 * 25 + 30 + 4);
    assert_eq!(ui.pointer_moved(Some(124)), SelectionState::Hovering(124));
}
