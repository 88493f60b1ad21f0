//! Tests for App input translation and action handling.
//!
//! Responsibilities:
//! - Verify key bindings map to the right Actions.
//! - Verify `App::update` returns the timer commands the runtime must apply.
//! - Verify selection and mouse hit-testing.
//!
//! Does NOT handle:
//! - Pixel-level rendering (see render_tests.rs).

mod helpers;

use ba_roadmap::action::Action;
use ba_roadmap::app::{AppLayout, HEADER_HEIGHT};
use ba_roadmap::content::Phase;
use ba_roadmap::tour::{TimerCommand, TourStatus, TourStep};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseEventKind};
use helpers::*;
use roadmap_config::ColorTheme;

#[test]
fn test_quit_keys() {
    let app = app_on(Phase::Foundation);
    assert_eq!(app.handle_input(key('q')), Some(Action::Quit));
    assert_eq!(app.handle_input(esc_key()), Some(Action::Quit));
    assert_eq!(app.handle_input(ctrl_key('c')), Some(Action::Quit));
}

#[test]
fn test_number_keys_select_phases() {
    let app = app_on(Phase::Foundation);
    assert_eq!(
        app.handle_input(key('1')),
        Some(Action::SelectPhase(Phase::Foundation))
    );
    assert_eq!(
        app.handle_input(key('4')),
        Some(Action::SelectPhase(Phase::AiIntegration))
    );
    assert_eq!(app.handle_input(key('5')), None);
}

#[test]
fn test_navigation_and_control_keys() {
    let app = app_on(Phase::Foundation);
    assert_eq!(app.handle_input(tab_key()), Some(Action::NextPhase));
    assert_eq!(app.handle_input(backtab_key()), Some(Action::PreviousPhase));
    assert_eq!(app.handle_input(down_key()), Some(Action::SelectNext));
    assert_eq!(app.handle_input(key('k')), Some(Action::SelectPrevious));
    assert_eq!(app.handle_input(up_key()), Some(Action::SelectPrevious));
    assert_eq!(app.handle_input(enter_key()), Some(Action::ToggleSelected));
    assert_eq!(app.handle_input(key(' ')), Some(Action::ToggleSelected));
    assert_eq!(app.handle_input(key('r')), Some(Action::RestartTour));
    assert_eq!(app.handle_input(key('s')), Some(Action::StopTour));
    assert_eq!(app.handle_input(key('t')), Some(Action::ToggleTheme));
}

#[test]
fn test_key_release_is_ignored() {
    let app = app_on(Phase::Foundation);
    let release = KeyEvent {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(app.handle_input(release), None);
}

#[test]
fn test_app_starts_idle_without_timer() {
    let app = app_on(Phase::Intermediate);
    assert_eq!(app.machine.status(), TourStatus::Idle);
    assert_eq!(app.machine.active_phase(), Phase::Intermediate);
    assert_eq!(app.tour_status_label(), "Idle");
}

#[test]
fn test_select_phase_schedules_reveal_and_starts_transition() {
    let mut app = app_on(Phase::Foundation);
    let command = app.update(Action::SelectPhase(Phase::Advanced)).unwrap();

    assert_eq!(
        command.scheduled().unwrap().step,
        TourStep::Reveal { cursor: 0 }
    );
    assert_eq!(app.machine.active_phase(), Phase::Advanced);
    assert!(app.transition.is_some());
    assert_eq!(app.tour_status_label(), "Touring 1/4");
}

#[test]
fn test_transition_finishes_after_ticks() {
    let mut app = app_on(Phase::Foundation);
    app.update(Action::NextPhase);
    for _ in 0..19 {
        assert!(app.update(Action::Tick).is_none());
    }
    assert!(app.transition.is_some());
    app.update(Action::Tick);
    assert!(app.transition.is_none());
}

#[test]
fn test_previous_phase_wraps() {
    let mut app = app_on(Phase::Foundation);
    app.update(Action::PreviousPhase);
    assert_eq!(app.machine.active_phase(), Phase::AiIntegration);
}

#[test]
fn test_toggle_selected_expands_and_cancels_timer() {
    let mut app = app_on(Phase::Intermediate);
    app.update(Action::RestartTour);
    app.update(Action::SelectNext);

    let command = app.update(Action::ToggleSelected);
    assert_eq!(command, Some(TimerCommand::Cancel));
    assert!(app.machine.is_expanded("sql"));
    assert_eq!(app.machine.status(), TourStatus::Idle);
    assert_eq!(app.selected_id().as_deref(), Some("sql"));
}

#[test]
fn test_stale_timer_returns_no_command() {
    let mut app = app_on(Phase::Foundation);
    let stale = app.update(Action::RestartTour).unwrap().scheduled().unwrap();
    app.update(Action::StopTour);
    assert_eq!(app.update(Action::TourTimer(stale)), None);
}

#[test]
fn test_timer_step_moves_tour_forward() {
    let mut app = app_on(Phase::AiIntegration);
    let step = app.update(Action::RestartTour).unwrap().scheduled().unwrap();
    let next = app.update(Action::TourTimer(step)).unwrap();

    assert!(app.machine.is_expanded("ml-basics"));
    assert_eq!(next.scheduled().unwrap().step, TourStep::Advance { cursor: 0 });
    assert_eq!(app.visible_rows().len(), 6);
}

#[test]
fn test_selection_is_clamped_when_rows_collapse() {
    let mut app = app_on(Phase::AiIntegration);
    app.update(Action::ToggleTopic("ai-fundamentals".into()));
    for _ in 0..5 {
        app.update(Action::SelectNext);
    }
    assert_eq!(app.selected, 5);

    app.update(Action::RestartTour);
    assert_eq!(app.selected, 3);
}

#[test]
fn test_select_next_stops_at_last_row() {
    let mut app = app_on(Phase::Foundation);
    for _ in 0..10 {
        app.update(Action::SelectNext);
    }
    assert_eq!(app.selected, 3);
    app.update(Action::SelectPrevious);
    assert_eq!(app.selected, 2);
}

#[test]
fn test_toggle_theme_changes_only_colors() {
    let mut app = app_on(Phase::Foundation);
    app.update(Action::ToggleTopic("documentation".into()));
    let before = app.machine.state();

    assert_eq!(app.update(Action::ToggleTheme), None);
    assert_eq!(app.color_theme, ColorTheme::Dark);
    assert_eq!(app.machine.state(), before);
    assert!(app.machine.is_expanded("documentation"));
}

#[test]
fn test_mouse_click_on_phase_button() {
    let mut app = app_on(Phase::Foundation);
    let layout = AppLayout::calculate(app.last_area);
    let target = layout.phase_buttons[2];

    let action = app.handle_mouse(click(target.x + 1, HEADER_HEIGHT + 1));
    assert_eq!(action, Some(Action::SelectPhase(Phase::Advanced)));
}

#[test]
fn test_mouse_click_on_topic_row_toggles_it() {
    let mut app = app_on(Phase::Foundation);
    let layout = AppLayout::calculate(app.last_area);
    let inner = layout.topics_inner;

    let action = app.handle_mouse(click(inner.x + 2, inner.y + 2));
    assert_eq!(action, Some(Action::ToggleTopic("documentation".into())));
    assert_eq!(app.selected, 2);
}

#[test]
fn test_mouse_click_below_rows_is_ignored() {
    let mut app = app_on(Phase::Foundation);
    let layout = AppLayout::calculate(app.last_area);
    let inner = layout.topics_inner;
    assert_eq!(app.handle_mouse(click(inner.x + 2, inner.y + 10)), None);
}

#[test]
fn test_mouse_click_on_restart_button() {
    let mut app = app_on(Phase::Foundation);
    let layout = AppLayout::calculate(app.last_area);
    let button = layout.restart_button;
    assert_eq!(
        app.handle_mouse(click(button.x + 1, button.y)),
        Some(Action::RestartTour)
    );
}

#[test]
fn test_mouse_scroll_moves_selection() {
    let mut app = app_on(Phase::Foundation);
    assert_eq!(
        app.handle_mouse(scroll(MouseEventKind::ScrollDown)),
        Some(Action::SelectNext)
    );
    assert_eq!(
        app.handle_mouse(scroll(MouseEventKind::ScrollUp)),
        Some(Action::SelectPrevious)
    );
}
