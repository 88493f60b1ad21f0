//! Rendering tests for the roadmap screen.
//!
//! Renders into a ratatui `TestBackend` and checks the visible text:
//! - Header, phase buttons, banner, tip and footer
//! - Collapsed and expanded topic rows
//! - Tour status and theme in the footer

mod helpers;

use ba_roadmap::action::Action;
use ba_roadmap::content::Phase;
use ba_roadmap::ui::roadmap::{CHEVRON_COLLAPSED, CHEVRON_EXPANDED, TOUR_MARKER};
use helpers::TuiHarness;

#[test]
fn test_initial_screen_shows_all_regions() {
    let mut harness = TuiHarness::new(100, 40);
    let screen = harness.render();

    assert!(screen.contains("Business Analyst Roadmap with AI Integration"));
    for stage in 1..=4 {
        assert!(screen.contains(&format!("Stage {stage}")), "missing stage {stage}");
    }
    assert!(screen.contains("AI Integration"));
    assert!(screen.contains("Foundation Skills"));
    assert!(screen.contains("Business Fundamentals"));
    assert!(screen.contains("Profile tip"));
    assert!(screen.contains("[ Restart tour ]"));
    assert!(screen.contains("Idle"));
    assert!(screen.contains("Light"));
}

#[test]
fn test_collapsed_rows_hide_descriptions() {
    let mut harness = TuiHarness::new(100, 40);
    let screen = harness.render();

    let content = harness.app.machine.content();
    let topic = content.topic("business-fundamentals").unwrap();
    let first_words: String = topic
        .description
        .split_whitespace()
        .take(3)
        .collect::<Vec<_>>()
        .join(" ");
    assert!(!screen.contains(&first_words));
    assert!(screen.contains(CHEVRON_COLLAPSED));
    assert!(!screen.contains(CHEVRON_EXPANDED));
}

#[test]
fn test_expanded_row_shows_description() {
    let mut harness = TuiHarness::new(100, 40);
    harness
        .app
        .update(Action::ToggleTopic("business-fundamentals".into()));
    let screen = harness.render();

    let content = harness.app.machine.content();
    let topic = content.topic("business-fundamentals").unwrap();
    let first_words: String = topic
        .description
        .split_whitespace()
        .take(3)
        .collect::<Vec<_>>()
        .join(" ");
    assert!(screen.contains(&first_words));
    assert!(screen.contains(CHEVRON_EXPANDED));
}

#[test]
fn test_expanded_parent_shows_sub_item_titles() {
    let mut harness = TuiHarness::new(100, 40);
    harness.app.update(Action::SelectPhase(Phase::AiIntegration));
    harness.app.update(Action::StopTour);
    harness
        .app
        .update(Action::ToggleTopic("ai-fundamentals".into()));
    let screen = harness.render();

    let content = harness.app.machine.content();
    for id in ["ml-basics", "ai-ethics"] {
        let title = &content.topic(id).unwrap().title;
        assert!(screen.contains(title.as_str()), "missing {title}");
    }
}

#[test]
fn test_touring_footer_and_cursor_marker() {
    let mut harness = TuiHarness::new(100, 40);
    harness.app.update(Action::SelectPhase(Phase::Intermediate));
    let screen = harness.render();

    assert!(screen.contains("Touring 1/4"));
    assert!(screen.contains("Intermediate Skills"));
    assert!(screen.contains(TOUR_MARKER));
}

#[test]
fn test_footer_lists_restart_and_stop_keys() {
    let mut harness = TuiHarness::new(100, 40);
    let screen = harness.render();
    assert!(screen.contains("r restart"));
    assert!(screen.contains("s stop"));
}

#[test]
fn test_idle_screen_has_no_cursor_marker() {
    let mut harness = TuiHarness::new(100, 40);
    let screen = harness.render();
    assert!(!screen.contains(TOUR_MARKER));
}

#[test]
fn test_theme_toggle_shows_dark() {
    let mut harness = TuiHarness::new(100, 40);
    harness.app.update(Action::ToggleTheme);
    let screen = harness.render();
    assert!(screen.contains("Dark"));
    assert!(!screen.contains("Light"));
}

#[test]
fn test_render_records_last_area() {
    let mut harness = TuiHarness::new(90, 30);
    harness.render();
    assert_eq!(harness.app.last_area.width, 90);
    assert_eq!(harness.app.last_area.height, 30);
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut harness = TuiHarness::new(20, 8);
    harness
        .app
        .update(Action::ToggleTopic("business-fundamentals".into()));
    harness.render();
}

#[test]
fn test_list_scrolls_to_keep_selection_visible() {
    let mut harness = TuiHarness::new(60, 20);
    for id in [
        "business-fundamentals",
        "requirements-elicitation",
        "documentation",
        "data-analysis",
    ] {
        harness.app.update(Action::ToggleTopic(id.into()));
    }
    harness.app.selected = 3;
    let screen = harness.render();

    assert!(harness.app.list_offset > 0);
    let title = harness
        .app
        .machine
        .content()
        .topic("data-analysis")
        .unwrap()
        .title
        .clone();
    assert!(screen.contains(&title));
}
