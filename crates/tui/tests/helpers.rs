//! Test helpers for TUI testing.
//!
//! Provides utility functions for simulating keyboard and mouse input,
//! building apps over the built-in roadmap, and rendering into a test
//! backend.

#![allow(dead_code)]

use std::sync::Arc;

use ba_roadmap::app::App;
use ba_roadmap::content::{ContentStore, Phase};
use ba_roadmap::tour::{TimerCommand, TourMachine};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use roadmap_config::{RoadmapConfig, TourTimings};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create an Up arrow key event.
pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

/// Create a Tab key event.
pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

/// Create a Shift+Tab key event.
pub fn backtab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Create a left click at the given cell.
pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

/// Create a scroll event at the origin.
pub fn scroll(kind: MouseEventKind) -> MouseEvent {
    MouseEvent {
        kind,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::empty(),
    }
}

/// The built-in roadmap content.
pub fn builtin_content() -> Arc<ContentStore> {
    Arc::new(ContentStore::builtin().expect("built-in roadmap must be valid"))
}

/// Idle tour machine on the first phase with default timings.
pub fn machine() -> TourMachine {
    TourMachine::new(builtin_content(), TourTimings::default())
}

/// Idle app on `phase` with default configuration and an 80x40 area.
pub fn app_on(phase: Phase) -> App {
    let mut app = App::new(&RoadmapConfig::default(), builtin_content(), phase);
    app.last_area = Rect::new(0, 0, 80, 40);
    app
}

/// Fire the step a command scheduled, asserting it is still current.
pub fn fire(machine: &mut TourMachine, command: TimerCommand) -> TimerCommand {
    let step = command.scheduled().expect("expected a scheduled step");
    machine
        .on_timer(step)
        .expect("scheduled step should not be stale")
}

/// Test harness for TUI rendering with a mock terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    /// Create a new test harness with the given terminal dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        let app = App::new(
            &RoadmapConfig::default(),
            builtin_content(),
            Phase::Foundation,
        );
        Self { app, terminal }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        self.terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }
}

/// Convert a ratatui Buffer to a string for assertions.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}
