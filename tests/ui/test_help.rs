//! Rendering tests for the help view

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Terminal, backend::TestBackend};

use cmlog::ui::widgets::render_help_panel;

use crate::common::{FakeSource, Harness, NIGHTLY_VERSION};
use crate::{contains, draw_app, screen};

#[test]
fn test_help_panel() {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal
        .draw(|frame| render_help_panel(frame, frame.area()))
        .unwrap();

    let lines = screen(&terminal);
    assert!(contains(&lines, "Key bindings:"), "{lines:#?}");
    assert!(contains(&lines, "Refresh changelog"));
    assert!(contains(&lines, "Open change in browser"));
}

#[test]
fn test_help_view_from_app() {
    let harness = Harness::new(FakeSource::returning(Vec::new()));
    let mut app = harness.app(NIGHTLY_VERSION, false);
    app.on_key_event(KeyEvent::from(KeyCode::Char('?')));

    let lines = draw_app(&mut app, 80, 30);
    assert!(contains(&lines, " Help "), "{lines:#?}");
    assert!(contains(&lines, "Device info"));
}
