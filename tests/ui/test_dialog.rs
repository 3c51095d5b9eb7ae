//! Rendering tests for dialogs

use crossterm::event::{KeyCode, KeyEvent};
use insta::assert_snapshot;

use crate::common::{FakeSource, Harness, NIGHTLY_VERSION, UNOFFICIAL_VERSION, device_info};
use crate::{contains, draw_app};

#[test]
fn test_advisory_dialog_rendered() {
    let harness = Harness::new(FakeSource::returning(Vec::new()));
    let mut app = harness.app(UNOFFICIAL_VERSION, false);
    app.start();

    let lines = draw_app(&mut app, 100, 24);
    assert!(contains(&lines, "Unofficial build"), "{lines:#?}");
    assert!(contains(&lines, "[OK]"));
}

#[test]
fn test_device_info_dialog_rendered() {
    let harness = Harness::new(FakeSource::returning(Vec::new()));
    let mut app = harness.app(NIGHTLY_VERSION, false);
    app.start();
    app.on_key_event(KeyEvent::from(KeyCode::Char('i')));

    let lines = draw_app(&mut app, 100, 24);
    assert!(contains(&lines, "Device info"), "{lines:#?}");
    assert!(contains(&lines, "Device: hammerhead"));
    assert!(contains(&lines, "Update channel: NIGHTLY"));
}

#[test]
fn test_device_summary_snapshot() {
    let info = device_info(NIGHTLY_VERSION);
    assert_snapshot!(info.summary(), @r"
    Device: hammerhead

    Running: 13.0-20160130-NIGHTLY-hammerhead

    Update channel: NIGHTLY
    ");
}
