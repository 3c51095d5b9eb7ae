//! Rendering tests for the changelog list

use std::time::Duration;

use insta::assert_snapshot;

use crate::common::{FakeSource, Harness, NIGHTLY_VERSION, UNOFFICIAL_VERSION, sample_changes};
use crate::{contains, draw_app};

#[test]
fn test_title_snapshot() {
    let harness = Harness::new(FakeSource::returning(Vec::new()));

    let app = harness.app(NIGHTLY_VERSION, false);
    assert_snapshot!(app.title(), @"Changelog · hammerhead · 13.0-20160130-NIGHTLY-hammerhead [official]");

    let app = harness.app(UNOFFICIAL_VERSION, false);
    assert_snapshot!(app.title(), @"Changelog · hammerhead · 13.0-20160130-UNOFFICIAL-hammerhead [unofficial]");
}

#[test]
fn test_rows_rendered() {
    let harness = Harness::new(FakeSource::returning(sample_changes()));
    let mut app = harness.app(NIGHTLY_VERSION, true);
    app.start();
    assert!(app.finish_refresh(Duration::from_secs(5)));

    let lines = draw_app(&mut app, 120, 12);

    assert!(contains(&lines, "Changelog · hammerhead"), "{lines:#?}");
    assert!(contains(&lines, "2016-01-29 15:30"));
    assert!(contains(&lines, "CyanogenMod/device_lge_hammerhead"));
    assert!(contains(&lines, "hammerhead: Update camera blobs"));
    assert!(contains(&lines, "Settings: Fix crash when toggling Wi-Fi"));
    assert!(!contains(&lines, "android_device_lge_hammerhead"));
}

#[test]
fn test_device_project_marked() {
    let harness = Harness::new(FakeSource::returning(sample_changes()));
    let mut app = harness.app(NIGHTLY_VERSION, true);
    app.start();
    assert!(app.finish_refresh(Duration::from_secs(5)));

    let lines = draw_app(&mut app, 120, 12);
    let row = lines
        .iter()
        .find(|l| l.contains("Update camera blobs"))
        .expect("device row");
    assert!(row.contains('●'), "{row}");
}

#[test]
fn test_empty_state() {
    let harness = Harness::new(FakeSource::returning(Vec::new()));
    let mut app = harness.app(NIGHTLY_VERSION, false);
    app.start();
    assert!(app.finish_refresh(Duration::from_secs(5)));

    let lines = draw_app(&mut app, 100, 12);
    assert!(contains(&lines, "No changes loaded"), "{lines:#?}");
    assert!(contains(&lines, "Press r to refresh"));
}

#[test]
fn test_loading_state() {
    let harness = Harness::new(FakeSource::returning(sample_changes()));
    let mut app = harness.app(NIGHTLY_VERSION, true);
    app.start();

    // Result is not applied until polled
    let lines = draw_app(&mut app, 120, 12);
    assert!(contains(&lines, "Loading changelog…"), "{lines:#?}");
    assert!(contains(&lines, "(refreshing…)"));
}

#[test]
fn test_error_banner() {
    let harness = Harness::new(FakeSource::returning(Vec::new()));
    let mut app = harness.app(NIGHTLY_VERSION, false);
    app.error_message = Some("Couldn't open browser: no browser".to_string());

    let lines = draw_app(&mut app, 100, 12);
    assert!(contains(&lines, "Couldn't open browser: no browser"), "{lines:#?}");
}
