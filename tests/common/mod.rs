//! Common test utilities for integration and scenario tests.
//!
//! Fakes for the app's collaborators, sample devices, and a one-shot HTTP
//! server for exercising the real client.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]

pub mod http;

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use cmlog::app::{App, Browser, Services};
use cmlog::changelog::{ChangelogError, ChangelogSource, StaticConnectivity};
use cmlog::config::Config;
use cmlog::device::constants::props;
use cmlog::device::{DeviceInfo, StaticProperties};
use cmlog::model::Change;

pub const NIGHTLY_VERSION: &str = "13.0-20160130-NIGHTLY-hammerhead";
pub const UNOFFICIAL_VERSION: &str = "13.0-20160130-UNOFFICIAL-hammerhead";
pub const SNAPSHOT_VERSION: &str = "12.1-20151117-SNAPSHOT-YOG7DAO1JN";

/// Changelog source returning a fixed result and counting fetches
#[derive(Clone)]
pub struct FakeSource {
    result: Arc<Mutex<Result<Vec<Change>, String>>>,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl FakeSource {
    pub fn returning(changes: Vec<Change>) -> Self {
        Self {
            result: Arc::new(Mutex::new(Ok(changes))),
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every fetch fails with HTTP 500
    pub fn failing() -> Self {
        let source = Self::returning(Vec::new());
        *source.result.lock().unwrap() = Err("http://feed.test/changes".to_string());
        source
    }

    pub fn set_changes(&self, changes: Vec<Change>) {
        *self.result.lock().unwrap() = Ok(changes);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

impl ChangelogSource for FakeSource {
    fn fetch(&self, version: &str, device: &str) -> Result<Vec<Change>, ChangelogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((version.to_string(), device.to_string()));
        match &*self.result.lock().unwrap() {
            Ok(changes) => Ok(changes.clone()),
            Err(url) => Err(ChangelogError::Status {
                status: 500,
                url: url.clone(),
            }),
        }
    }
}

/// Browser that records the URLs it was asked to open
#[derive(Clone, Default)]
pub struct RecordingBrowser {
    opened: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingBrowser {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Browser for RecordingBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            Err(io::Error::other("no browser"))
        } else {
            Ok(())
        }
    }
}

/// Device properties for a hammerhead running `version`
pub fn hammerhead(version: &str) -> StaticProperties {
    StaticProperties::new()
        .with_prop(props::CM_VERSION, version)
        .with_prop(props::CM_DEVICE, "hammerhead")
        .with_prop(props::MANUFACTURER, "LGE")
        .with_prop(props::HARDWARE, "qcom")
        .with_prop(props::BOARD, "MSM8974")
        .with_prop(props::BUILD_DATE, "Sat Jan 30 04:12:31 PST 2016")
        .with_file(
            "/etc/build-manifest.xml",
            r#"<manifest>
  <project name="CyanogenMod/android_device_lge_hammerhead" path="device/lge/hammerhead" />
  <project name="CyanogenMod/android_kernel_lge_hammerhead" path="kernel/lge/hammerhead" />
  <project name="platform/external/zlib" path="external/zlib" />
</manifest>"#,
        )
}

pub fn device_info(version: &str) -> DeviceInfo {
    DeviceInfo::load(&hammerhead(version), &Config::default().device)
}

pub fn sample_changes() -> Vec<Change> {
    vec![
        Change::new(
            "hammerhead: Update camera blobs",
            "CyanogenMod/android_device_lge_hammerhead",
            "2016-01-29 15:30:12",
        )
        .with_change_id("128734"),
        Change::new(
            "Settings: Fix crash when toggling Wi-Fi",
            "CyanogenMod/android_packages_apps_Settings",
            "2016-01-28 09:05",
        )
        .with_change_id("128610"),
        Change::new(
            "Update translations",
            "CyanogenMod/android_packages_apps_Trebuchet",
            "2016-01-27 23:59",
        ),
    ]
}

/// An app wired to fakes, not yet started
pub struct Harness {
    pub source: FakeSource,
    pub browser: RecordingBrowser,
}

impl Harness {
    pub fn new(source: FakeSource) -> Self {
        Self {
            source,
            browser: RecordingBrowser::default(),
        }
    }

    pub fn with_browser(mut self, browser: RecordingBrowser) -> Self {
        self.browser = browser;
        self
    }

    pub fn app(&self, version: &str, online: bool) -> App {
        let services = Services {
            source: Arc::new(self.source.clone()),
            connectivity: Arc::new(StaticConnectivity(online)),
            browser: Box::new(self.browser.clone()),
        };
        App::new(Config::default(), device_info(version), services)
    }
}
