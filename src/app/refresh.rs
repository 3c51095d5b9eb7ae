//! Changelog refresh flow
//!
//! The fetch runs on a worker thread; the result is applied here on the UI
//! thread. A failed fetch leaves the current list untouched.

use std::time::Duration;

use super::state::App;
use crate::changelog::{ChangelogError, FetchResult, RefreshStart};

/// Notice shown when no data connection is available
pub const NO_CONNECTION_MESSAGE: &str = "Data connection required";

impl App {
    /// Start a refresh unless one is already running.
    ///
    /// Connectivity is checked on the worker; offline yields
    /// [`ChangelogError::Offline`] without a request.
    pub fn request_refresh(&mut self) {
        let version = &self.device.version.number;
        let device = &self.device.device;
        match self.worker.start(version, device) {
            RefreshStart::Started => {
                log::debug!("Refresh started for {} on {}", version, device);
            }
            RefreshStart::AlreadyRunning => {
                self.notify_info("Refresh already in progress");
            }
        }
    }

    /// Is a fetch outstanding?
    pub fn is_refreshing(&self) -> bool {
        self.worker.is_running()
    }

    /// Apply a finished fetch, if any (called on the idle tick)
    pub fn poll_refresh(&mut self) {
        if let Some(result) = self.worker.poll() {
            self.apply_fetch_result(result);
        }
    }

    /// Block up to `timeout` for the outstanding fetch and apply it.
    ///
    /// Returns true if a result was applied.
    pub fn finish_refresh(&mut self, timeout: Duration) -> bool {
        match self.worker.wait(timeout) {
            Some(result) => {
                self.apply_fetch_result(result);
                true
            }
            None => false,
        }
    }

    fn apply_fetch_result(&mut self, result: FetchResult) {
        match result {
            Ok(changes) => {
                let count = changes.len();
                self.changelog_view.replace(changes);
                self.error_message = None;
                self.notify_success(format!("Loaded {} changes", count));
            }
            Err(ChangelogError::Offline) => {
                log::warn!("No data connection, refresh skipped");
                self.notify_warning(NO_CONNECTION_MESSAGE);
            }
            Err(e) => {
                log::error!("Changelog refresh failed: {}", e);
                self.notify_warning(format!("Couldn't load changelog: {}", e));
            }
        }
    }
}
