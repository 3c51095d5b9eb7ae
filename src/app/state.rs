//! Application state and view management

use std::sync::Arc;

use super::browser::Browser;
use crate::changelog::{ChangelogSource, Connectivity, RefreshWorker};
use crate::config::Config;
use crate::device::{Classification, DeviceInfo, advisory, classify};
use crate::model::Notification;
use crate::ui::components::{Dialog, DialogCallback, DialogResult};
use crate::ui::views::ChangelogView;

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Changelog,
    Help,
}

/// External collaborators the app talks to
pub struct Services {
    /// Changelog feed
    pub source: Arc<dyn ChangelogSource>,
    /// Checked on the worker thread before every fetch
    pub connectivity: Arc<dyn Connectivity>,
    /// Opens review pages
    pub browser: Box<dyn Browser>,
}

/// The main application state
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Effective configuration
    pub config: Config,
    /// Device and build read at startup
    pub device: DeviceInfo,
    /// Changelog list
    pub changelog_view: ChangelogView,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Active dialog (blocks other input when Some)
    pub active_dialog: Option<Dialog>,
    pub(crate) worker: RefreshWorker,
    pub(crate) browser: Box<dyn Browser>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("running", &self.running)
            .field("current_view", &self.current_view)
            .field("device", &self.device.device)
            .field("changes", &self.changelog_view.count())
            .field("worker", &self.worker)
            .finish()
    }
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, device: DeviceInfo, services: Services) -> Self {
        let changelog_view = ChangelogView::new(
            config.changelog.project_prefix.clone(),
            config.changelog.review_url.clone(),
        );
        let error_message = device.read_error.clone();

        Self {
            running: true,
            current_view: View::Changelog,
            config,
            device,
            changelog_view,
            error_message,
            notification: None,
            active_dialog: None,
            worker: RefreshWorker::new(services.source, services.connectivity),
            browser: services.browser,
        }
    }

    /// Show the build advisory, if any, and load the changelog
    pub fn start(&mut self) {
        self.show_advisory();
        self.request_refresh();
    }

    /// Classification of the running build
    pub fn classification(&self) -> Classification {
        classify(&self.device.release_type, &self.config.device.official_tags)
    }

    fn show_advisory(&mut self) {
        let Some(notice) = advisory(&self.device.release_type, &self.config.device.official_tags)
        else {
            return;
        };
        log::info!("Build advisory: {}", notice.title());
        self.active_dialog = Some(Dialog::message(
            notice.title(),
            notice.message(),
            DialogCallback::Advisory,
        ));
    }

    /// Open the device info dialog
    pub(crate) fn show_device_info(&mut self) {
        self.active_dialog = Some(Dialog::message(
            "Device info",
            self.device.summary(),
            DialogCallback::DeviceInfo,
        ));
    }

    pub(crate) fn handle_dialog_result(&mut self, result: DialogResult) {
        let Some(dialog) = self.active_dialog.take() else {
            return;
        };
        match result {
            DialogResult::Dismissed => {
                log::debug!("Dismissed {:?} dialog", dialog.callback_id);
            }
        }
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }

    pub(crate) fn notify_success(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::success(msg));
    }

    pub(crate) fn notify_info(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::info(msg));
    }

    pub(crate) fn notify_warning(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::warning(msg));
    }
}
