//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, View};
use crate::keys;
use crate::ui::views::ChangelogAction;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        // Dialog blocks other input
        if let Some(ref dialog) = self.active_dialog {
            if let Some(result) = dialog.handle_key(key) {
                self.handle_dialog_result(result);
            }
            return;
        }

        match key.code {
            keys::QUIT | keys::ESC => self.handle_quit(),
            keys::HELP => self.go_to_view(View::Help),
            _ if self.current_view == View::Help => {}
            _ if keys::is_refresh_key(&key) => self.request_refresh(),
            keys::REFRESH => self.request_refresh(),
            keys::DEVICE_INFO => self.show_device_info(),
            _ => {
                let action = self.changelog_view.handle_key(key);
                self.handle_changelog_action(action);
            }
        }
    }

    fn handle_quit(&mut self) {
        match self.current_view {
            View::Changelog => self.quit(),
            View::Help => self.go_to_view(View::Changelog),
        }
    }

    fn handle_changelog_action(&mut self, action: ChangelogAction) {
        match action {
            ChangelogAction::None => {}
            ChangelogAction::OpenReview(url) => self.open_review(&url),
            ChangelogAction::MissingReviewId => {
                self.notify_warning("This change has no review link");
            }
        }
    }

    fn open_review(&mut self, url: &str) {
        log::info!("Opening {}", url);
        match self.browser.open(url) {
            Ok(()) => self.notify_info(format!("Opened {}", url)),
            Err(e) => {
                log::error!("Failed to open {}: {}", url, e);
                self.error_message = Some(format!("Couldn't open browser: {}", e));
            }
        }
    }
}
