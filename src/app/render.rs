//! Rendering logic for the application

use ratatui::{Frame, layout::Rect};

use super::state::{App, View};
use crate::device::Classification;
use crate::keys;
use crate::ui::views::RenderContext;
use crate::ui::widgets::{render_error_banner, render_help_panel, render_status_bar};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        // Bottom row is the status bar
        let main_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        match self.current_view {
            View::Changelog => {
                let notification = self
                    .notification
                    .as_ref()
                    .filter(|n| !n.is_expired())
                    .cloned();
                let ctx = RenderContext {
                    title: self.title(),
                    notification: notification.as_ref(),
                    device: Some(&self.device),
                    loading: self.worker.is_running(),
                };
                self.changelog_view.render(frame, main_area, &ctx);
            }
            View::Help => render_help_panel(frame, main_area),
        }

        let hints = if self.active_dialog.is_some() {
            keys::DIALOG_HINTS
        } else if self.current_view == View::Help {
            keys::HELP_HINTS
        } else {
            keys::CHANGELOG_HINTS
        };
        render_status_bar(frame, hints);

        // Errors are always shown prominently
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, area, error);
        }

        // Dialog on top of everything
        if let Some(ref dialog) = self.active_dialog {
            dialog.render(frame, area);
        }
    }

    /// Title bar text: device, version, and build classification
    pub fn title(&self) -> String {
        let device = if self.device.device.is_empty() {
            "unknown device"
        } else {
            &self.device.device
        };
        let version = if self.device.version.is_empty() {
            "unknown version"
        } else {
            &self.device.version.raw
        };
        let class = match self.classification() {
            Classification::Official => "official",
            Classification::Unofficial => "unofficial",
        };
        format!("Changelog · {} · {} [{}]", device, version, class)
    }
}
