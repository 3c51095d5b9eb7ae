//! Changelog View rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{ChangeRow, ChangelogView};
use crate::device::DeviceInfo;
use crate::model::Notification;
use crate::ui::{components, navigation, theme};

/// Width of the last-updated column (`yyyy-MM-dd HH:mm`)
const TIMESTAMP_WIDTH: usize = 16;
/// Upper bound for the project column
const MAX_PROJECT_WIDTH: usize = 36;
/// Marker for projects built into this device
const DEVICE_MARKER: &str = "●";

/// State the view needs from the rest of the app while drawing
#[derive(Debug, Default)]
pub struct RenderContext<'a> {
    /// Title bar text (device and version)
    pub title: String,
    /// Notice to show in the title bar
    pub notification: Option<&'a Notification>,
    /// Device info, used to mark the device's own projects
    pub device: Option<&'a DeviceInfo>,
    /// A fetch is running
    pub loading: bool,
}

impl ChangelogView {
    /// Render the list into `area`
    pub fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        let title_text = if ctx.loading {
            format!(" {} (refreshing…) ", ctx.title)
        } else {
            format!(" {} ", ctx.title)
        };
        let title = Line::from(title_text).bold().fg(theme::changelog::TITLE).centered();

        let title_width = title.width();
        let available_for_notif = (area.width as usize).saturating_sub(title_width + 4);
        let notif_line = ctx
            .notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, available_for_notif))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);

        if self.rows.is_empty() {
            frame.render_widget(empty_list(ctx.loading).block(block), area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        if inner_height == 0 {
            return;
        }
        self.page_size = inner_height;
        self.scroll_offset = navigation::adjust_scroll(self.selected, self.scroll_offset, inner_height);

        let project_width = self
            .rows
            .iter()
            .map(|r| r.project.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_PROJECT_WIDTH);

        let lines: Vec<Line> = self
            .rows
            .iter()
            .zip(&self.changes)
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner_height)
            .map(|(idx, (row, change))| {
                let on_device = ctx
                    .device
                    .is_some_and(|d| d.is_device_project(&change.project));
                build_row_line(row, project_width, on_device, idx == self.selected)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Placeholder shown while the list has no rows
fn empty_list(loading: bool) -> Paragraph<'static> {
    let mut lines = vec![Line::from("")];
    if loading {
        lines.push(Line::from("Loading changelog…").centered());
    } else {
        lines.push(Line::from("No changes loaded").centered());
        lines.push(Line::from(""));
        lines.push(Line::from("Press r to refresh").dark_gray().centered());
    }
    Paragraph::new(lines)
}

/// Build a line for one change: timestamp, device marker, project, subject
fn build_row_line(
    row: &ChangeRow,
    project_width: usize,
    on_device: bool,
    is_selected: bool,
) -> Line<'static> {
    let marker = if on_device { DEVICE_MARKER } else { " " };
    let project: String = row.project.chars().take(project_width).collect();

    let mut line = Line::from(vec![
        Span::styled(
            format!("{:<width$}", row.last_updated, width = TIMESTAMP_WIDTH),
            Style::default().fg(theme::changelog::TIMESTAMP),
        ),
        Span::raw(" "),
        Span::styled(
            marker.to_string(),
            Style::default().fg(theme::changelog::DEVICE_MARKER),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{:<width$}", project, width = project_width),
            Style::default().fg(theme::changelog::PROJECT),
        ),
        Span::raw("  "),
        Span::styled(
            row.subject.clone(),
            Style::default().fg(theme::changelog::SUBJECT),
        ),
    ]);

    if is_selected {
        line = line.style(
            Style::default()
                .fg(theme::selection::FG)
                .bg(theme::selection::BG)
                .add_modifier(Modifier::BOLD),
        );
    }

    line
}
