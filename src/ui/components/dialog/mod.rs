//! Dialog component
//!
//! Informational message dialogs dismissed with OK. Used for the build
//! advisory at startup and the device info summary.


use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

/// What opened the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogCallback {
    /// Build advisory shown at startup
    Advisory,
    /// Device info summary (menu action)
    DeviceInfo,
}

/// Dialog result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    /// Dismissed with OK
    Dismissed,
}

/// Dialog state
#[derive(Debug, Clone)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub callback_id: DialogCallback,
}

impl Dialog {
    /// Create a message dialog
    pub fn message(
        title: impl Into<String>,
        message: impl Into<String>,
        callback_id: DialogCallback,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            callback_id,
        }
    }

    /// Handle key input, returns Some(result) when the dialog should close
    pub fn handle_key(&self, key: KeyEvent) -> Option<DialogResult> {
        match key.code {
            KeyCode::Enter
            | KeyCode::Esc
            | KeyCode::Char(' ')
            | KeyCode::Char('o')
            | KeyCode::Char('O')
            | KeyCode::Char('q') => Some(DialogResult::Dismissed),
            _ => None,
        }
    }

    /// Render the dialog centered on screen
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = 56.min(area.width.saturating_sub(4));
        let inner_width = width.saturating_sub(4).max(1) as usize;

        // Wrapped message height, plus blank lines, the OK row, and borders
        // (inner width excludes borders and padding)
        let message_rows: usize = self
            .message
            .split('\n')
            .map(|line| line.chars().count().div_ceil(inner_width).max(1))
            .sum();
        let height = (message_rows as u16 + 6).min(area.height.saturating_sub(2));

        let dialog_area = centered_rect(width, height, area);
        frame.render_widget(Clear, dialog_area);

        let mut lines = vec![Line::from("")];
        for text in self.message.split('\n') {
            lines.push(Line::from(text.to_string()));
        }
        lines.push(Line::from(""));
        lines.push(
            Line::from(vec![
                Span::styled(
                    "[OK]",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
            .alignment(Alignment::Center),
        );

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", self.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, dialog_area);
    }
}

/// Calculate a centered rectangle within the given area
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical_margin = area.height.saturating_sub(height) / 2;
    let horizontal_margin = area.width.saturating_sub(width) / 2;

    let vertical_layout = Layout::vertical([
        Constraint::Length(vertical_margin),
        Constraint::Length(height),
        Constraint::Length(vertical_margin),
    ])
    .split(area);

    let horizontal_layout = Layout::horizontal([
        Constraint::Length(horizontal_margin),
        Constraint::Length(width),
        Constraint::Length(horizontal_margin),
    ])
    .split(vertical_layout[1]);

    horizontal_layout[1]
}
