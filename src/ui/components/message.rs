//! Error and notification message components

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build an error message line for banner display
///
/// Format: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Build a notification line for title bar display
///
/// Messages longer than `max_width` are truncated with "…".
pub fn build_notification_title(notification: &Notification, max_width: usize) -> Line<'static> {
    let (label, color) = match notification.kind {
        NotificationKind::Success => ("Success:", Color::Green),
        NotificationKind::Info => ("Info:", Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow),
    };

    // " label message "
    let fixed = label.len() + 3;
    let message = &notification.message;
    let text = if fixed + message.chars().count() <= max_width {
        format!("{} ", message)
    } else {
        let available = max_width.saturating_sub(fixed + 1);
        if available == 0 {
            return Line::default();
        }
        let truncated: String = message.chars().take(available).collect();
        format!("{}… ", truncated)
    };

    Line::from(vec![
        Span::styled(format!(" {} ", label), Style::default().fg(color).bold()),
        Span::styled(text, Style::default().fg(color)),
    ])
}
