//! Help panel widget

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys;

/// Build the help panel lines from [`keys::HELP_ENTRIES`]
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    for (section, entries) in keys::HELP_ENTRIES {
        lines.push(Line::from(Span::styled(
            section.to_string(),
            Style::default().fg(Color::Yellow).bold(),
        )));
        for (key, description) in entries.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<14}", key), Style::default().fg(Color::Cyan)),
                Span::raw(description.to_string()),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines
}

/// Render the help panel into `area`
pub fn render_help_panel(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(" Help ").bold().cyan().centered());
    frame.render_widget(Paragraph::new(build_help_lines()).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lines_cover_all_entries() {
        let lines = build_help_lines();
        let entry_count: usize = keys::HELP_ENTRIES.iter().map(|(_, e)| e.len()).sum();
        // header + blank, then per section: title + entries + blank
        assert_eq!(lines.len(), 2 + keys::HELP_ENTRIES.len() * 2 + entry_count);
    }

    #[test]
    fn test_help_lines_mention_refresh() {
        let text: String = build_help_lines()
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Refresh changelog"));
        assert!(text.contains("Open change in browser"));
    }
}
