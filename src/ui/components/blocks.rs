//! Block components for UI rendering

use ratatui::{
    text::Line,
    widgets::{Block, Borders},
};

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Bordered block with an optional right-aligned notification in the top border
pub fn bordered_block_with_notification<'a>(
    title: Line<'a>,
    notification: Option<Line<'a>>,
) -> Block<'a> {
    let block = bordered_block(title);
    match notification {
        Some(line) => block.title_top(line.right_aligned()),
        None => block,
    }
}
