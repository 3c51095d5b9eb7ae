//! Error banner widget

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Clear, Paragraph},
};

use crate::ui::components;

/// Row for the banner: two above the bottom, inset by two columns.
///
/// `None` when `area` is too small to hold it.
fn banner_area(area: Rect) -> Option<Rect> {
    if area.height < 3 || area.width < 5 {
        return None;
    }
    Some(Rect {
        x: area.x + 2,
        y: area.y + area.height - 3,
        width: area.width - 4,
        height: 1,
    })
}

/// Render `error` over the last list row of `area`
pub fn render_error_banner(frame: &mut Frame, area: Rect, error: &str) {
    let Some(banner) = banner_area(area) else {
        return;
    };
    frame.render_widget(Clear, banner);
    frame.render_widget(Paragraph::new(components::build_error_line(error)), banner);
}
