//! Error banner widget

use ratatui::{Frame, prelude::*, widgets::Paragraph};

use crate::ui::components;

/// Render an error message just above the status bar
pub fn render_error_banner(frame: &mut Frame, error: &str) {
    let Some(area) = banner_area(frame.area()) else {
        return;
    };
    frame.render_widget(Paragraph::new(components::build_error_line(error)), area);
}

/// One row inset from the sides, directly above the status bar
pub(super) fn banner_area(area: Rect) -> Option<Rect> {
    if area.height < 3 {
        return None;
    }
    Some(Rect {
        x: area.x + 2,
        y: area.y + area.height - 2,
        width: area.width.saturating_sub(4),
        height: 1,
    })
}
