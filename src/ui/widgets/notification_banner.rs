//! Notification banner widget
//!
//! Displays temporary feedback after stage, unstage, commit and checkout.

use ratatui::{Frame, widgets::Paragraph};

use super::error_banner::banner_area;
use crate::model::Notification;
use crate::ui::components;

/// Render a notification just above the status bar; expired ones are skipped
pub fn render_notification_banner(frame: &mut Frame, notification: &Notification) {
    if notification.is_expired() {
        return;
    }
    let Some(area) = banner_area(frame.area()) else {
        return;
    };
    let line = components::build_notification_line(notification);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_render_notification_banner() {
        let backend = TestBackend::new(50, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let notification = Notification::success("Staged src/main.rs");
        terminal
            .draw(|frame| render_notification_banner(frame, &notification))
            .unwrap();

        let row: String = (0..50)
            .map(|x| terminal.backend().buffer()[(x, 4)].symbol().to_string())
            .collect();
        assert!(row.contains("Staged src/main.rs"));
    }
}
