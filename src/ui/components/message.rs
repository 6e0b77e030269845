//! Error and notification message components

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build an error message line for overlay display
///
/// Format: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Build a styled line for a notification banner
pub fn build_notification_line(notification: &Notification) -> Line<'static> {
    let (label, color) = match notification.kind {
        NotificationKind::Success => (" Success: ", Color::Green),
        NotificationKind::Info => (" Info: ", Color::Cyan),
        NotificationKind::Warning => (" Warning: ", Color::Yellow),
    };

    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Black).bg(color)),
        Span::styled(
            format!(" {} ", notification.message),
            Style::default().fg(color),
        ),
    ])
}
