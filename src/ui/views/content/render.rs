//! Rendering for FileContentView

use ratatui::{
    prelude::*,
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::{components, theme};

use super::FileContentView;

impl FileContentView {
    /// Render the content view (without status bar - rendered by App)
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::raw(" File ").bold(),
            Span::styled(
                format!("{} ", self.path),
                Style::default().fg(theme::header::ACTIVE_TAB),
            ),
        ]);
        let block = components::bordered_block(title);

        if let Some(error) = self.error() {
            let message = Paragraph::new(vec![
                Line::from(""),
                components::build_error_line(&format!("Failed to load file: {}", error)),
            ])
            .block(block);
            frame.render_widget(message, area);
            return;
        }
        if let Some(size) = self.binary_size() {
            let title = format!("Binary file ({} bytes)", size);
            frame.render_widget(components::empty_state(&title, None).block(block), area);
            return;
        }
        if self.line_count() == 0 {
            frame.render_widget(components::empty_state("Empty file", None).block(block), area);
            return;
        }

        let visible = area.height.saturating_sub(2) as usize;
        self.visible_height = visible;
        let offset = self.cursor.follow(visible);
        let current = self.cursor.selected();
        let gutter = self.line_count().to_string().len();

        let lines: Vec<Line> = self
            .lines()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, text)| {
                let line = Line::from(vec![
                    Span::styled(
                        format!("{:>width$} ", i + 1, width = gutter),
                        Style::default().fg(theme::diff_view::LINE_NUMBER),
                    ),
                    Span::raw(text.clone()),
                ]);
                components::styled_row(line, i == current, false)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
