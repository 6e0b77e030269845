//! Rendering for DiffView

use ratatui::{
    prelude::*,
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::diff::{RevealControl, VisibleRow};
use crate::model::{DiffLine, DiffLineKind};
use crate::ui::{components, theme};

use super::DiffView;

/// Width of the `" 123  456 "` gutter
const GUTTER_WIDTH: usize = 10;

impl DiffView {
    /// Render the diff view (without status bar - rendered by App)
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::raw(" Diff ").bold(),
            Span::styled(
                format!("{} ", self.title),
                Style::default().fg(theme::header::ACTIVE_TAB),
            ),
        ]);
        let block = components::bordered_block(title);

        if let Some(error) = self.error() {
            let message = Paragraph::new(vec![
                Line::from(""),
                components::build_error_line(&format!("Failed to load diff: {}", error)),
            ])
            .block(block);
            frame.render_widget(message, area);
            return;
        }

        if self.document().is_empty() {
            frame.render_widget(
                components::empty_state("No changes to display", None).block(block),
                area,
            );
            return;
        }

        let visible = area.height.saturating_sub(2) as usize;
        self.visible_height = visible;
        let offset = self.cursor.follow(visible);
        let current = self.cursor.selected();

        let lines: Vec<Line> = self
            .rows()
            .into_iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, row)| {
                let selected = i == current;
                let line = match row {
                    VisibleRow::Line { line, .. } => self.render_diff_line(line),
                    VisibleRow::Control(control) => render_control(&control),
                };
                components::styled_row(line, selected, false)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Render a single diff line
    fn render_diff_line(&self, line: &DiffLine) -> Line<'static> {
        let color = match line.kind {
            DiffLineKind::Added => theme::diff_view::ADDED,
            DiffLineKind::Removed => theme::diff_view::REMOVED,
            DiffLineKind::Context => theme::diff_view::CONTEXT,
            DiffLineKind::Header => {
                let style = if line.content.starts_with("@@") {
                    Style::default().fg(theme::diff_view::HUNK_HEADER)
                } else {
                    Style::default().bold()
                };
                return Line::from(Span::styled(line.content.clone(), style));
            }
        };

        let mut spans = Vec::with_capacity(3);
        if self.line_numbers {
            spans.push(Span::styled(
                format_line_numbers(line.old_line, line.new_line),
                Style::default().fg(theme::diff_view::LINE_NUMBER),
            ));
        }
        spans.push(Span::styled(
            format!("{}{}", line.kind.marker(), line.content),
            Style::default().fg(color),
        ));
        Line::from(spans)
    }
}

fn render_control(control: &RevealControl) -> Line<'static> {
    let plural = if control.next_batch == 1 { "" } else { "s" };
    Line::from(Span::styled(
        format!(
            "{:width$}⋯ Show {} more line{} ({} remaining)",
            "",
            control.next_batch,
            plural,
            control.remaining,
            width = GUTTER_WIDTH
        ),
        Style::default()
            .fg(theme::diff_view::REVEAL_CONTROL)
            .add_modifier(Modifier::ITALIC),
    ))
}

/// Format line numbers for display
fn format_line_numbers(old: Option<usize>, new: Option<usize>) -> String {
    let old_str = old
        .map(|n| format!("{:4}", n))
        .unwrap_or_else(|| "    ".to_string());
    let new_str = new
        .map(|n| format!("{:4}", n))
        .unwrap_or_else(|| "    ".to_string());
    format!("{} {} ", old_str, new_str)
}
