//! File tree rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{FileTreeView, TreeRow};
use crate::ui::{components, theme};

impl FileTreeView {
    /// Render the panel
    pub fn render(&mut self, frame: &mut Frame, area: Rect, vim_focused: bool) {
        let block = components::panel_block("Files", vim_focused);

        if !self.loaded {
            frame.render_widget(
                components::empty_state("Loading files...", None).block(block),
                area,
            );
            return;
        }
        if self.rows.is_empty() {
            frame.render_widget(components::empty_state("No files", None).block(block), area);
            return;
        }

        let visible = area.height.saturating_sub(2) as usize;
        let offset = self.cursor.follow(visible);
        let current = self.cursor.selected();

        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, row)| build_row_line(row, idx == current, vim_focused))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn build_row_line(row: &TreeRow, selected: bool, vim_focused: bool) -> Line<'static> {
    let indent = "  ".repeat(row.depth);
    let (icon, style) = match (row.is_directory, row.expanded) {
        (true, true) => ("▾ ", Style::default().fg(theme::list::DIRECTORY)),
        (true, false) => ("▸ ", Style::default().fg(theme::list::DIRECTORY)),
        (false, _) => ("  ", Style::default()),
    };
    let name = if row.is_directory {
        format!("{}/", row.name)
    } else {
        row.name.clone()
    };

    let line = Line::from(vec![
        Span::raw(components::cursor_marker(selected)),
        Span::raw(indent),
        Span::styled(icon, style),
        Span::styled(name, style),
    ]);
    components::styled_row(line, selected, vim_focused)
}
