//! Changes panel rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{ChangeEntry, ChangeGroup, FileChangesView};
use crate::ui::{components, theme};

impl FileChangesView {
    /// Render the panel, with the commit editor below while it is open
    pub fn render(&mut self, frame: &mut Frame, area: Rect, vim_focused: bool) {
        if self.editor.is_some() {
            let [list_area, editor_area] =
                Layout::vertical([Constraint::Min(3), Constraint::Length(7)]).areas(area);
            self.render_list(frame, list_area, vim_focused);
            self.render_editor(frame, editor_area);
        } else {
            self.render_list(frame, area, vim_focused);
        }
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect, vim_focused: bool) {
        let block = components::panel_block("Changes", vim_focused);

        let Some(status) = self.status() else {
            frame.render_widget(
                components::empty_state("Loading status...", None).block(block),
                area,
            );
            return;
        };
        if status.total_changes() == 0 {
            frame.render_widget(
                components::empty_state("Working tree clean", None).block(block),
                area,
            );
            return;
        }

        let rows = self.display_rows(vim_focused);

        // Scroll over display rows, which include group headings
        let current = self.cursor.selected();
        let selected_row = rows
            .iter()
            .position(|(index, _)| *index == Some(current))
            .unwrap_or(0);
        let visible = area.height.saturating_sub(2) as usize;
        let scroll = self.cursor.scroll_to(selected_row, visible);

        let lines: Vec<Line> = rows
            .into_iter()
            .skip(scroll)
            .take(visible)
            .map(|(_, line)| line)
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Display rows with group headings; the index is None for headings
    fn display_rows(&self, vim_focused: bool) -> Vec<(Option<usize>, Line<'static>)> {
        let mut rows = Vec::new();
        let mut current_group = None;

        for index in 0..self.len() {
            let Some(entry) = self.entry(index) else {
                break;
            };
            if current_group != Some(entry.group) {
                current_group = Some(entry.group);
                rows.push((None, group_heading(entry.group)));
            }
            let selected = index == self.cursor.selected();
            rows.push((
                Some(index),
                components::styled_row(entry_line(&entry, selected), selected, vim_focused),
            ));
        }
        rows
    }

    fn render_editor(&self, frame: &mut Frame, area: Rect) {
        if let Some(textarea) = self.editor.as_ref() {
            frame.render_widget(textarea, area);
        }
    }
}

fn group_heading(group: ChangeGroup) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", group.label()),
        Style::default()
            .fg(theme::list::GROUP_HEADING)
            .add_modifier(Modifier::BOLD),
    ))
}

fn entry_line(entry: &ChangeEntry<'_>, selected: bool) -> Line<'static> {
    let color = match entry.group {
        ChangeGroup::Staged => theme::status_view::STAGED,
        ChangeGroup::Modified => theme::status_view::MODIFIED,
        ChangeGroup::Untracked => theme::status_view::UNTRACKED,
        ChangeGroup::Conflicts => theme::status_view::CONFLICT,
    };
    let marker = match entry.group {
        ChangeGroup::Conflicts => '!',
        _ => entry.status.unwrap_or('?'),
    };
    Line::from(vec![
        Span::raw(components::cursor_marker(selected)),
        Span::styled(format!("{} ", marker), Style::default().fg(color)),
        Span::raw(entry.path.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::views::changes::tests::sample_status;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(view: &mut FileChangesView, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| view.render(frame, frame.area(), false))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_render_groups() {
        let mut view = FileChangesView::new();
        view.set_status(sample_status());
        let lines = screen(&mut view, 40, 12);

        assert!(lines[1].contains("Staged"));
        assert!(lines[2].contains("> M a.rs"));
        assert!(lines[5].contains("Untracked"));
        assert!(lines[6].contains("? notes.txt"));
    }

    #[test]
    fn test_render_conflicts_group_last() {
        let mut view = FileChangesView::new();
        let mut status = sample_status();
        status.conflicts = vec!["merge.rs".to_string()];
        view.set_status(status);
        let lines = screen(&mut view, 40, 14);

        // 3 staged + heading, 2 untracked + heading, then the conflicts
        assert!(lines[8].contains("Conflicts"));
        assert!(lines[9].contains("! merge.rs"));
    }

    #[test]
    fn test_render_clean_tree() {
        let mut view = FileChangesView::new();
        view.set_status(Default::default());
        let lines = screen(&mut view, 40, 6);
        assert!(lines.iter().any(|l| l.contains("Working tree clean")));
    }

    #[test]
    fn test_render_editor() {
        let mut view = FileChangesView::new();
        view.set_status(sample_status());
        view.start_commit();
        let lines = screen(&mut view, 60, 16);
        assert!(lines.iter().any(|l| l.contains("Commit message")));
    }
}
