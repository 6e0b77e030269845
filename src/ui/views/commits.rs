//! Commit history panel

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::ViewAction;
use crate::keys;
use crate::model::Commit;
use crate::ui::components::{self, ListCursor};
use crate::ui::theme;
use crate::vim::NavigableList;

/// Commit list panel state
#[derive(Debug, Default)]
pub struct CommitListView {
    commits: Option<Vec<Commit>>,
    cursor: ListCursor,
}

impl CommitListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_commits(&mut self, commits: Vec<Commit>) {
        self.cursor.clamp(commits.len());
        self.commits = Some(commits);
    }

    pub fn commits(&self) -> &[Commit] {
        self.commits.as_deref().unwrap_or_default()
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.selected()
    }

    pub fn select(&mut self, index: usize) {
        self.cursor.select(index, self.commits().len());
    }

    /// Handle key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ViewAction> {
        match key.code {
            code if keys::is_move_down(code) => self.cursor.down(self.commits().len()),
            code if keys::is_move_up(code) => self.cursor.up(),
            keys::GO_TOP => self.select(0),
            keys::GO_BOTTOM => self.select(usize::MAX),
            keys::OPEN => return self.on_activate(self.cursor.selected()),
            _ => {}
        }
        None
    }

    /// Render the panel
    pub fn render(&mut self, frame: &mut Frame, area: Rect, vim_focused: bool) {
        let block = components::panel_block("History", vim_focused);

        let Some(commits) = self.commits.as_ref() else {
            frame.render_widget(
                components::empty_state("Loading commit history...", None).block(block),
                area,
            );
            return;
        };
        if commits.is_empty() {
            frame.render_widget(
                components::empty_state("No commits yet", Some("Make your first commit"))
                    .block(block),
                area,
            );
            return;
        }

        let visible = area.height.saturating_sub(2) as usize;
        let offset = self.cursor.follow(visible);
        let current = self.cursor.selected();

        let lines: Vec<Line> = commits
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, commit)| {
                let selected = idx == current;
                let line = Line::from(vec![
                    Span::raw(components::cursor_marker(selected)),
                    Span::styled(
                        format!("{} ", commit.short_hash()),
                        Style::default().fg(theme::list::HASH),
                    ),
                    Span::raw(commit.message.clone()),
                    Span::styled(
                        format!("  {}", commit.author.name),
                        Style::default().fg(theme::list::AUTHOR),
                    ),
                    Span::styled(
                        format!("  {}", short_date(&commit.date)),
                        Style::default().fg(theme::list::TIMESTAMP),
                    ),
                ]);
                components::styled_row(line, selected, vim_focused)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// `2024-05-01T10:00:00+02:00` -> `2024-05-01 10:00`
fn short_date(date: &str) -> String {
    match date.split_once('T') {
        Some((day, time)) => format!("{} {}", day, time.get(..5).unwrap_or(time)),
        None => date.to_string(),
    }
}

impl NavigableList for CommitListView {
    type Action = ViewAction;

    fn item_count(&self) -> usize {
        self.commits().len()
    }

    fn on_activate(&mut self, index: usize) -> Option<ViewAction> {
        self.commits()
            .get(index)
            .map(|c| ViewAction::OpenCommitDiff(c.hash.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Author;
    use crossterm::event::KeyCode;

    fn commit(hash: &str, message: &str) -> Commit {
        Commit {
            hash: hash.to_string(),
            message: message.to_string(),
            author: Author {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
            date: "2024-05-01T10:00:00+02:00".to_string(),
            parent_hash: None,
        }
    }

    fn sample_view() -> CommitListView {
        let mut view = CommitListView::new();
        view.set_commits(vec![
            commit("aaaaaaaaaa", "Third"),
            commit("bbbbbbbbbb", "Second"),
            commit("cccccccccc", "First"),
        ]);
        view
    }

    #[test]
    fn test_enter_opens_commit_diff() {
        let mut view = sample_view();
        view.handle_key(KeyEvent::from(KeyCode::Char('j')));
        assert_eq!(
            view.handle_key(KeyEvent::from(KeyCode::Enter)),
            Some(ViewAction::OpenCommitDiff("bbbbbbbbbb".to_string()))
        );
    }

    #[test]
    fn test_selection_clamped() {
        let mut view = sample_view();
        view.handle_key(KeyEvent::from(KeyCode::Char('G')));
        assert_eq!(view.selected_index(), 2);
        view.handle_key(KeyEvent::from(KeyCode::Char('j')));
        assert_eq!(view.selected_index(), 2);
        view.handle_key(KeyEvent::from(KeyCode::Char('g')));
        assert_eq!(view.selected_index(), 0);
    }

    #[test]
    fn test_set_commits_resets_out_of_range_selection() {
        let mut view = sample_view();
        view.select(2);
        view.set_commits(vec![commit("dddd", "Only")]);
        assert_eq!(view.selected_index(), 0);
    }

    #[test]
    fn test_empty_list_activation() {
        let mut view = CommitListView::new();
        assert_eq!(view.item_count(), 0);
        assert_eq!(view.on_activate(0), None);
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-05-01T10:00:00+02:00"), "2024-05-01 10:00");
        assert_eq!(short_date("yesterday"), "yesterday");
    }
}
