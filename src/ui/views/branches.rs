//! Branch list panel
//!
//! Current branch first, then the others in Git's order. `Enter` switches.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::ViewAction;
use crate::keys;
use crate::model::Branch;
use crate::ui::components::{self, ListCursor};
use crate::ui::theme;
use crate::vim::NavigableList;

/// Branch list panel state
#[derive(Debug, Default)]
pub struct BranchListView {
    branches: Option<Vec<Branch>>,
    cursor: ListCursor,
}

impl BranchListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the branches, moving the current branch to the top
    pub fn set_branches(&mut self, mut branches: Vec<Branch>) {
        branches.sort_by_key(|b| !b.is_current);
        self.cursor.clamp(branches.len());
        self.branches = Some(branches);
    }

    pub fn branches(&self) -> &[Branch] {
        self.branches.as_deref().unwrap_or_default()
    }

    pub fn current_branch(&self) -> Option<&Branch> {
        self.branches().iter().find(|b| b.is_current)
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.selected()
    }

    pub fn select(&mut self, index: usize) {
        self.cursor.select(index, self.branches().len());
    }

    /// Handle key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ViewAction> {
        match key.code {
            code if keys::is_move_down(code) => self.cursor.down(self.branches().len()),
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
        let block = components::panel_block("Branches", vim_focused);

        let Some(branches) = self.branches.as_ref() else {
            frame.render_widget(
                components::empty_state("Loading branches...", None).block(block),
                area,
            );
            return;
        };
        if branches.is_empty() {
            frame.render_widget(components::empty_state("No branches", None).block(block), area);
            return;
        }

        let visible = area.height.saturating_sub(2) as usize;
        let offset = self.cursor.follow(visible);
        let current = self.cursor.selected();

        let lines: Vec<Line> = branches
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, branch)| build_branch_line(branch, idx == current, vim_focused))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn build_branch_line(branch: &Branch, selected: bool, vim_focused: bool) -> Line<'static> {
    let (marker, name_style) = if branch.is_current {
        (
            "* ",
            Style::default()
                .fg(theme::list::CURRENT_BRANCH)
                .add_modifier(Modifier::BOLD),
        )
    } else if branch.is_remote {
        ("  ", Style::default().fg(theme::list::REMOTE_BRANCH))
    } else {
        ("  ", Style::default())
    };

    let mut spans = vec![
        Span::raw(components::cursor_marker(selected)),
        Span::styled(marker, name_style),
        Span::styled(branch.name.clone(), name_style),
    ];
    if let Some(ref upstream) = branch.upstream {
        spans.push(Span::styled(
            format!(" [{}]", upstream),
            Style::default().fg(theme::list::TIMESTAMP),
        ));
    }
    if let Some(ref tip) = branch.last_commit {
        spans.push(Span::styled(
            format!("  {}", tip.short_hash()),
            Style::default().fg(theme::list::HASH),
        ));
        spans.push(Span::raw(format!(" {}", tip.message)));
    }
    components::styled_row(Line::from(spans), selected, vim_focused)
}

/// Name to pass to `git switch` (remote branches switch to their local
/// tracking name)
fn switch_target(branch: &Branch) -> &str {
    if branch.is_remote {
        branch
            .name
            .split_once('/')
            .map_or(branch.name.as_str(), |(_, name)| name)
    } else {
        &branch.name
    }
}

impl NavigableList for BranchListView {
    type Action = ViewAction;

    fn item_count(&self) -> usize {
        self.branches().len()
    }

    fn on_activate(&mut self, index: usize) -> Option<ViewAction> {
        let branch = self.branches().get(index)?;
        if branch.is_current {
            return None;
        }
        Some(ViewAction::SwitchBranch(switch_target(branch).to_string()))
    }
}
