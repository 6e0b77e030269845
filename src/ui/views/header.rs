//! Header bar
//!
//! Panel tabs plus the current branch. Registers as the `Header` focus
//! context; `Enter` switches the main panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::ViewAction;
use crate::app::Panel;
use crate::ui::theme;
use crate::vim::NavigableList;

/// Header bar state
#[derive(Debug, Clone, Default)]
pub struct HeaderBar {
    /// Repository directory name
    pub repo_name: String,
    /// Checked-out branch
    pub branch: String,
}

impl HeaderBar {
    pub fn new(repo_name: impl Into<String>) -> Self {
        Self {
            repo_name: repo_name.into(),
            branch: String::new(),
        }
    }

    /// Render the tabs; `vim_focus` is the focused tab while the header holds focus
    pub fn render(&self, frame: &mut Frame, area: Rect, current: Panel, vim_focus: Option<usize>) {
        let mut spans = vec![Span::styled(
            format!(" {} ", self.repo_name),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.branch.is_empty() {
            spans.push(Span::styled(
                format!("({}) ", self.branch),
                Style::default().fg(theme::header::BRANCH),
            ));
        }
        spans.push(Span::raw("│"));

        for (i, panel) in Panel::ALL.iter().enumerate() {
            let mut style = if *panel == current {
                Style::default()
                    .fg(theme::header::ACTIVE_TAB)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme::header::INACTIVE_TAB)
            };
            if vim_focus == Some(i) {
                style = style
                    .fg(theme::selection::FG)
                    .bg(theme::selection::VIM_BG);
            }
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {} {} ", i + 1, panel.label()), style));
        }

        let block = Block::default().borders(Borders::BOTTOM);
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

impl NavigableList for HeaderBar {
    type Action = ViewAction;

    fn item_count(&self) -> usize {
        Panel::ALL.len()
    }

    fn on_activate(&mut self, index: usize) -> Option<ViewAction> {
        Panel::ALL.get(index).copied().map(ViewAction::SwitchPanel)
    }
}
