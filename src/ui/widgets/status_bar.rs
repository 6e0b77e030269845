//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::{self, KeyHint};
use crate::model::RepositoryStatus;
use crate::ui::theme;
use crate::ui::views::{DiffView, FileContentView};

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    build_status_bar_with_prefix(Vec::new(), hints)
}

/// Build a status bar line with a prefix and key hints
pub fn build_status_bar_with_prefix(
    prefix: Vec<Span<'static>>,
    hints: &[KeyHint],
) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Prefix span showing the vim focus (`" Commits [3/12] "`)
fn focus_prefix(focus: Option<&str>) -> Vec<Span<'static>> {
    match focus {
        Some(info) => vec![Span::styled(
            format!(" VIM {} ", info),
            Style::default().fg(Color::Black).bg(Color::Magenta),
        )],
        None => Vec::new(),
    }
}

/// Working tree summary with upstream divergence (`" 1 modified  ↑2 "`)
pub fn repo_summary(status: &RepositoryStatus) -> Line<'static> {
    let color = if !status.conflicts.is_empty() {
        theme::status_view::CONFLICT
    } else if status.total_changes() > 0 {
        theme::status_view::MODIFIED
    } else {
        theme::status_view::STAGED
    };
    let mut spans = vec![Span::styled(
        format!(" {} ", status.summary()),
        Style::default().fg(color),
    )];
    let sync = status.sync_summary();
    if !sync.is_empty() {
        spans.push(Span::styled(
            format!(" {} ", sync),
            Style::default().fg(Color::Cyan),
        ));
    }
    Line::from(spans)
}

/// Render the status bar for the main panels
///
/// The repository summary is right-aligned; hints are clipped before it.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    hints: &[KeyHint],
    focus: Option<&str>,
    repo: Option<&RepositoryStatus>,
) {
    let status = build_status_bar_with_prefix(focus_prefix(focus), hints);
    let Some(repo) = repo else {
        frame.render_widget(Paragraph::new(status), area);
        return;
    };

    let summary = repo_summary(repo);
    let [hints_area, summary_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(summary.width() as u16),
    ])
    .areas(area);
    frame.render_widget(Paragraph::new(status), hints_area);
    frame.render_widget(Paragraph::new(summary), summary_area);
}

/// Render the status bar for diff view
pub fn render_diff_status_bar(frame: &mut Frame, area: Rect, diff_view: &DiffView) {
    let prefix = vec![Span::styled(
        format!(" {} ", diff_view.current_context()),
        Style::default().fg(Color::Cyan),
    )];

    let status = build_status_bar_with_prefix(prefix, keys::DIFF_VIEW_HINTS);
    frame.render_widget(Paragraph::new(status), area);
}

/// Render the status bar for the file content view
pub fn render_content_status_bar(frame: &mut Frame, area: Rect, view: &FileContentView) {
    let prefix = vec![Span::styled(
        format!(" {} ", view.current_context()),
        Style::default().fg(Color::Cyan),
    )];

    let status = build_status_bar_with_prefix(prefix, keys::CONTENT_VIEW_HINTS);
    frame.render_widget(Paragraph::new(status), area);
}
