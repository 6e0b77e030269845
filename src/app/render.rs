//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::{App, Panel};
use crate::keys;
use crate::ui::widgets::{
    render_content_status_bar, render_diff_status_bar, render_error_banner,
    render_notification_banner, render_status_bar,
};
use crate::vim::{self, FocusContext};

/// Header bar height (tabs plus bottom border)
const HEADER_HEIGHT: u16 = 2;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.last_frame_height = frame.area().height;

        let [header_area, main_area, status_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let header_focus = self
            .vim
            .is_active(FocusContext::Header)
            .then(|| self.vim.current_index());
        self.header.render(frame, header_area, self.panel, header_focus);

        if let Some(ref mut diff_view) = self.diff_view {
            diff_view.render(frame, main_area);
            render_diff_status_bar(frame, status_area, diff_view);
        } else if let Some(ref mut file_view) = self.file_view {
            file_view.render(frame, main_area);
            render_content_status_bar(frame, status_area, file_view);
        } else {
            self.render_panel(frame, main_area);
            self.render_status(frame, status_area);
        }

        // Errors win over notifications for the banner row
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        } else if let Some(ref notification) = self.notification {
            render_notification_banner(frame, notification);
        }
    }

    fn render_panel(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.vim.is_active(self.panel.context());
        match self.panel {
            Panel::Files => self.file_tree.render(frame, area, focused),
            Panel::History => self.commits.render(frame, area, focused),
            Panel::Branches => self.branches.render(frame, area, focused),
            Panel::Changes => self.changes.render(frame, area, focused),
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if self.changes.is_editing_commit() {
            render_status_bar(frame, area, keys::COMMIT_EDITOR_HINTS, None, None);
            return;
        }
        let hints = keys::panel_hints(self.panel, self.vim.is_enabled());
        let focus = vim::focus_info(self.vim.state());
        render_status_bar(frame, area, &hints, focus.as_deref(), self.changes.status());
    }
}
