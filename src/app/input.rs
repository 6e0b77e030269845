//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, Panel};
use crate::keys;
use crate::model::Notification;
use crate::ui::views::{ContentAction, DiffAction, ViewAction};
use crate::vim::{FocusContext, NavigableList, VimOutcome};

impl App {
    /// Handle key events
    ///
    /// Routing order: Ctrl+C, commit editor, diff view, file view,
    /// vim navigation, global keys, then the current panel.
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        if self.changes.is_editing_commit() {
            if let Some(action) = self.changes.handle_editor_key(key) {
                self.apply_action(action);
            }
            return;
        }

        if self.diff_view.is_some() {
            self.handle_diff_key(key);
            return;
        }

        if self.file_view.is_some() {
            self.handle_file_view_key(key);
            return;
        }

        match self.route_vim_key(key) {
            VimOutcome::Ignored => {}
            VimOutcome::Consumed => {
                self.sync_vim();
                return;
            }
            VimOutcome::Action(action) => {
                self.apply_action(action);
                self.sync_vim();
                return;
            }
        }

        if !self.handle_global_key(key) {
            self.handle_panel_key(key);
        }
        self.sync_vim();
    }

    fn handle_diff_key(&mut self, key: KeyEvent) {
        if keys::is_refresh_key(&key) {
            self.reload_diff();
            return;
        }
        let height = self.panel_height();
        let Some(ref mut diff_view) = self.diff_view else {
            return;
        };
        match diff_view.handle_key_with_height(key, height) {
            DiffAction::None => {}
            DiffAction::Close => self.close_diff(),
        }
    }

    fn handle_file_view_key(&mut self, key: KeyEvent) {
        if keys::is_refresh_key(&key) {
            self.reload_file_content();
            return;
        }
        let height = self.panel_height();
        let Some(ref mut file_view) = self.file_view else {
            return;
        };
        match file_view.handle_key_with_height(key, height) {
            ContentAction::None => {}
            ContentAction::Close => self.close_file_content(),
            ContentAction::ShowDiff => {
                let path = file_view.path.clone();
                self.close_file_content();
                self.open_file_diff(&path);
            }
        }
    }

    /// Offer the key to the vim navigator with the mounted list for its context
    fn route_vim_key(&mut self, key: KeyEvent) -> VimOutcome<ViewAction> {
        let context = self.vim.state().active_context();
        let panel = self.panel;
        let Self {
            vim,
            header,
            file_tree,
            commits,
            branches,
            changes,
            ..
        } = self;

        let list: Option<&mut dyn NavigableList<Action = ViewAction>> =
            if context == FocusContext::Header {
                Some(header)
            } else if context == panel.context() {
                Some(match panel {
                    Panel::Files => file_tree as &mut dyn NavigableList<Action = ViewAction>,
                    Panel::History => commits as &mut dyn NavigableList<Action = ViewAction>,
                    Panel::Branches => branches as &mut dyn NavigableList<Action = ViewAction>,
                    Panel::Changes => changes as &mut dyn NavigableList<Action = ViewAction>,
                })
            } else {
                None
            };

        vim.handle_key(key, list)
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        if keys::is_refresh_key(&key) {
            self.refresh_all();
            self.notification = Some(Notification::info("Refreshed"));
            return true;
        }

        let panel = match key.code {
            keys::QUIT => {
                self.quit();
                return true;
            }
            keys::PUSH => {
                self.execute_push();
                return true;
            }
            keys::PULL => {
                self.execute_pull();
                return true;
            }
            keys::TAB if !self.vim.is_enabled() => self.panel.next(),
            keys::PANEL_FILES => Panel::Files,
            keys::PANEL_HISTORY => Panel::History,
            keys::PANEL_BRANCHES => Panel::Branches,
            keys::PANEL_CHANGES => Panel::Changes,
            _ => return false,
        };
        self.switch_panel(panel);
        true
    }

    fn handle_panel_key(&mut self, key: KeyEvent) {
        let action = match self.panel {
            Panel::Files => self.file_tree.handle_key(key),
            Panel::History => self.commits.handle_key(key),
            Panel::Branches => self.branches.handle_key(key),
            Panel::Changes => self.changes.handle_key(key),
        };
        self.pull_panel_selection();
        if let Some(action) = action {
            self.apply_action(action);
        }
    }
}
