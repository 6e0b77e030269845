//! Changes panel key handling

use crossterm::event::{KeyCode, KeyEvent};

use super::FileChangesView;
use crate::keys;
use crate::ui::views::ViewAction;
use crate::vim::NavigableList;

impl FileChangesView {
    /// Handle key event in list mode
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ViewAction> {
        match key.code {
            code if keys::is_move_down(code) => self.cursor.down(self.len()),
            code if keys::is_move_up(code) => self.cursor.up(),
            keys::GO_TOP => self.select(0),
            keys::GO_BOTTOM => self.select(usize::MAX),
            keys::OPEN => return self.on_activate(self.cursor.selected()),
            _ => return self.handle_action_key(key),
        }
        None
    }

    /// Panel commands that also apply while vim navigation is on
    pub fn handle_action_key(&mut self, key: KeyEvent) -> Option<ViewAction> {
        match key.code {
            keys::STAGE => self.stage_selected(),
            keys::UNSTAGE => self.unstage_selected(),
            keys::COMMIT => {
                if !self.start_commit() {
                    return Some(ViewAction::Warn("Nothing staged to commit".to_string()));
                }
                None
            }
            _ => None,
        }
    }

    /// Handle key event while the commit message editor is open
    pub fn handle_editor_key(&mut self, key: KeyEvent) -> Option<ViewAction> {
        if keys::is_submit_commit_key(&key) {
            let textarea = self.editor.take()?;
            let message = textarea.lines().join("\n");
            if message.trim().is_empty() {
                return None;
            }
            return Some(ViewAction::Commit(message));
        }

        if key.code == KeyCode::Esc {
            self.cancel_commit();
            return None;
        }

        if let Some(ref mut textarea) = self.editor {
            textarea.input(key);
        }
        None
    }
}
