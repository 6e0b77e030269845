//! File tree key handling

use crossterm::event::KeyEvent;

use super::FileTreeView;
use crate::keys;
use crate::ui::views::ViewAction;

impl FileTreeView {
    /// Handle key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ViewAction> {
        let selected = self.cursor.selected();
        match key.code {
            code if keys::is_move_down(code) => self.cursor.down(self.rows.len()),
            code if keys::is_move_up(code) => self.cursor.up(),
            keys::GO_TOP => self.select(0),
            keys::GO_BOTTOM => self.select(usize::MAX),
            code if keys::is_expand(code) => {
                self.expand(selected);
            }
            code if keys::is_collapse(code) => {
                if let Some(target) = self.collapse(selected) {
                    self.select(target);
                }
            }
            keys::OPEN => return self.activate(selected),
            keys::SHOW_DIFF => return self.diff_selected(),
            _ => {}
        }
        None
    }
}
