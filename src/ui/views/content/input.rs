//! Key handling for FileContentView

use crossterm::event::KeyEvent;

use crate::keys;

use super::{ContentAction, FileContentView};

impl FileContentView {
    /// Handle key input
    #[cfg(test)]
    pub fn handle_key(&mut self, key: KeyEvent) -> ContentAction {
        self.handle_key_with_height(key, Self::DEFAULT_VISIBLE_HEIGHT)
    }

    /// Handle key input with explicit visible height
    pub fn handle_key_with_height(
        &mut self,
        key: KeyEvent,
        visible_height: usize,
    ) -> ContentAction {
        self.visible_height = visible_height;

        if keys::is_half_page_down(&key) {
            self.half_page_down();
            return ContentAction::None;
        }
        if keys::is_half_page_up(&key) {
            self.half_page_up();
            return ContentAction::None;
        }

        match key.code {
            code if keys::is_move_down(code) => self.move_down(),
            code if keys::is_move_up(code) => self.move_up(),
            keys::GO_TOP => self.jump_to_top(),
            keys::GO_BOTTOM => self.jump_to_bottom(),
            keys::SHOW_DIFF => return ContentAction::ShowDiff,
            keys::QUIT | keys::ESC => return ContentAction::Close,
            _ => {}
        }
        ContentAction::None
    }
}
