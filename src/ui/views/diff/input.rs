//! Key handling for DiffView

use crossterm::event::KeyEvent;

use crate::keys;

use super::{DiffAction, DiffView};

impl DiffView {
    /// Handle key input
    #[cfg(test)]
    pub fn handle_key(&mut self, key: KeyEvent) -> DiffAction {
        self.handle_key_with_height(key, Self::DEFAULT_VISIBLE_HEIGHT)
    }

    /// Handle key input with explicit visible height
    pub fn handle_key_with_height(&mut self, key: KeyEvent, visible_height: usize) -> DiffAction {
        // Always update visible_height to ensure accurate scroll bounds
        self.visible_height = visible_height;

        if keys::is_half_page_down(&key) {
            self.half_page_down();
            return DiffAction::None;
        }
        if keys::is_half_page_up(&key) {
            self.half_page_up();
            return DiffAction::None;
        }

        match key.code {
            code if keys::is_move_down(code) => self.move_down(),
            code if keys::is_move_up(code) => self.move_up(),
            keys::GO_TOP => self.jump_to_top(),
            keys::GO_BOTTOM => self.jump_to_bottom(),
            keys::REVEAL | keys::REVEAL_ALT => {
                self.reveal_at_cursor();
            }
            keys::REVEAL_ALL => self.reveal_all(),
            keys::NEXT_CONTROL => {
                self.next_control();
            }
            keys::PREV_CONTROL => {
                self.prev_control();
            }
            keys::QUIT | keys::ESC => return DiffAction::Close,
            _ => {}
        }
        DiffAction::None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::ui::views::diff::tests::view;

    fn press(view: &mut DiffView, code: KeyCode) -> DiffAction {
        view.handle_key(KeyEvent::from(code))
    }

    #[test]
    fn test_enter_and_space_reveal() {
        let mut view = view();
        press(&mut view, KeyCode::Char(']'));
        press(&mut view, KeyCode::Enter);
        assert_eq!(view.row_count(), 11);
        press(&mut view, KeyCode::Char(' '));
        assert_eq!(view.row_count(), 15);
    }

    #[test]
    fn test_expand_all_key() {
        let mut view = view();
        press(&mut view, KeyCode::Char('e'));
        assert_eq!(view.row_count(), 15);
    }

    #[test]
    fn test_close_keys() {
        let mut view = view();
        assert_eq!(press(&mut view, KeyCode::Char('q')), DiffAction::Close);
        assert_eq!(press(&mut view, KeyCode::Esc), DiffAction::Close);
        assert_eq!(press(&mut view, KeyCode::Char('j')), DiffAction::None);
    }

    #[test]
    fn test_movement_is_clamped() {
        let mut view = view();
        press(&mut view, KeyCode::Char('k'));
        assert_eq!(view.cursor(), 0);
        press(&mut view, KeyCode::Char('G'));
        assert_eq!(view.cursor(), 5);
        press(&mut view, KeyCode::Down);
        assert_eq!(view.cursor(), 5);
        press(&mut view, KeyCode::Char('g'));
        assert_eq!(view.cursor(), 0);
    }

    #[test]
    fn test_half_page() {
        let mut view = view();
        view.handle_key_with_height(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL), 4);
        assert_eq!(view.cursor(), 2);
        view.handle_key_with_height(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL), 4);
        assert_eq!(view.cursor(), 0);
    }
}
