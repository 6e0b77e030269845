//! Selection state and row styling shared by the list panels

use ratatui::{
    style::{Modifier, Style},
    text::Line,
};

use crate::ui::theme;

/// Selection and scroll position of a list panel
///
/// Every move clamps the selection to the list length. The scroll offset is
/// only adjusted by [`ListCursor::scroll_to`], which panels call with the row
/// the selection occupies on screen (it differs from the index when a panel
/// draws headings between entries).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    selected: usize,
    offset: usize,
}

impl ListCursor {
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// First drawn row
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Select `index` in a list of `len` entries (0 when empty)
    pub fn select(&mut self, index: usize, len: usize) {
        self.selected = index.min(len.saturating_sub(1));
    }

    /// Move down one entry, stopping at the last
    pub fn down(&mut self, len: usize) {
        self.select(self.selected.saturating_add(1), len);
    }

    /// Move down `step` entries, stopping at the last
    pub fn down_by(&mut self, step: usize, len: usize) {
        self.select(self.selected.saturating_add(step), len);
    }

    /// Move up one entry, stopping at the first
    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move up `step` entries, stopping at the first
    pub fn up_by(&mut self, step: usize) {
        self.selected = self.selected.saturating_sub(step);
    }

    /// Re-clamp after the list was replaced with one of `len` entries
    pub fn clamp(&mut self, len: usize) {
        self.select(self.selected, len);
        if self.offset >= len {
            self.offset = 0;
        }
    }

    /// Scroll so that display `row` lies within `visible` rows
    ///
    /// Returns the new offset. A zero-height window keeps the offset.
    pub fn scroll_to(&mut self, row: usize, visible: usize) -> usize {
        if visible > 0 {
            if row < self.offset {
                self.offset = row;
            } else if row >= self.offset + visible {
                self.offset = row + 1 - visible;
            }
        }
        self.offset
    }

    /// Scroll so the selected entry is visible
    pub fn follow(&mut self, visible: usize) -> usize {
        self.scroll_to(self.selected, visible)
    }
}

/// Style for a list row
///
/// The vim focus ring wins over the plain selection highlight.
pub fn row_style(selected: bool, vim_focused: bool) -> Style {
    match (selected, vim_focused) {
        (true, true) => Style::default()
            .fg(theme::selection::FG)
            .bg(theme::selection::VIM_BG)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default()
            .fg(theme::selection::FG)
            .bg(theme::selection::BG)
            .add_modifier(Modifier::BOLD),
        _ => Style::default(),
    }
}

/// Cursor marker in front of a row
pub fn cursor_marker(selected: bool) -> &'static str {
    if selected { " > " } else { "   " }
}

/// Apply the row style to a finished line
pub fn styled_row(line: Line<'static>, selected: bool, vim_focused: bool) -> Line<'static> {
    if selected {
        line.style(row_style(selected, vim_focused))
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // ListCursor
    // =========================================================================

    #[test]
    fn test_cursor_moves_are_clamped() {
        let mut cursor = ListCursor::default();
        cursor.down(3);
        cursor.down(3);
        cursor.down(3);
        assert_eq!(cursor.selected(), 2);

        cursor.up();
        cursor.up();
        cursor.up();
        assert_eq!(cursor.selected(), 0);

        cursor.down_by(10, 5);
        assert_eq!(cursor.selected(), 4);
        cursor.up_by(3);
        assert_eq!(cursor.selected(), 1);
    }

    #[test]
    fn test_cursor_on_empty_list_stays_at_zero() {
        let mut cursor = ListCursor::default();
        cursor.down(0);
        cursor.select(7, 0);
        assert_eq!(cursor.selected(), 0);
    }

    #[test]
    fn test_cursor_clamp_after_shrink() {
        let mut cursor = ListCursor::default();
        cursor.select(9, 10);
        cursor.follow(4);
        assert_eq!(cursor.offset(), 6);

        cursor.clamp(3);
        assert_eq!(cursor.selected(), 2);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_scroll_keeps_row_in_window() {
        let mut cursor = ListCursor::default();
        // rows 0..10 visible, row 10 forces one line of scroll
        assert_eq!(cursor.scroll_to(9, 10), 0);
        assert_eq!(cursor.scroll_to(10, 10), 1);
        assert_eq!(cursor.scroll_to(15, 10), 6);
        // moving back above the window pulls it up
        assert_eq!(cursor.scroll_to(2, 10), 2);
        // zero-height window keeps the offset
        assert_eq!(cursor.scroll_to(40, 0), 2);
    }

    #[test]
    fn test_row_style() {
        assert_eq!(row_style(false, true), Style::default());
        assert_eq!(row_style(true, false).bg, Some(theme::selection::BG));
        assert_eq!(row_style(true, true).bg, Some(theme::selection::VIM_BG));
    }

    #[test]
    fn test_cursor_marker() {
        assert_eq!(cursor_marker(true), " > ");
        assert_eq!(cursor_marker(false).len(), 3);
    }
}
