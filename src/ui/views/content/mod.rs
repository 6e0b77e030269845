//! File content view
//!
//! Modal view over one working-tree file with a line-number gutter.
//! Files containing NUL bytes are treated as binary and not drawn.

mod input;
mod render;

use crate::ui::components::ListCursor;

/// Spaces a tab expands to when drawn
const TAB_WIDTH: usize = 4;

/// Action returned by FileContentView key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentAction {
    /// No action needed
    None,
    /// Close the view and return to the panels
    Close,
    /// Replace the view with the file's diff
    ShowDiff,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Body {
    Text(Vec<String>),
    /// Size in bytes
    Binary(usize),
    Error(String),
}

/// File content view state
#[derive(Debug)]
pub struct FileContentView {
    /// Repository-relative path of the file
    pub path: String,
    body: Body,
    cursor: ListCursor,
    /// Last known visible height (updated during render)
    visible_height: usize,
}

impl FileContentView {
    /// Default visible height for scroll calculations when not specified
    const DEFAULT_VISIBLE_HEIGHT: usize = 20;

    pub fn new(path: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            path: path.into(),
            body: decode(bytes),
            cursor: ListCursor::default(),
            visible_height: Self::DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Create a view that only shows a load error
    pub fn failed(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            body: Body::Error(error.into()),
            ..Self::new(path, &[])
        }
    }

    /// Replace the contents after a refresh, keeping the cursor in range
    pub fn set_content(&mut self, bytes: &[u8]) {
        self.body = decode(bytes);
        self.cursor.clamp(self.line_count());
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.body = Body::Error(error.into());
    }

    pub fn error(&self) -> Option<&str> {
        match &self.body {
            Body::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Size of a binary file, None for text
    pub fn binary_size(&self) -> Option<usize> {
        match self.body {
            Body::Binary(size) => Some(size),
            _ => None,
        }
    }

    pub fn lines(&self) -> &[String] {
        match &self.body {
            Body::Text(lines) => lines,
            _ => &[],
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines().len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor.selected()
    }

    /// Status line context: `"<path> [line/lines]"`
    pub fn current_context(&self) -> String {
        match self.line_count() {
            0 => self.path.clone(),
            n => format!("{} [{}/{}]", self.path, self.cursor() + 1, n),
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    fn half_page(&self) -> usize {
        (self.visible_height / 2).max(1)
    }

    pub fn move_down(&mut self) {
        self.cursor.down(self.line_count());
        self.cursor.follow(self.visible_height);
    }

    pub fn move_up(&mut self) {
        self.cursor.up();
        self.cursor.follow(self.visible_height);
    }

    pub fn half_page_down(&mut self) {
        self.cursor.down_by(self.half_page(), self.line_count());
        self.cursor.follow(self.visible_height);
    }

    pub fn half_page_up(&mut self) {
        self.cursor.up_by(self.half_page());
        self.cursor.follow(self.visible_height);
    }

    pub fn jump_to_top(&mut self) {
        self.cursor.select(0, self.line_count());
        self.cursor.follow(self.visible_height);
    }

    pub fn jump_to_bottom(&mut self) {
        self.cursor.select(usize::MAX, self.line_count());
        self.cursor.follow(self.visible_height);
    }
}

fn decode(bytes: &[u8]) -> Body {
    if bytes.contains(&0) {
        return Body::Binary(bytes.len());
    }
    let text = String::from_utf8_lossy(bytes);
    Body::Text(
        text.lines()
            .map(|line| line.replace('\t', &" ".repeat(TAB_WIDTH)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) fn view() -> FileContentView {
        let text: String = (1..=10).map(|i| format!("line {}\n", i)).collect();
        FileContentView::new("src/lib.rs", text.as_bytes())
    }

    #[test]
    fn test_text_is_split_into_lines() {
        let view = FileContentView::new("a.txt", b"one\r\ntwo\n\tthree");
        assert_eq!(view.lines(), ["one", "two", "    three"]);
        assert_eq!(view.binary_size(), None);
        assert_eq!(view.current_context(), "a.txt [1/3]");
    }

    #[test]
    fn test_nul_bytes_mean_binary() {
        let view = FileContentView::new("logo.png", b"\x89PNG\0\0\x01");
        assert_eq!(view.binary_size(), Some(7));
        assert_eq!(view.line_count(), 0);
        assert_eq!(view.current_context(), "logo.png");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let view = FileContentView::new("latin1.txt", b"caf\xe9");
        assert_eq!(view.lines(), ["caf\u{fffd}"]);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut view = view();
        view.jump_to_bottom();
        assert_eq!(view.cursor(), 9);
        view.move_down();
        assert_eq!(view.cursor(), 9);
        view.jump_to_top();
        view.move_up();
        assert_eq!(view.cursor(), 0);

        view.visible_height = 6;
        view.half_page_down();
        assert_eq!(view.cursor(), 3);
        view.half_page_up();
        assert_eq!(view.cursor(), 0);
    }

    #[test]
    fn test_set_content_clamps_cursor() {
        let mut view = view();
        view.jump_to_bottom();
        view.set_content(b"only\ntwo\n");
        assert_eq!(view.cursor(), 1);

        view.set_error("gone");
        assert_eq!(view.error(), Some("gone"));
        view.set_content(b"back\n");
        assert_eq!(view.error(), None);
        assert_eq!(view.cursor(), 0);
    }
}
