//! Diff View
//!
//! Modal view over one diff (a file's working-tree changes or a commit).
//! Long runs of unchanged context are collapsed behind "show more" controls
//! that reveal a few lines per activation.

mod input;
mod render;

use crate::config::DiffConfig;
use crate::diff::{DiffDocument, RevealState, VisibleRow};
use crate::model::SectionId;
use crate::ui::components::ListCursor;

/// Action returned by DiffView key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffAction {
    /// No action needed
    None,
    /// Close the view and return to the panels
    Close,
}

/// Diff view state
#[derive(Debug)]
pub struct DiffView {
    /// Title shown in the border (file path or commit)
    pub title: String,
    document: DiffDocument,
    reveal: RevealState,
    batch: usize,
    line_numbers: bool,
    /// Cursor over the visible rows (lines and controls)
    cursor: ListCursor,
    /// Load error shown instead of the diff
    error: Option<String>,
    /// Last known visible height (updated during render)
    visible_height: usize,
}

impl DiffView {
    /// Default visible height for scroll calculations when not specified
    const DEFAULT_VISIBLE_HEIGHT: usize = 20;

    /// Create a view over raw unified diff text
    pub fn new(title: impl Into<String>, text: impl Into<String>, config: &DiffConfig) -> Self {
        Self {
            title: title.into(),
            document: DiffDocument::new(text, config.collapse_threshold),
            reveal: RevealState::new(),
            batch: config.reveal_batch,
            line_numbers: config.line_numbers,
            cursor: ListCursor::default(),
            error: None,
            visible_height: Self::DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Create a view that only shows a load error
    pub fn failed(title: impl Into<String>, error: impl Into<String>, config: &DiffConfig) -> Self {
        let mut view = Self::new(title, String::new(), config);
        view.error = Some(error.into());
        view
    }

    /// Replace the diff text after a refresh
    ///
    /// Reveal progress is kept when the text is unchanged and reset otherwise.
    pub fn set_text(&mut self, text: &str) {
        self.error = None;
        if self.document.set_text(text) {
            self.reveal.reset();
            self.cursor.clamp(self.row_count());
        }
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn document(&self) -> &DiffDocument {
        &self.document
    }

    pub fn reveal_state(&self) -> &RevealState {
        &self.reveal
    }

    pub fn cursor(&self) -> usize {
        self.cursor.selected()
    }

    /// Rows currently drawn
    pub fn rows(&self) -> Vec<VisibleRow<'_>> {
        self.document.rows(&self.reveal, self.batch).collect()
    }

    pub fn row_count(&self) -> usize {
        self.document.rows(&self.reveal, self.batch).count()
    }

    /// Status line context: `"<title> [row/rows]"`
    pub fn current_context(&self) -> String {
        let rows = self.row_count();
        if rows == 0 {
            self.title.clone()
        } else {
            format!("{} [{}/{}]", self.title, self.cursor() + 1, rows)
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    fn set_cursor(&mut self, row: usize) {
        self.cursor.select(row, self.row_count());
        self.cursor.follow(self.visible_height);
    }

    fn half_page(&self) -> usize {
        (self.visible_height / 2).max(1)
    }

    pub fn move_down(&mut self) {
        self.cursor.down(self.row_count());
        self.cursor.follow(self.visible_height);
    }

    pub fn move_up(&mut self) {
        self.cursor.up();
        self.cursor.follow(self.visible_height);
    }

    pub fn half_page_down(&mut self) {
        self.cursor.down_by(self.half_page(), self.row_count());
        self.cursor.follow(self.visible_height);
    }

    pub fn half_page_up(&mut self) {
        self.cursor.up_by(self.half_page());
        self.cursor.follow(self.visible_height);
    }

    pub fn jump_to_top(&mut self) {
        self.set_cursor(0);
    }

    pub fn jump_to_bottom(&mut self) {
        self.set_cursor(usize::MAX);
    }

    /// Move the cursor to the next reveal control, if any
    pub fn next_control(&mut self) -> bool {
        let target = self
            .rows()
            .iter()
            .enumerate()
            .skip(self.cursor() + 1)
            .find(|(_, row)| matches!(row, VisibleRow::Control(_)))
            .map(|(i, _)| i);
        target.map(|i| self.set_cursor(i)).is_some()
    }

    /// Move the cursor to the previous reveal control, if any
    pub fn prev_control(&mut self) -> bool {
        let target = self
            .rows()
            .iter()
            .take(self.cursor())
            .rposition(|row| matches!(row, VisibleRow::Control(_)));
        target.map(|i| self.set_cursor(i)).is_some()
    }

    // =========================================================================
    // Reveal
    // =========================================================================

    /// Reveal the next batch of the section under the cursor
    ///
    /// Returns the number of lines revealed (0 when the cursor is not on a
    /// control). The cursor follows the control while the section still has
    /// hidden lines.
    pub fn reveal_at_cursor(&mut self) -> usize {
        let Some(VisibleRow::Control(control)) = self.rows().get(self.cursor()).copied() else {
            return 0;
        };
        let Some(section) = self.document.section(control.section).cloned() else {
            return 0;
        };

        let revealed = self.reveal.reveal_more(&section, self.batch);
        match self.control_row(control.section) {
            Some(row) => self.set_cursor(row),
            None => self.set_cursor(self.cursor()),
        }
        revealed
    }

    /// Reveal every collapsed section
    pub fn reveal_all(&mut self) {
        let sections = self.document.sections().to_vec();
        for section in &sections {
            self.reveal.reveal_all(section);
        }
        self.set_cursor(self.cursor());
    }

    /// Row index of the control for `section`
    fn control_row(&self, section: SectionId) -> Option<usize> {
        self.rows()
            .iter()
            .position(|row| matches!(row, VisibleRow::Control(c) if c.section == section))
    }
}
