//! Diff segmentation and progressive reveal
//!
//! Pure functions over parsed diff lines:
//! - [`identify_sections`]: find long runs of context lines
//! - [`visible_rows`]: interleave visible lines with reveal controls
//!
//! [`DiffDocument`] ties them to the raw diff text so parsing and section
//! detection only rerun when the text changes.

mod reveal;
mod sections;

pub use reveal::{
    DEFAULT_REVEAL_BATCH, RevealControl, RevealState, VisibleRow, VisibleRows, visible_rows,
};
pub use sections::{DEFAULT_COLLAPSE_THRESHOLD, identify_sections, identify_sections_default};

use crate::git::parser::Parser;
use crate::model::{CollapsibleSection, DiffLine, SectionId};

/// Parsed diff text with its collapsible sections
#[derive(Debug, Clone, Default)]
pub struct DiffDocument {
    text: String,
    lines: Vec<DiffLine>,
    sections: Vec<CollapsibleSection>,
    threshold: usize,
}

impl DiffDocument {
    /// Parse `text` and identify sections of at least `threshold` lines
    pub fn new(text: impl Into<String>, threshold: usize) -> Self {
        let text = text.into();
        let lines = Parser::parse_diff(&text);
        let sections = identify_sections(&lines, threshold);
        Self {
            text,
            lines,
            sections,
            threshold,
        }
    }

    /// Replace the diff text
    ///
    /// Returns false (and keeps the parsed data) when the text is unchanged.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        *self = Self::new(text, self.threshold);
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }

    pub fn sections(&self) -> &[CollapsibleSection] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up a section by id
    pub fn section(&self, id: SectionId) -> Option<&CollapsibleSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Rows to draw under the given reveal state
    pub fn rows<'a>(&'a self, state: &'a RevealState, batch: usize) -> VisibleRows<'a> {
        visible_rows(&self.lines, &self.sections, state, batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RevealDirection;

    const WORKED_EXAMPLE: &str = "@@ -1,5 +1,5 @@\n line1\n line2\n line3\n line4\n-old\n+new\n";

    #[test]
    fn test_document_parses_and_sections() {
        let doc = DiffDocument::new(WORKED_EXAMPLE, DEFAULT_COLLAPSE_THRESHOLD);

        assert_eq!(doc.lines().len(), 7);
        assert_eq!(doc.sections().len(), 1);
        let section = doc.section(SectionId(1)).unwrap();
        assert_eq!(section.direction, RevealDirection::FromEnd);
        assert!(doc.section(SectionId(2)).is_none());
    }

    #[test]
    fn test_set_text_same_text_is_noop() {
        let mut doc = DiffDocument::new(WORKED_EXAMPLE, DEFAULT_COLLAPSE_THRESHOLD);
        assert!(!doc.set_text(WORKED_EXAMPLE));
        assert_eq!(doc.lines().len(), 7);
    }

    #[test]
    fn test_set_text_reparses_with_same_threshold() {
        let mut doc = DiffDocument::new(WORKED_EXAMPLE, 5);
        assert!(doc.sections().is_empty());

        assert!(doc.set_text("@@ -1,6 +1,6 @@\n a\n b\n c\n d\n e\n+f\n"));
        assert_eq!(doc.lines().len(), 7);
        assert_eq!(doc.sections().len(), 1);
        assert_eq!(doc.text(), "@@ -1,6 +1,6 @@\n a\n b\n c\n d\n e\n+f\n");
    }

    #[test]
    fn test_empty_document() {
        let doc = DiffDocument::default();
        assert!(doc.is_empty());
        let state = RevealState::new();
        assert_eq!(doc.rows(&state, DEFAULT_REVEAL_BATCH).count(), 0);
    }
}
