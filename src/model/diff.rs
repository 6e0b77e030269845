//! Diff data model
//!
//! Represents parsed unified-diff output for a single file or commit.

/// A single line in the diff output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    /// Type of this line
    pub kind: DiffLineKind,
    /// Content without the leading marker (raw text for headers)
    pub content: String,
    /// Line number on the old side (removed and context lines)
    pub old_line: Option<usize>,
    /// Line number on the new side (added and context lines)
    pub new_line: Option<usize>,
}

impl DiffLine {
    /// Create a header line (hunk header or file metadata)
    pub fn header(content: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Header,
            content: content.into(),
            old_line: None,
            new_line: None,
        }
    }

    /// Create a context line (unchanged)
    pub fn context(old_line: usize, new_line: usize, content: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Context,
            content: content.into(),
            old_line: Some(old_line),
            new_line: Some(new_line),
        }
    }

    /// Create an added line
    pub fn added(new_line: usize, content: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Added,
            content: content.into(),
            old_line: None,
            new_line: Some(new_line),
        }
    }

    /// Create a removed line
    pub fn removed(old_line: usize, content: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Removed,
            content: content.into(),
            old_line: Some(old_line),
            new_line: None,
        }
    }

    /// True for added and removed lines
    pub fn is_change(&self) -> bool {
        matches!(self.kind, DiffLineKind::Added | DiffLineKind::Removed)
    }
}

/// Type of diff line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineKind {
    /// Added line
    Added,
    /// Removed line
    Removed,
    /// Context line (unchanged)
    Context,
    /// Hunk header or file metadata (`diff`, `index`, `---`, `+++`, ...)
    Header,
}

impl DiffLineKind {
    /// Marker character shown in front of the content
    pub fn marker(self) -> char {
        match self {
            Self::Added => '+',
            Self::Removed => '-',
            Self::Context | Self::Header => ' ',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_line_header() {
        let line = DiffLine::header("@@ -1,3 +1,4 @@");
        assert_eq!(line.kind, DiffLineKind::Header);
        assert!(line.old_line.is_none());
        assert!(line.new_line.is_none());
        assert_eq!(line.content, "@@ -1,3 +1,4 @@");
    }

    #[test]
    fn test_diff_line_context() {
        let line = DiffLine::context(10, 12, "    fn main() {");
        assert_eq!(line.kind, DiffLineKind::Context);
        assert_eq!(line.old_line, Some(10));
        assert_eq!(line.new_line, Some(12));
        assert!(!line.is_change());
    }

    #[test]
    fn test_diff_line_added() {
        let line = DiffLine::added(11, "        println!(\"new\");");
        assert_eq!(line.kind, DiffLineKind::Added);
        assert_eq!(line.old_line, None);
        assert_eq!(line.new_line, Some(11));
        assert!(line.is_change());
    }

    #[test]
    fn test_diff_line_removed() {
        let line = DiffLine::removed(11, "        println!(\"old\");");
        assert_eq!(line.kind, DiffLineKind::Removed);
        assert_eq!(line.old_line, Some(11));
        assert_eq!(line.new_line, None);
        assert!(line.is_change());
    }

    #[test]
    fn test_markers() {
        assert_eq!(DiffLineKind::Added.marker(), '+');
        assert_eq!(DiffLineKind::Removed.marker(), '-');
        assert_eq!(DiffLineKind::Context.marker(), ' ');
        assert_eq!(DiffLineKind::Header.marker(), ' ');
    }
}
