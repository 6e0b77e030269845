//! Collapsible context sections of a parsed diff

use std::fmt;

/// Identifier of a collapsible section, derived from its start index
///
/// Unique within one parsed diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(pub usize);

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section-{}", self.0)
    }
}

/// Which end of a collapsed section is revealed first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealDirection {
    /// Reveal from the top (no change follows the section)
    FromStart,
    /// Reveal from the bottom, nearest to the change that follows
    FromEnd,
}

/// A maximal run of consecutive context lines long enough to collapse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsibleSection {
    /// Section identifier
    pub id: SectionId,
    /// Index of the first line (inclusive)
    pub start: usize,
    /// Index of the last line (inclusive)
    pub end: usize,
    /// Reveal direction
    pub direction: RevealDirection,
}

impl CollapsibleSection {
    /// Create a section covering `start..=end`
    pub fn new(start: usize, end: usize, direction: RevealDirection) -> Self {
        Self {
            id: SectionId(start),
            start,
            end,
            direction,
        }
    }

    /// Number of lines in the section
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Sections always hold at least one line
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if a line index falls inside the section
    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_len_and_id() {
        let section = CollapsibleSection::new(4, 9, RevealDirection::FromStart);
        assert_eq!(section.len(), 6);
        assert_eq!(section.id, SectionId(4));
        assert_eq!(section.id.to_string(), "section-4");
    }

    #[test]
    fn test_section_contains() {
        let section = CollapsibleSection::new(2, 4, RevealDirection::FromEnd);
        assert!(!section.contains(1));
        assert!(section.contains(2));
        assert!(section.contains(4));
        assert!(!section.contains(5));
    }
}
