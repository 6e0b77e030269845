//! Progressive reveal of collapsed context
//!
//! [`RevealState`] records how many lines of each section are visible, and
//! [`visible_rows`] turns lines + sections + state into the rows to draw:
//! ordinary diff lines interleaved with one "show more" control per
//! partially hidden section.

use std::collections::HashMap;
use std::ops::Range;

use crate::model::{CollapsibleSection, DiffLine, RevealDirection, SectionId};

/// Lines revealed per activation of a reveal control
pub const DEFAULT_REVEAL_BATCH: usize = 5;

/// Number of revealed lines per section
///
/// Starts at 0 for every section. Only [`RevealState::reveal_more`] and
/// [`RevealState::reveal_all`] mutate it, and values never exceed the section
/// length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: HashMap<SectionId, usize>,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines of `section` currently visible
    pub fn revealed(&self, section: &CollapsibleSection) -> usize {
        self.revealed
            .get(&section.id)
            .copied()
            .unwrap_or(0)
            .min(section.len())
    }

    /// Check if every line of `section` is visible
    pub fn is_fully_revealed(&self, section: &CollapsibleSection) -> bool {
        self.revealed(section) == section.len()
    }

    /// Reveal up to `batch` more lines of `section`
    ///
    /// Returns the number of lines newly revealed (0 at the ceiling).
    pub fn reveal_more(&mut self, section: &CollapsibleSection, batch: usize) -> usize {
        let current = self.revealed(section);
        let step = batch.max(1).min(section.len() - current);
        if step > 0 {
            self.revealed.insert(section.id, current + step);
        }
        step
    }

    /// Reveal the whole section
    pub fn reveal_all(&mut self, section: &CollapsibleSection) {
        self.revealed.insert(section.id, section.len());
    }

    /// Forget all reveal counters
    pub fn reset(&mut self) {
        self.revealed.clear();
    }
}

/// Placeholder row standing in for the hidden part of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealControl {
    /// Section the control expands
    pub section: SectionId,
    /// Lines still hidden
    pub remaining: usize,
    /// Lines the next activation reveals
    pub next_batch: usize,
}

impl RevealControl {
    /// Control for a section, or None once it is fully revealed
    fn for_section(section: &CollapsibleSection, revealed: usize, batch: usize) -> Option<Self> {
        let remaining = section.len().saturating_sub(revealed);
        (remaining > 0).then(|| Self {
            section: section.id,
            remaining,
            next_batch: batch.max(1).min(remaining),
        })
    }
}

/// One row of the rendered diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleRow<'a> {
    /// A diff line, with its index into the parsed lines
    Line { index: usize, line: &'a DiffLine },
    /// A "show more" control
    Control(RevealControl),
}

/// Pending output for the section currently being emitted
#[derive(Debug, Clone)]
struct Segment {
    before: Option<RevealControl>,
    lines: Range<usize>,
    after: Option<RevealControl>,
}

impl Segment {
    fn for_section(
        section: &CollapsibleSection,
        revealed: usize,
        batch: usize,
        line_count: usize,
    ) -> Self {
        let control = RevealControl::for_section(section, revealed, batch);
        let end = (section.end + 1).min(line_count);
        match section.direction {
            RevealDirection::FromStart => Self {
                before: None,
                lines: section.start..(section.start + revealed).min(end),
                after: control,
            },
            RevealDirection::FromEnd => Self {
                before: control,
                lines: end.saturating_sub(revealed).max(section.start)..end,
                after: None,
            },
        }
    }
}

/// Lazy iterator over the visible rows of a diff
///
/// A clone iterates independently from the same position. Call
/// [`visible_rows`] again to start from the first row.
#[derive(Debug, Clone)]
pub struct VisibleRows<'a> {
    lines: &'a [DiffLine],
    sections: &'a [CollapsibleSection],
    state: &'a RevealState,
    batch: usize,
    next_line: usize,
    next_section: usize,
    segment: Option<Segment>,
}

impl<'a> Iterator for VisibleRows<'a> {
    type Item = VisibleRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(segment) = self.segment.as_mut() {
                if let Some(control) = segment.before.take() {
                    return Some(VisibleRow::Control(control));
                }
                if let Some(index) = segment.lines.next() {
                    return Some(VisibleRow::Line {
                        index,
                        line: &self.lines[index],
                    });
                }
                if let Some(control) = segment.after.take() {
                    return Some(VisibleRow::Control(control));
                }
                self.segment = None;
            }

            if self.next_line >= self.lines.len() {
                return None;
            }

            while self
                .sections
                .get(self.next_section)
                .is_some_and(|s| s.end < self.next_line)
            {
                self.next_section += 1;
            }

            if let Some(section) = self.sections.get(self.next_section)
                && section.start == self.next_line
            {
                let revealed = self.state.revealed(section);
                self.segment = Some(Segment::for_section(
                    section,
                    revealed,
                    self.batch,
                    self.lines.len(),
                ));
                self.next_line = section.end + 1;
                self.next_section += 1;
                continue;
            }

            let index = self.next_line;
            self.next_line += 1;
            return Some(VisibleRow::Line {
                index,
                line: &self.lines[index],
            });
        }
    }
}

/// Produce the rows to draw for `lines` given its sections and reveal state
///
/// Sections must be sorted by start and disjoint, as produced by
/// [`identify_sections`](super::identify_sections).
///
/// - `FromStart`: the first `revealed` lines, then one control if lines remain.
/// - `FromEnd`: one control if lines remain, then the last `revealed` lines.
pub fn visible_rows<'a>(
    lines: &'a [DiffLine],
    sections: &'a [CollapsibleSection],
    state: &'a RevealState,
    batch: usize,
) -> VisibleRows<'a> {
    VisibleRows {
        lines,
        sections,
        state,
        batch,
        next_line: 0,
        next_section: 0,
        segment: None,
    }
}
