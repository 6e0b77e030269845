//! Collapsible section identification
//!
//! Finds runs of unchanged context lines that are long enough to fold away.

use crate::model::{CollapsibleSection, DiffLine, DiffLineKind, RevealDirection};

/// Minimum number of consecutive context lines that form a section
pub const DEFAULT_COLLAPSE_THRESHOLD: usize = 3;

/// Identify collapsible sections with the default threshold
pub fn identify_sections_default(lines: &[DiffLine]) -> Vec<CollapsibleSection> {
    identify_sections(lines, DEFAULT_COLLAPSE_THRESHOLD)
}

/// Identify maximal runs of `Context` lines of at least `threshold` lines
///
/// A run terminated by an added or removed line reveals from its end (nearest
/// to the change). A run terminated by a header, or by the end of input,
/// reveals from its start. Sections never overlap.
pub fn identify_sections(lines: &[DiffLine], threshold: usize) -> Vec<CollapsibleSection> {
    let threshold = threshold.max(1);
    let mut sections = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        if line.kind == DiffLineKind::Context {
            run_start.get_or_insert(i);
            continue;
        }

        if let Some(start) = run_start.take()
            && i - start >= threshold
        {
            let direction = if line.is_change() {
                RevealDirection::FromEnd
            } else {
                RevealDirection::FromStart
            };
            sections.push(CollapsibleSection::new(start, i - 1, direction));
        }
    }

    if let Some(start) = run_start
        && lines.len() - start >= threshold
    {
        sections.push(CollapsibleSection::new(
            start,
            lines.len() - 1,
            RevealDirection::FromStart,
        ));
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::parser::Parser;

    fn context_run(start_line: usize, count: usize) -> Vec<DiffLine> {
        (0..count)
            .map(|i| DiffLine::context(start_line + i, start_line + i, format!("line{}", i)))
            .collect()
    }

    #[test]
    fn test_worked_example_from_end() {
        let lines =
            Parser::parse_diff("@@ -1,5 +1,5 @@\n line1\n line2\n line3\n line4\n-old\n+new\n");
        let sections = identify_sections_default(&lines);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].start, 1);
        assert_eq!(sections[0].end, 4);
        assert_eq!(sections[0].len(), 4);
        assert_eq!(sections[0].direction, RevealDirection::FromEnd);
    }

    #[test]
    fn test_short_run_is_not_a_section() {
        let mut lines = vec![DiffLine::header("@@ -1,3 +1,3 @@")];
        lines.extend(context_run(1, 2));
        lines.push(DiffLine::added(3, "x"));

        assert!(identify_sections_default(&lines).is_empty());
    }

    #[test]
    fn test_exact_threshold_is_a_section() {
        let mut lines = vec![DiffLine::removed(1, "x")];
        lines.extend(context_run(2, 3));
        lines.push(DiffLine::removed(5, "y"));

        let sections = identify_sections_default(&lines);
        assert_eq!(sections.len(), 1);
        assert_eq!((sections[0].start, sections[0].end), (1, 3));
        assert_eq!(sections[0].direction, RevealDirection::FromEnd);
    }

    #[test]
    fn test_run_before_header_reveals_from_start() {
        let mut lines = context_run(1, 4);
        lines.push(DiffLine::header("@@ -40,3 +40,3 @@"));
        lines.push(DiffLine::added(40, "x"));

        let sections = identify_sections_default(&lines);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].direction, RevealDirection::FromStart);
    }

    #[test]
    fn test_trailing_run_reveals_from_start() {
        let mut lines = vec![DiffLine::added(1, "x")];
        lines.extend(context_run(2, 6));

        let sections = identify_sections_default(&lines);
        assert_eq!(sections.len(), 1);
        assert_eq!((sections[0].start, sections[0].end), (1, 6));
        assert_eq!(sections[0].direction, RevealDirection::FromStart);
    }

    #[test]
    fn test_multiple_sections_are_disjoint() {
        let mut lines = context_run(1, 3);
        lines.push(DiffLine::added(4, "a"));
        lines.extend(context_run(5, 5));
        lines.push(DiffLine::removed(10, "b"));
        lines.extend(context_run(11, 3));

        let sections = identify_sections_default(&lines);
        let bounds: Vec<_> = sections.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(bounds, vec![(0, 2), (4, 8), (10, 12)]);
        assert_eq!(sections[2].direction, RevealDirection::FromStart);
    }

    #[test]
    fn test_custom_threshold() {
        let mut lines = context_run(1, 4);
        lines.push(DiffLine::added(5, "x"));

        assert!(identify_sections(&lines, 5).is_empty());
        assert_eq!(identify_sections(&lines, 4).len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(identify_sections_default(&[]).is_empty());
    }
}
