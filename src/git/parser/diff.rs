//! Unified diff parser (git diff / git show)

use tracing::debug;

use super::{HUNK_HEADER_REGEX, Parser};
use crate::model::DiffLine;

/// Metadata prefixes that render as header rows
///
/// `---` and `+++` must be matched before the generic `-`/`+` rules.
const METADATA_PREFIXES: [&str; 6] = [
    "diff ",
    "index ",
    "---",
    "+++",
    "new file",
    "deleted file",
];

impl Parser {
    /// Parse unified diff text into typed lines
    ///
    /// Detection order:
    /// 1. `@@` → Header (resets both counters when well-formed)
    /// 2. metadata (`diff `, `index `, `---`, `+++`, `new file`, `deleted file`) → Header
    /// 3. `+` → Added
    /// 4. `-` → Removed
    /// 5. ` ` → Context
    /// 6. anything else is dropped
    ///
    /// Both counters start at 1 and stop at `usize::MAX`. A malformed hunk
    /// header keeps the previous counters. This never fails.
    pub fn parse_diff(text: &str) -> Vec<DiffLine> {
        let mut lines = Vec::new();
        let mut old_line = 1;
        let mut new_line = 1;

        for line in text.lines() {
            if line.starts_with("@@") {
                match Self::parse_hunk_header(line) {
                    Some((old_start, new_start)) => {
                        old_line = old_start;
                        new_line = new_start;
                    }
                    None => debug!(header = line, "malformed hunk header, keeping counters"),
                }
                lines.push(DiffLine::header(line));
            } else if METADATA_PREFIXES.iter().any(|p| line.starts_with(p)) {
                lines.push(DiffLine::header(line));
            } else if let Some(rest) = line.strip_prefix('+') {
                lines.push(DiffLine::added(new_line, rest));
                new_line = new_line.saturating_add(1);
            } else if let Some(rest) = line.strip_prefix('-') {
                lines.push(DiffLine::removed(old_line, rest));
                old_line = old_line.saturating_add(1);
            } else if let Some(rest) = line.strip_prefix(' ') {
                lines.push(DiffLine::context(old_line, new_line, rest));
                old_line = old_line.saturating_add(1);
                new_line = new_line.saturating_add(1);
            }
        }

        lines
    }

    /// Extract the starting line numbers `(old, new)` from a hunk header
    ///
    /// The range counts are optional (`@@ -3 +3 @@` is valid for single-line hunks).
    pub(super) fn parse_hunk_header(line: &str) -> Option<(usize, usize)> {
        let caps = HUNK_HEADER_REGEX.captures(line)?;
        let old_start = caps.get(1)?.as_str().parse().ok()?;
        let new_start = caps.get(2)?.as_str().parse().ok()?;
        Some((old_start, new_start))
    }
}
