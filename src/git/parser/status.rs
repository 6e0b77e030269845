//! Status output parser (git status --porcelain=v1 --branch)

use super::Parser;
use crate::model::{FileChange, RepositoryStatus};

/// Index/worktree code pairs that mark an unmerged path
const CONFLICT_CODES: [&str; 7] = ["DD", "AU", "UD", "UA", "DU", "AA", "UU"];

impl Parser {
    /// Parse `git status --porcelain=v1 -z --branch` output
    ///
    /// Records are NUL-terminated and paths are verbatim (no quoting or
    /// escapes). A rename or copy is followed by an extra record holding the
    /// original path:
    /// ```text
    /// ## main...origin/main [ahead 1, behind 2]\0
    /// M  staged.rs\0
    ///  M modified.rs\0
    /// R  new.rs\0old.rs\0
    /// UU conflicted.rs\0
    /// ?? untracked.rs\0
    /// ```
    ///
    /// Malformed entries are skipped.
    pub fn parse_status(output: &str) -> RepositoryStatus {
        let mut status = RepositoryStatus::default();
        let mut records = output.split('\0');

        while let Some(record) = records.next() {
            if let Some(header) = record.strip_prefix("## ") {
                Self::parse_branch_header(header, &mut status);
                continue;
            }

            let Some((code, path)) = Self::split_status_record(record) else {
                continue;
            };
            if code.contains(['R', 'C']) {
                // Original path of the rename/copy
                records.next();
            }

            if code == "??" {
                status.untracked.push(path.to_string());
                continue;
            }
            if CONFLICT_CODES.contains(&code) {
                status.conflicts.push(path.to_string());
                continue;
            }

            let mut codes = code.chars();
            let (Some(index), Some(worktree)) = (codes.next(), codes.next()) else {
                continue;
            };
            if index != ' ' {
                status.staged.push(FileChange::new(path, index));
            }
            if worktree != ' ' {
                status.modified.push(FileChange::new(path, worktree));
            }
        }

        status.is_clean = status.total_changes() == 0;
        status
    }

    /// Split `XY path` into its two-letter code and path
    fn split_status_record(record: &str) -> Option<(&str, &str)> {
        let code = record.get(..2)?;
        let path = record.get(3..)?;
        if record.as_bytes().get(2) != Some(&b' ') || path.is_empty() {
            return None;
        }
        Some((code, path))
    }

    /// Parse the `## ` branch header
    ///
    /// Examples:
    /// - `main...origin/main [ahead 1, behind 2]`
    /// - `main`
    /// - `No commits yet on main`
    /// - `HEAD (no branch)`
    fn parse_branch_header(header: &str, status: &mut RepositoryStatus) {
        if let Some(branch) = header.strip_prefix("No commits yet on ") {
            status.branch = branch.trim().to_string();
            return;
        }
        if header.starts_with("HEAD (no branch)") {
            status.branch.clear();
            return;
        }

        let (refs, tracking) = match header.find(" [") {
            Some(pos) => (&header[..pos], Some(&header[pos + 2..])),
            None => (header, None),
        };
        let branch = refs.split("...").next().unwrap_or(refs);
        status.branch = branch.trim().to_string();

        if let Some(tracking) = tracking {
            let tracking = tracking.trim_end_matches(']');
            for part in tracking.split(", ") {
                if let Some(n) = part.strip_prefix("ahead ") {
                    status.ahead = n.trim().parse().unwrap_or(0);
                } else if let Some(n) = part.strip_prefix("behind ") {
                    status.behind = n.trim().parse().unwrap_or(0);
                }
            }
        }
    }
}
