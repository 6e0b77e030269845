//! git output parser
//!
//! Parses the output from git commands into structured data.

mod branch;
mod diff;
mod log;
mod status;


use regex::Regex;
use std::sync::LazyLock;

/// Regex for unified-diff hunk headers
///
/// Format: `@@ -<old_start>[,<old_count>] +<new_start>[,<new_count>] @@[ <section>]`
/// Example: `@@ -10,7 +10,8 @@ fn main() {`
///
/// Groups:
/// 1. old side starting line
/// 2. new side starting line
static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,\d+)? \+(\d+)(?:,\d+)? @@").expect("Invalid hunk header regex")
});

/// Parser for git command output
pub struct Parser;
