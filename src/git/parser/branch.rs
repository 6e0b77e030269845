//! Branch list parser (git for-each-ref)

use super::Parser;
use crate::git::constants::formats::FIELD_SEP;
use crate::git::constants::refs;
use crate::model::{Author, Branch, Commit};

impl Parser {
    /// Parse `git for-each-ref` output produced with
    /// [`formats::BRANCHES`](crate::git::constants::formats::BRANCHES)
    ///
    /// Symbolic remote heads (`origin/HEAD`) are skipped.
    pub fn parse_branches(output: &str) -> Vec<Branch> {
        output
            .lines()
            .filter_map(Self::parse_branch_line)
            .collect()
    }

    fn parse_branch_line(line: &str) -> Option<Branch> {
        let fields: Vec<&str> = line.split(FIELD_SEP).collect();
        let [head, refname, short, upstream, hash, subject, name, email, date] =
            fields.as_slice()
        else {
            return None;
        };
        if short.is_empty() || refname.ends_with("/HEAD") {
            return None;
        }

        let last_commit = (!hash.is_empty()).then(|| Commit {
            hash: hash.to_string(),
            message: subject.to_string(),
            author: Author {
                name: name.to_string(),
                email: email
                    .trim_start_matches('<')
                    .trim_end_matches('>')
                    .to_string(),
            },
            date: date.to_string(),
            parent_hash: None,
        });

        Some(Branch {
            name: short.to_string(),
            is_current: *head == "*",
            is_remote: refname.starts_with(refs::REMOTE),
            upstream: (!upstream.is_empty()).then(|| upstream.to_string()),
            last_commit,
        })
    }
}
