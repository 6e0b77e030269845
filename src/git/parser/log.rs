//! Commit history parser (git log)

use super::Parser;
use crate::git::constants::formats::{FIELD_SEP, RECORD_SEP};
use crate::model::{Author, Commit};

impl Parser {
    /// Parse `git log` output produced with [`formats::LOG`](crate::git::constants::formats::LOG)
    ///
    /// Each record: `hash␟name␟email␟date␟parents␟subject␞`.
    /// Records with missing fields are skipped.
    pub fn parse_log(output: &str) -> Vec<Commit> {
        output
            .split(RECORD_SEP)
            .filter_map(|record| Self::parse_log_record(record.trim_start_matches('\n')))
            .collect()
    }

    fn parse_log_record(record: &str) -> Option<Commit> {
        let fields: Vec<&str> = record.split(FIELD_SEP).collect();
        let [hash, name, email, date, parents, subject] = fields.as_slice() else {
            return None;
        };
        if hash.is_empty() {
            return None;
        }

        Some(Commit {
            hash: hash.to_string(),
            message: subject.to_string(),
            author: Author {
                name: name.to_string(),
                email: email.to_string(),
            },
            date: date.to_string(),
            parent_hash: parents.split_whitespace().next().map(str::to_string),
        })
    }
}
