//! Common test utilities for integration and scenario tests.
//!
//! This module provides a temporary git repository for executor tests and an
//! in-memory [`FakeGit`] for driving the whole application.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fake_git;
pub mod test_repo;

pub use fake_git::FakeGit;
pub use test_repo::TestRepo;

/// Skip the current test when `git` is not installed
#[macro_export]
macro_rules! skip_if_no_git {
    () => {
        if !$crate::common::test_repo::git_available() {
            eprintln!("git not found, skipping test");
            return;
        }
    };
}
