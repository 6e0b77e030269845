//! Git service layer
//!
//! The client never touches repository internals directly. Every Git operation
//! goes through the [`GitService`] request/response interface; [`GitExecutor`]
//! implements it on top of the `git` command line.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;

pub use executor::GitExecutor;

use std::fmt::Debug;
use std::io;

use thiserror::Error;

use crate::model::{Branch, Commit, FileInfo, RepositoryStatus};

/// Errors that can occur when talking to the Git service
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("Failed to parse git output: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,

    #[error("Path is outside the working tree: {0}")]
    InvalidPath(String),
}

/// Request/response interface to the repository
///
/// Each call is a single synchronous request with no retry. Callers surface
/// failures to the user as-is.
pub trait GitService: Debug {
    /// Unified diff of one working-tree file against `HEAD`
    fn file_diff(&self, path: &str) -> Result<String, GitError>;

    /// Unified diff introduced by a commit
    fn commit_diff(&self, hash: &str) -> Result<String, GitError>;

    /// Raw bytes of a working-tree file
    fn file_content(&self, path: &str) -> Result<Vec<u8>, GitError>;

    /// Every file and directory of the working tree (excluding `.git`)
    fn file_tree(&self) -> Result<Vec<FileInfo>, GitError>;

    /// Staged, modified, untracked and conflicted files
    fn status(&self) -> Result<RepositoryStatus, GitError>;

    /// Most recent commits, newest first
    fn commits(&self, limit: usize) -> Result<Vec<Commit>, GitError>;

    /// Local and remote branches
    fn branches(&self) -> Result<Vec<Branch>, GitError>;

    /// Add a path to the index
    fn stage(&self, path: &str) -> Result<(), GitError>;

    /// Remove a path from the index, keeping the working tree
    fn unstage(&self, path: &str) -> Result<(), GitError>;

    /// Commit the index with a message
    fn commit(&self, message: &str) -> Result<(), GitError>;

    /// Check out a local branch
    fn switch_branch(&self, name: &str) -> Result<(), GitError>;

    /// Push the current branch to its upstream
    fn push(&self) -> Result<(), GitError>;

    /// Fast-forward the current branch from its upstream
    fn pull(&self) -> Result<(), GitError>;
}
