//! View components
//!
//! The header bar, the four main panels and the modal diff and file views.

mod branches;
mod changes;
mod commits;
mod content;
mod diff;
mod file_tree;
mod header;

pub use branches::BranchListView;
pub use changes::{ChangeEntry, ChangeGroup, FileChangesView};
pub use commits::CommitListView;
pub use content::{ContentAction, FileContentView};
pub use diff::{DiffAction, DiffView};
pub use file_tree::{FileTreeView, TreeRow};
pub use header::HeaderBar;

use crate::app::Panel;

/// Request from a panel to the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Make another main panel current
    SwitchPanel(Panel),
    /// Move the panel selection (and vim focus) to an index
    Select(usize),
    /// Show the contents of a working-tree file
    OpenFileContent(String),
    /// Show the working-tree diff of a file
    OpenFileDiff(String),
    /// Show the diff of a commit
    OpenCommitDiff(String),
    /// Check out a branch
    SwitchBranch(String),
    /// Stage a path
    Stage(String),
    /// Unstage a path
    Unstage(String),
    /// Commit the index with a message
    Commit(String),
    /// Show a warning notification
    Warn(String),
}
