//! Repository data returned by the Git service

use std::time::SystemTime;

/// Working tree status of the repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryStatus {
    /// Current branch name (empty when HEAD is detached)
    pub branch: String,
    /// Nothing staged, modified, untracked or conflicted
    pub is_clean: bool,
    /// Commits ahead of upstream
    pub ahead: usize,
    /// Commits behind upstream
    pub behind: usize,
    /// Changes in the index
    pub staged: Vec<FileChange>,
    /// Changes in the working tree not yet staged
    pub modified: Vec<FileChange>,
    /// Untracked paths
    pub untracked: Vec<String>,
    /// Paths with unresolved conflicts
    pub conflicts: Vec<String>,
}

impl RepositoryStatus {
    /// Total number of entries shown in the change list
    pub fn total_changes(&self) -> usize {
        self.staged.len() + self.modified.len() + self.untracked.len() + self.conflicts.len()
    }

    /// One-line summary: `"2 staged, 1 modified, 1 conflict"`, or `"No changes"`
    pub fn summary(&self) -> String {
        let parts: Vec<String> = [
            (self.staged.len(), "staged"),
            (self.modified.len(), "modified"),
            (self.untracked.len(), "untracked"),
        ]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, label)| format!("{} {}", count, label))
        .chain(match self.conflicts.len() {
            0 => None,
            1 => Some("1 conflict".to_string()),
            n => Some(format!("{} conflicts", n)),
        })
        .collect();

        if parts.is_empty() {
            "No changes".to_string()
        } else {
            parts.join(", ")
        }
    }

    /// Upstream divergence: `"↑2 ↓1"`, empty when in sync
    pub fn sync_summary(&self) -> String {
        let mut parts = Vec::new();
        if self.ahead > 0 {
            parts.push(format!("↑{}", self.ahead));
        }
        if self.behind > 0 {
            parts.push(format!("↓{}", self.behind));
        }
        parts.join(" ")
    }
}

/// A changed file (staged or modified)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// File path relative to the repository root
    pub path: String,
    /// Porcelain status letter (`M`, `A`, `D`, `R`, ...)
    pub status: char,
}

impl FileChange {
    pub fn new(path: impl Into<String>, status: char) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// Commit author
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// A commit in the history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commit {
    /// Full hash
    pub hash: String,
    /// Subject line
    pub message: String,
    /// Author
    pub author: Author,
    /// Author date (ISO 8601)
    pub date: String,
    /// First parent hash (None for root commits)
    pub parent_hash: Option<String>,
}

impl Commit {
    /// Abbreviated hash for display
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }
}

/// A local or remote branch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub is_current: bool,
    pub is_remote: bool,
    /// Upstream tracking ref
    pub upstream: Option<String>,
    /// Tip commit
    pub last_commit: Option<Commit>,
}

/// An entry of the working tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Path relative to the repository root, `/`-separated
    pub path: String,
    /// Last path component
    pub name: String,
    pub is_directory: bool,
    /// Size in bytes
    pub size: u64,
    /// Last modification time
    pub modified: Option<SystemTime>,
    /// Unix permission string (e.g. `-rw-r--r--`)
    pub mode: String,
}

impl FileInfo {
    /// Create an entry with no metadata (synthesized directories, tests)
    pub fn new(path: impl Into<String>, is_directory: bool) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or(&path).to_string();
        Self {
            path,
            name,
            is_directory,
            size: 0,
            modified: None,
            mode: String::new(),
        }
    }
}
