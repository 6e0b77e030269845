//! In-memory Git service for application tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gitty::git::{GitError, GitService};
use gitty::model::{Author, Branch, Commit, FileChange, FileInfo, RepositoryStatus};

/// Shared record of the mutating calls made by the app
pub type CallLog = Rc<RefCell<Vec<String>>>;

/// Git service backed by fixed data
///
/// Staging moves paths between the status groups so refreshes show the
/// result. Every mutating call is appended to [`FakeGit::calls`].
#[derive(Debug, Default)]
pub struct FakeGit {
    pub files: Vec<FileInfo>,
    pub status: RefCell<RepositoryStatus>,
    pub commits: RefCell<Vec<Commit>>,
    pub branches: Vec<Branch>,
    /// Diff text per file path or commit hash
    pub diffs: RefCell<HashMap<String, String>>,
    /// File bytes per path
    pub contents: HashMap<String, Vec<u8>>,
    /// Push and pull fail as if the remote were unreachable
    pub offline: bool,
    pub calls: CallLog,
}

impl FakeGit {
    /// A small repository: a few files, 3 commits, 2 branches, no changes
    pub fn sample() -> Self {
        let files = ["README.md", "src", "src/lib.rs", "src/main.rs"]
            .iter()
            .map(|p| FileInfo::new(*p, *p == "src"))
            .collect();
        let commits = ["Third", "Second", "First"]
            .iter()
            .enumerate()
            .map(|(i, message)| Commit {
                hash: format!("{:040}", i + 1),
                message: message.to_string(),
                author: Author {
                    name: "Test User".to_string(),
                    email: "test@example.com".to_string(),
                },
                date: "2024-05-01T10:00:00+00:00".to_string(),
                parent_hash: None,
            })
            .collect();
        let branches = vec![
            Branch {
                name: "main".to_string(),
                is_current: true,
                ..Branch::default()
            },
            Branch {
                name: "feature".to_string(),
                ..Branch::default()
            },
        ];

        Self {
            files,
            status: RefCell::new(RepositoryStatus {
                branch: "main".to_string(),
                is_clean: true,
                ..RepositoryStatus::default()
            }),
            commits: RefCell::new(commits),
            branches,
            ..Self::default()
        }
    }

    pub fn with_status(self, status: RepositoryStatus) -> Self {
        *self.status.borrow_mut() = status;
        self
    }

    pub fn with_diff(self, key: &str, text: &str) -> Self {
        self.diffs
            .borrow_mut()
            .insert(key.to_string(), text.to_string());
        self
    }

    pub fn with_content(mut self, path: &str, bytes: &[u8]) -> Self {
        self.contents.insert(path.to_string(), bytes.to_vec());
        self
    }

    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn remote(&self) -> Result<(), GitError> {
        if self.offline {
            return Err(GitError::CommandFailed {
                stderr: "fatal: could not read from remote repository".to_string(),
                exit_code: 128,
            });
        }
        Ok(())
    }

    fn diff(&self, key: &str) -> Result<String, GitError> {
        self.diffs
            .borrow()
            .get(key)
            .cloned()
            .ok_or_else(|| GitError::CommandFailed {
                stderr: format!("unknown path {}", key),
                exit_code: 128,
            })
    }
}

impl GitService for FakeGit {
    fn file_diff(&self, path: &str) -> Result<String, GitError> {
        self.diff(path)
    }

    fn commit_diff(&self, hash: &str) -> Result<String, GitError> {
        self.diff(hash)
    }

    fn file_content(&self, path: &str) -> Result<Vec<u8>, GitError> {
        self.contents.get(path).cloned().ok_or_else(|| {
            GitError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path),
            ))
        })
    }

    fn file_tree(&self) -> Result<Vec<FileInfo>, GitError> {
        Ok(self.files.clone())
    }

    fn status(&self) -> Result<RepositoryStatus, GitError> {
        Ok(self.status.borrow().clone())
    }

    fn commits(&self, limit: usize) -> Result<Vec<Commit>, GitError> {
        Ok(self.commits.borrow().iter().take(limit).cloned().collect())
    }

    fn branches(&self) -> Result<Vec<Branch>, GitError> {
        Ok(self.branches.clone())
    }

    fn stage(&self, path: &str) -> Result<(), GitError> {
        self.record(format!("stage {}", path));
        let mut status = self.status.borrow_mut();
        if let Some(pos) = status.modified.iter().position(|c| c.path == path) {
            let change = status.modified.remove(pos);
            status.staged.push(change);
        } else if let Some(pos) = status.untracked.iter().position(|p| p == path) {
            status.untracked.remove(pos);
            status.staged.push(FileChange::new(path, 'A'));
        } else if let Some(pos) = status.conflicts.iter().position(|p| p == path) {
            status.conflicts.remove(pos);
            status.staged.push(FileChange::new(path, 'M'));
        }
        Ok(())
    }

    fn unstage(&self, path: &str) -> Result<(), GitError> {
        self.record(format!("unstage {}", path));
        let mut status = self.status.borrow_mut();
        if let Some(pos) = status.staged.iter().position(|c| c.path == path) {
            let change = status.staged.remove(pos);
            if change.status == 'A' {
                status.untracked.push(change.path);
            } else {
                status.modified.push(change);
            }
        }
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        self.record(format!("commit {}", message));
        self.status.borrow_mut().staged.clear();
        self.commits.borrow_mut().insert(
            0,
            Commit {
                hash: "f".repeat(40),
                message: message.to_string(),
                ..Commit::default()
            },
        );
        Ok(())
    }

    fn switch_branch(&self, name: &str) -> Result<(), GitError> {
        self.record(format!("switch {}", name));
        if name == "missing" {
            return Err(GitError::CommandFailed {
                stderr: "invalid reference: missing".to_string(),
                exit_code: 128,
            });
        }
        self.status.borrow_mut().branch = name.to_string();
        Ok(())
    }

    fn push(&self) -> Result<(), GitError> {
        self.record("push".to_string());
        self.remote()?;
        self.status.borrow_mut().ahead = 0;
        Ok(())
    }

    fn pull(&self) -> Result<(), GitError> {
        self.record("pull".to_string());
        self.remote()?;
        self.status.borrow_mut().behind = 0;
        Ok(())
    }
}
