//! Data refresh operations (reload from git)

use tracing::debug;

use super::state::App;

impl App {
    /// Reload every panel
    pub fn refresh_all(&mut self) {
        self.refresh_files();
        self.refresh_commits();
        self.refresh_branches();
        self.refresh_status();
    }

    /// Refresh the Files panel
    pub fn refresh_files(&mut self) {
        match self.git.file_tree() {
            Ok(files) => {
                debug!(count = files.len(), "file tree loaded");
                self.file_tree.set_files(&files);
            }
            Err(e) => {
                self.error_message = Some(format!("file tree error: {}", e));
            }
        }
    }

    /// Refresh the History panel
    pub fn refresh_commits(&mut self) {
        match self.git.commits(self.config.history.commit_limit) {
            Ok(commits) => self.commits.set_commits(commits),
            Err(e) => {
                self.error_message = Some(format!("git log error: {}", e));
            }
        }
    }

    /// Refresh the Branches panel
    pub fn refresh_branches(&mut self) {
        match self.git.branches() {
            Ok(branches) => self.branches.set_branches(branches),
            Err(e) => {
                self.error_message = Some(format!("git branch error: {}", e));
            }
        }
    }

    /// Refresh the Changes panel and the header branch
    pub fn refresh_status(&mut self) {
        match self.git.status() {
            Ok(status) => {
                self.header.branch = status.branch.clone();
                self.changes.set_status(status);
            }
            Err(e) => {
                self.error_message = Some(format!("git status error: {}", e));
            }
        }
    }
}
