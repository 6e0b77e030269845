//! Panel requests that call into the Git service

use tracing::{info, warn};

use super::state::App;
use crate::git::GitError;
use crate::model::Notification;
use crate::ui::views::ViewAction;

impl App {
    /// Carry out a request from a panel or the header
    pub fn apply_action(&mut self, action: ViewAction) {
        match action {
            ViewAction::SwitchPanel(panel) => self.switch_panel(panel),
            ViewAction::Select(index) => self.select_in_panel(index),
            ViewAction::OpenFileContent(path) => self.open_file_content(&path),
            ViewAction::OpenFileDiff(path) => self.open_file_diff(&path),
            ViewAction::OpenCommitDiff(hash) => self.open_commit_diff(&hash),
            ViewAction::SwitchBranch(name) => self.execute_switch_branch(&name),
            ViewAction::Stage(path) => self.execute_stage(&path),
            ViewAction::Unstage(path) => self.execute_unstage(&path),
            ViewAction::Commit(message) => self.execute_commit(&message),
            ViewAction::Warn(message) => {
                self.notification = Some(Notification::warning(message));
            }
        }
    }

    fn execute_stage(&mut self, path: &str) {
        let result = self.git.stage(path);
        if self.report("git add", result) {
            self.notification = Some(Notification::success(format!("Staged {}", path)));
            self.refresh_status();
        }
    }

    fn execute_unstage(&mut self, path: &str) {
        let result = self.git.unstage(path);
        if self.report("git restore --staged", result) {
            self.notification = Some(Notification::success(format!("Unstaged {}", path)));
            self.refresh_status();
        }
    }

    fn execute_commit(&mut self, message: &str) {
        let result = self.git.commit(message);
        if self.report("git commit", result) {
            let subject = message.lines().next().unwrap_or_default();
            self.notification = Some(Notification::success(format!("Committed: {}", subject)));
            self.refresh_status();
            self.refresh_commits();
        }
    }

    fn execute_switch_branch(&mut self, name: &str) {
        let result = self.git.switch_branch(name);
        if self.report("git switch", result) {
            self.notification = Some(Notification::success(format!("Switched to {}", name)));
            self.refresh_all();
        }
    }

    pub(crate) fn execute_push(&mut self) {
        let result = self.git.push();
        if self.report("git push", result) {
            self.notification = Some(Notification::success("Pushed"));
            self.refresh_status();
            self.refresh_branches();
        }
    }

    pub(crate) fn execute_pull(&mut self) {
        let result = self.git.pull();
        if self.report("git pull", result) {
            self.notification = Some(Notification::success("Pulled"));
            self.refresh_all();
        }
    }

    /// Log the outcome and surface failures; returns true on success
    fn report(&mut self, operation: &str, result: Result<(), GitError>) -> bool {
        match result {
            Ok(()) => {
                info!(operation, "git operation succeeded");
                true
            }
            Err(e) => {
                warn!(operation, error = %e, "git operation failed");
                self.error_message = Some(format!("{} failed: {}", operation, e));
                false
            }
        }
    }
}
