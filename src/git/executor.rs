//! git command executor
//!
//! Implements [`GitService`] by running git commands and parsing their output.

use std::path::{Component, Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::constants::{self, commands, env, errors, flags, formats, refs, special};
use super::parser::Parser;
use super::{GitError, GitService};
use crate::model::{Branch, Commit, FileInfo, RepositoryStatus};

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Root used for filesystem access
    fn root(&self) -> &Path {
        self.repo_path.as_deref().unwrap_or(Path::new("."))
    }

    /// Run a git command with the given arguments
    ///
    /// Automatically disables color and paging to ensure parseable output.
    /// Stdin is closed and credential prompts are turned off, so a command
    /// that needs input fails instead of blocking the UI.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        self.run_accepting(args, &[0])
    }

    /// Run a git command, treating any of `ok_codes` as success
    ///
    /// `git diff --no-index` exits with 1 when the inputs differ.
    fn run_accepting(&self, args: &[&str], ok_codes: &[i32]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }
        cmd.arg(flags::NO_PAGER).args(flags::NO_COLOR);
        cmd.args(args);
        cmd.env(env::TERMINAL_PROMPT.0, env::TERMINAL_PROMPT.1)
            .stdin(Stdio::null());

        debug!(?args, "running git");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        let exit_code = output.status.code().unwrap_or(-1);
        if ok_codes.contains(&exit_code) {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        warn!(?args, exit_code, stderr = stderr.trim(), "git command failed");

        if stderr.contains(errors::NOT_A_REPO) {
            return Err(GitError::NotARepository);
        }

        Err(GitError::CommandFailed { stderr, exit_code })
    }

    /// Root directory of the working tree containing the executor's path
    pub fn toplevel(&self) -> Result<PathBuf, GitError> {
        let output = self.run(&[commands::REV_PARSE, flags::SHOW_TOPLEVEL])?;
        Ok(PathBuf::from(output.trim_end()))
    }

    /// Check whether HEAD points to a commit (false in a fresh repository)
    fn has_head(&self) -> bool {
        self.run(&[
            commands::REV_PARSE,
            flags::VERIFY,
            flags::QUIET,
            refs::HEAD,
        ])
        .is_ok()
    }

    /// Resolve a repository-relative path, rejecting anything that escapes the root
    fn resolve(&self, path: &str) -> Result<PathBuf, GitError> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if path.is_empty() || escapes {
            return Err(GitError::InvalidPath(path.to_string()));
        }
        Ok(self.root().join(relative))
    }

    /// Check whether a path is untracked
    fn is_untracked(&self, path: &str) -> Result<bool, GitError> {
        let output = self.run(&[
            commands::LS_FILES,
            flags::OTHERS,
            flags::EXCLUDE_STANDARD,
            flags::PATHSPEC,
            path,
        ])?;
        Ok(output.lines().any(|l| l == path))
    }
}

impl GitService for GitExecutor {
    fn file_diff(&self, path: &str) -> Result<String, GitError> {
        if self.is_untracked(path)? {
            return self.run_accepting(
                &[
                    commands::DIFF,
                    flags::NO_INDEX,
                    flags::PATHSPEC,
                    special::NULL_DEVICE,
                    path,
                ],
                &[0, 1],
            );
        }

        if self.has_head() {
            self.run(&[commands::DIFF, refs::HEAD, flags::PATHSPEC, path])
        } else {
            self.run(&[commands::DIFF, flags::CACHED, flags::PATHSPEC, path])
        }
    }

    fn commit_diff(&self, hash: &str) -> Result<String, GitError> {
        self.run(&[commands::SHOW, flags::NO_COMMIT_HEADER, hash])
    }

    fn file_content(&self, path: &str) -> Result<Vec<u8>, GitError> {
        let full = self.resolve(path)?;
        let bytes = std::fs::read(&full)?;
        debug!(path, len = bytes.len(), "read file");
        Ok(bytes)
    }

    fn file_tree(&self) -> Result<Vec<FileInfo>, GitError> {
        let root = self.root();
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| e.file_name() != special::GIT_DIR);

        for entry in walker {
            let entry = entry.map_err(|e| GitError::IoError(e.into()))?;
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let path = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let metadata = entry.metadata().map_err(|e| GitError::IoError(e.into()))?;

            files.push(FileInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
                is_directory: metadata.is_dir(),
                size: metadata.len(),
                modified: metadata.modified().ok(),
                mode: mode_string(&metadata),
            });
        }

        debug!(count = files.len(), "walked working tree");
        Ok(files)
    }

    fn status(&self) -> Result<RepositoryStatus, GitError> {
        let output = self.run(&[
            commands::STATUS,
            flags::PORCELAIN,
            flags::NUL_TERMINATED,
            flags::BRANCH,
            flags::UNTRACKED_ALL,
        ])?;
        Ok(Parser::parse_status(&output))
    }

    fn commits(&self, limit: usize) -> Result<Vec<Commit>, GitError> {
        if !self.has_head() {
            return Ok(Vec::new());
        }
        let limit = limit.to_string();
        let output = self.run(&[
            commands::LOG,
            flags::MAX_COUNT,
            limit.as_str(),
            formats::LOG,
        ])?;
        Ok(Parser::parse_log(&output))
    }

    fn branches(&self) -> Result<Vec<Branch>, GitError> {
        let output = self.run(&[
            commands::FOR_EACH_REF,
            formats::BRANCHES,
            refs::LOCAL,
            refs::REMOTE,
        ])?;
        Ok(Parser::parse_branches(&output))
    }

    fn stage(&self, path: &str) -> Result<(), GitError> {
        self.run(&[commands::ADD, flags::PATHSPEC, path])?;
        Ok(())
    }

    fn unstage(&self, path: &str) -> Result<(), GitError> {
        if self.has_head() {
            self.run(&[commands::RESTORE, flags::STAGED, flags::PATHSPEC, path])?;
        } else {
            self.run(&[commands::RM, flags::CACHED, flags::QUIET, flags::PATHSPEC, path])?;
        }
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run(&[commands::COMMIT, flags::MESSAGE, message])?;
        Ok(())
    }

    fn switch_branch(&self, name: &str) -> Result<(), GitError> {
        self.run(&[commands::SWITCH, name])?;
        Ok(())
    }

    fn push(&self) -> Result<(), GitError> {
        self.run(&[commands::PUSH])?;
        Ok(())
    }

    fn pull(&self) -> Result<(), GitError> {
        self.run(&[commands::PULL, flags::FF_ONLY])?;
        Ok(())
    }
}

/// Render permissions the way `ls -l` does
#[cfg(unix)]
fn mode_string(metadata: &std::fs::Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;

    let mode = metadata.permissions().mode();
    let kind = if metadata.is_dir() { 'd' } else { '-' };
    let bits = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];
    std::iter::once(kind)
        .chain(
            bits.iter()
                .map(|&(bit, c)| if mode & bit != 0 { c } else { '-' }),
        )
        .collect()
}

#[cfg(not(unix))]
fn mode_string(metadata: &std::fs::Metadata) -> String {
    let kind = if metadata.is_dir() { 'd' } else { '-' };
    let write = if metadata.permissions().readonly() { '-' } else { 'w' };
    format!("{kind}r{write}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executor_default() {
        let executor = GitExecutor::default();
        assert!(executor.repo_path.is_none());
        assert_eq!(executor.root(), Path::new("."));
    }

    #[test]
    fn test_executor_with_path() {
        let executor = GitExecutor::with_repo_path(PathBuf::from("/tmp/test"));
        assert_eq!(executor.repo_path, Some(PathBuf::from("/tmp/test")));
        assert_eq!(executor.root(), Path::new("/tmp/test"));
    }

    #[test]
    fn test_resolve_rejects_escaping_paths() {
        let executor = GitExecutor::with_repo_path(PathBuf::from("/tmp/repo"));
        assert_eq!(
            executor.resolve("src/main.rs").unwrap(),
            PathBuf::from("/tmp/repo/src/main.rs")
        );
        for bad in ["", "../secret", "src/../../etc/passwd", "/etc/passwd"] {
            assert!(
                matches!(executor.resolve(bad), Err(GitError::InvalidPath(p)) if p == bad),
                "{bad} should be rejected"
            );
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_mode_string() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("script.sh");
        std::fs::write(&file, "echo hi").unwrap();
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o754)).unwrap();

        let metadata = std::fs::metadata(&file).unwrap();
        assert_eq!(mode_string(&metadata), "-rwxr-xr--");

        let dir_meta = std::fs::metadata(dir.path()).unwrap();
        assert!(mode_string(&dir_meta).starts_with('d'));
    }
}
