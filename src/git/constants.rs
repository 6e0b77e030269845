//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and output formats.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const ADD: &str = "add";
    pub const COMMIT: &str = "commit";
    pub const DIFF: &str = "diff";
    pub const FOR_EACH_REF: &str = "for-each-ref";
    pub const LOG: &str = "log";
    pub const LS_FILES: &str = "ls-files";
    pub const PULL: &str = "pull";
    pub const PUSH: &str = "push";
    pub const RESTORE: &str = "restore";
    pub const REV_PARSE: &str = "rev-parse";
    pub const RM: &str = "rm";
    pub const SHOW: &str = "show";
    pub const STATUS: &str = "status";
    pub const SWITCH: &str = "switch";
}

/// git command flags
pub mod flags {
    /// Run as if started in the given directory (global flag)
    pub const REPO_PATH: &str = "-C";
    /// Never page output (global flag)
    pub const NO_PAGER: &str = "--no-pager";
    /// Disable color for parsing (global config override)
    pub const NO_COLOR: [&str; 2] = ["-c", "color.ui=never"];
    /// Separates revisions from paths
    pub const PATHSPEC: &str = "--";
    pub const CACHED: &str = "--cached";
    pub const STAGED: &str = "--staged";
    pub const NO_INDEX: &str = "--no-index";
    pub const MESSAGE: &str = "-m";
    pub const MAX_COUNT: &str = "-n";
    pub const PORCELAIN: &str = "--porcelain=v1";
    pub const BRANCH: &str = "--branch";
    /// NUL-terminated records with verbatim paths
    pub const NUL_TERMINATED: &str = "-z";
    pub const UNTRACKED_ALL: &str = "--untracked-files=all";
    pub const OTHERS: &str = "--others";
    pub const EXCLUDE_STANDARD: &str = "--exclude-standard";
    pub const VERIFY: &str = "--verify";
    pub const QUIET: &str = "--quiet";
    pub const SHOW_TOPLEVEL: &str = "--show-toplevel";
    pub const NO_COMMIT_HEADER: &str = "--pretty=format:";
    pub const FF_ONLY: &str = "--ff-only";
}

/// Environment overrides applied to every git invocation
pub mod env {
    /// Fail instead of asking for credentials on the terminal the UI owns
    pub const TERMINAL_PROMPT: (&str, &str) = ("GIT_TERMINAL_PROMPT", "0");
}

/// Output formats with unit/record separators for unambiguous parsing
pub mod formats {
    /// Field separator emitted by `%x1f` / `%1f`
    pub const FIELD_SEP: char = '\u{1f}';
    /// Record separator emitted by `%x1e`
    pub const RECORD_SEP: char = '\u{1e}';

    /// `git log` format: hash, author name, author email, date, parents, subject
    pub const LOG: &str = "--format=%H%x1f%an%x1f%ae%x1f%aI%x1f%P%x1f%s%x1e";

    /// `git for-each-ref` format: HEAD marker, refname, short name, upstream,
    /// tip hash, subject, author name, author email, author date
    pub const BRANCHES: &str = "--format=%(HEAD)%1f%(refname)%1f%(refname:short)%1f%(upstream:short)%1f%(objectname)%1f%(subject)%1f%(authorname)%1f%(authoremail)%1f%(authordate:iso-strict)";
}

/// Ref namespaces
pub mod refs {
    pub const HEAD: &str = "HEAD";
    pub const LOCAL: &str = "refs/heads";
    pub const REMOTE: &str = "refs/remotes";
}

/// Special paths
pub mod special {
    /// Old side of an untracked file diff
    pub const NULL_DEVICE: &str = "/dev/null";
    /// Repository metadata directory skipped by the file tree
    pub const GIT_DIR: &str = ".git";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
}
