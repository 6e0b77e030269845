//! Focus contexts

use std::fmt;

/// Region of the UI that can hold vim navigation focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FocusContext {
    /// Top navigation bar
    Header,
    /// Commit history list
    CommitList,
    /// Branch list
    BranchList,
    /// Staged / modified / untracked file list
    FileChanges,
    /// Working tree browser
    FileTree,
    /// Nothing focused
    #[default]
    None,
}

impl FocusContext {
    /// Label shown in the status line
    pub fn label(self) -> &'static str {
        match self {
            Self::Header => "Header",
            Self::CommitList => "Commits",
            Self::BranchList => "Branches",
            Self::FileChanges => "Changes",
            Self::FileTree => "Files",
            Self::None => "None",
        }
    }

    /// Content contexts are everything except `Header` and `None`
    pub fn is_content(self) -> bool {
        !matches!(self, Self::Header | Self::None)
    }
}

impl fmt::Display for FocusContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(FocusContext::Header.label(), "Header");
        assert_eq!(FocusContext::CommitList.label(), "Commits");
        assert_eq!(FocusContext::BranchList.label(), "Branches");
        assert_eq!(FocusContext::FileChanges.label(), "Changes");
        assert_eq!(FocusContext::FileTree.to_string(), "Files");
        assert_eq!(FocusContext::None.to_string(), "None");
    }

    #[test]
    fn test_is_content() {
        assert!(!FocusContext::Header.is_content());
        assert!(!FocusContext::None.is_content());
        assert!(FocusContext::FileTree.is_content());
        assert!(FocusContext::CommitList.is_content());
    }
}
