//! Changes panel
//!
//! Lists staged, modified, untracked and conflicted files as one navigable
//! list. Files can be staged, unstaged, diffed and committed from here.
//! Staging a conflicted file marks it resolved.

mod input;
mod render;

use ratatui::text::Line;
use tui_textarea::TextArea;

use super::ViewAction;
use crate::model::RepositoryStatus;
use crate::ui::components::{self, ListCursor};
use crate::vim::NavigableList;

/// Group a change list entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeGroup {
    Staged,
    Modified,
    Untracked,
    Conflicts,
}

impl ChangeGroup {
    pub fn label(self) -> &'static str {
        match self {
            Self::Staged => "Staged",
            Self::Modified => "Modified",
            Self::Untracked => "Untracked",
            Self::Conflicts => "Conflicts",
        }
    }
}

/// One entry of the flattened change list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEntry<'a> {
    pub group: ChangeGroup,
    pub path: &'a str,
    /// Porcelain status letter (None for untracked and conflicted files)
    pub status: Option<char>,
}

/// Changes panel state
#[derive(Debug, Default)]
pub struct FileChangesView {
    status: Option<RepositoryStatus>,
    pub(super) cursor: ListCursor,
    /// Commit message editor (Some while open)
    pub(crate) editor: Option<TextArea<'static>>,
}

impl FileChangesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: RepositoryStatus) {
        self.status = Some(status);
        self.cursor.clamp(self.len());
    }

    pub fn status(&self) -> Option<&RepositoryStatus> {
        self.status.as_ref()
    }

    /// Total entries: staged + modified + untracked + conflicts
    pub fn len(&self) -> usize {
        self.status.as_ref().map_or(0, RepositoryStatus::total_changes)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Map a global index onto its group entry
    ///
    /// Indices run through staged, then modified, then untracked, then
    /// conflicted files.
    pub fn entry(&self, index: usize) -> Option<ChangeEntry<'_>> {
        let status = self.status.as_ref()?;
        let staged = status.staged.len();
        let modified = status.modified.len();
        let untracked = status.untracked.len();

        if index < staged {
            let change = &status.staged[index];
            Some(ChangeEntry {
                group: ChangeGroup::Staged,
                path: &change.path,
                status: Some(change.status),
            })
        } else if index < staged + modified {
            let change = &status.modified[index - staged];
            Some(ChangeEntry {
                group: ChangeGroup::Modified,
                path: &change.path,
                status: Some(change.status),
            })
        } else if index < staged + modified + untracked {
            Some(ChangeEntry {
                group: ChangeGroup::Untracked,
                path: &status.untracked[index - staged - modified],
                status: None,
            })
        } else {
            status
                .conflicts
                .get(index - staged - modified - untracked)
                .map(|path| ChangeEntry {
                    group: ChangeGroup::Conflicts,
                    path,
                    status: None,
                })
        }
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.selected()
    }

    pub fn selected_entry(&self) -> Option<ChangeEntry<'_>> {
        self.entry(self.cursor.selected())
    }

    pub fn select(&mut self, index: usize) {
        self.cursor.select(index, self.len());
    }

    /// Check if the commit message editor is open
    pub fn is_editing_commit(&self) -> bool {
        self.editor.is_some()
    }

    /// Open the commit message editor
    ///
    /// Returns false when nothing is staged.
    pub fn start_commit(&mut self) -> bool {
        if self.status.as_ref().is_none_or(|s| s.staged.is_empty()) {
            return false;
        }
        let mut textarea = TextArea::default();
        textarea.set_block(components::bordered_block(Line::from(
            " Commit message (Ctrl+S: commit, Esc: cancel) ",
        )));
        self.editor = Some(textarea);
        true
    }

    pub fn cancel_commit(&mut self) {
        self.editor = None;
    }

    /// Stage action for the selected file (anything not already staged)
    fn stage_selected(&self) -> Option<ViewAction> {
        let entry = self.selected_entry()?;
        (entry.group != ChangeGroup::Staged).then(|| ViewAction::Stage(entry.path.to_string()))
    }

    /// Unstage action for the selected file (staged only)
    fn unstage_selected(&self) -> Option<ViewAction> {
        let entry = self.selected_entry()?;
        (entry.group == ChangeGroup::Staged).then(|| ViewAction::Unstage(entry.path.to_string()))
    }
}

impl NavigableList for FileChangesView {
    type Action = ViewAction;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn on_activate(&mut self, index: usize) -> Option<ViewAction> {
        self.entry(index)
            .map(|entry| ViewAction::OpenFileDiff(entry.path.to_string()))
    }
}
