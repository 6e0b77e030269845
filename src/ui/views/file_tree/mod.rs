//! File tree panel
//!
//! Browses the working tree. Directories expand and collapse in place. `Enter`
//! on a file shows its contents, `d` its diff against `HEAD`.

mod input;
mod render;
mod tree;

use std::collections::HashSet;

pub use tree::{TreeNode, TreeRow, build_tree, flatten};

use super::ViewAction;
use crate::model::FileInfo;
use crate::ui::components::ListCursor;
use crate::vim::NavigableList;

/// File tree panel state
#[derive(Debug, Default)]
pub struct FileTreeView {
    nodes: Vec<TreeNode>,
    expanded: HashSet<String>,
    rows: Vec<TreeRow>,
    pub(super) cursor: ListCursor,
    loaded: bool,
}

impl FileTreeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the file list, keeping expanded directories that still exist
    pub fn set_files(&mut self, files: &[FileInfo]) {
        self.nodes = build_tree(files);
        self.expanded
            .retain(|path| files.iter().any(|f| f.is_directory && &f.path == path));
        self.loaded = true;
        self.rebuild_rows();
    }

    /// Visible rows
    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.selected()
    }

    pub fn selected_row(&self) -> Option<&TreeRow> {
        self.rows.get(self.cursor.selected())
    }

    /// Move the selection (used to follow the vim focus index)
    pub fn select(&mut self, index: usize) {
        self.cursor.select(index, self.rows.len());
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    fn rebuild_rows(&mut self) {
        self.rows = flatten(&self.nodes, &self.expanded);
        self.cursor.clamp(self.rows.len());
    }

    /// Expand the directory at `index`
    ///
    /// Returns true if the tree changed.
    pub fn expand(&mut self, index: usize) -> bool {
        let Some(row) = self.rows.get(index) else {
            return false;
        };
        if !row.is_directory || row.expanded {
            return false;
        }
        self.expanded.insert(row.path.clone());
        self.rebuild_rows();
        true
    }

    /// Collapse the directory at `index`, or the parent of a file / collapsed
    /// directory
    ///
    /// Returns the row index that should hold the selection afterwards.
    pub fn collapse(&mut self, index: usize) -> Option<usize> {
        let row = self.rows.get(index)?;
        if row.is_directory && row.expanded {
            self.expanded.remove(&row.path);
            self.rebuild_rows();
            return Some(index);
        }

        let (parent, _) = row.path.rsplit_once('/')?;
        let parent = parent.to_string();
        self.expanded.remove(&parent);
        self.rebuild_rows();
        self.rows.iter().position(|r| r.path == parent)
    }

    /// Enter on a row: toggle a directory, show a file's contents
    fn activate(&mut self, index: usize) -> Option<ViewAction> {
        let row = self.rows.get(index)?;
        if row.is_directory {
            if row.expanded {
                self.collapse(index);
            } else {
                self.expand(index);
            }
            None
        } else {
            Some(ViewAction::OpenFileContent(row.path.clone()))
        }
    }

    /// Diff of the selected file (directories have none)
    fn diff_selected(&self) -> Option<ViewAction> {
        self.selected_row()
            .filter(|row| !row.is_directory)
            .map(|row| ViewAction::OpenFileDiff(row.path.clone()))
    }
}

impl NavigableList for FileTreeView {
    type Action = ViewAction;

    fn item_count(&self) -> usize {
        self.rows.len()
    }

    fn on_activate(&mut self, index: usize) -> Option<ViewAction> {
        self.activate(index)
    }

    fn on_expand(&mut self, index: usize) -> Option<ViewAction> {
        self.expand(index);
        None
    }

    fn on_collapse(&mut self, index: usize) -> Option<ViewAction> {
        self.collapse(index)
            .filter(|&target| target != index)
            .map(ViewAction::Select)
    }
}
