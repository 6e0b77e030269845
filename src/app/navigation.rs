//! Modal view navigation (opening, closing and reloading with data loading)

use tracing::{debug, warn};

use super::state::{App, DiffSource};
use crate::git::GitError;
use crate::ui::views::{DiffView, FileContentView};

impl App {
    /// Open the diff view for a working-tree file
    pub(crate) fn open_file_diff(&mut self, path: &str) {
        self.open_diff(DiffSource::File(path.to_string()));
    }

    /// Open the diff view for a commit
    pub(crate) fn open_commit_diff(&mut self, hash: &str) {
        self.open_diff(DiffSource::Commit(hash.to_string()));
    }

    fn open_diff(&mut self, source: DiffSource) {
        let title = diff_title(&source);
        let view = match self.load_diff(&source) {
            Ok(text) => {
                debug!(%title, bytes = text.len(), "diff loaded");
                DiffView::new(title, text, &self.config.diff)
            }
            Err(e) => {
                warn!(%title, error = %e, "failed to load diff");
                DiffView::failed(title, e.to_string(), &self.config.diff)
            }
        };
        self.diff_view = Some(view);
        self.diff_source = Some(source);
    }

    /// Reload the open diff; reveal progress survives when the text is unchanged
    pub(crate) fn reload_diff(&mut self) {
        let Some(source) = self.diff_source.clone() else {
            return;
        };
        let result = self.load_diff(&source);
        let Some(ref mut view) = self.diff_view else {
            return;
        };
        match result {
            Ok(text) => view.set_text(&text),
            Err(e) => view.set_error(e.to_string()),
        }
    }

    pub(crate) fn close_diff(&mut self) {
        self.diff_view = None;
        self.diff_source = None;
    }

    /// Open the content view for a working-tree file
    pub(crate) fn open_file_content(&mut self, path: &str) {
        let view = match self.git.file_content(path) {
            Ok(bytes) => {
                debug!(path, bytes = bytes.len(), "file loaded");
                FileContentView::new(path, &bytes)
            }
            Err(e) => {
                warn!(path, error = %e, "failed to load file");
                FileContentView::failed(path, e.to_string())
            }
        };
        self.file_view = Some(view);
    }

    pub(crate) fn reload_file_content(&mut self) {
        let Some(ref mut view) = self.file_view else {
            return;
        };
        match self.git.file_content(&view.path) {
            Ok(bytes) => view.set_content(&bytes),
            Err(e) => view.set_error(e.to_string()),
        }
    }

    pub(crate) fn close_file_content(&mut self) {
        self.file_view = None;
    }

    fn load_diff(&self, source: &DiffSource) -> Result<String, GitError> {
        match source {
            DiffSource::File(path) => self.git.file_diff(path),
            DiffSource::Commit(hash) => self.git.commit_diff(hash),
        }
    }
}

fn diff_title(source: &DiffSource) -> String {
    match source {
        DiffSource::File(path) => path.clone(),
        DiffSource::Commit(hash) => format!("commit {}", hash.get(..7).unwrap_or(hash)),
    }
}
