//! Application state and panel management

use tracing::debug;

use crate::config::Config;
use crate::git::GitService;
use crate::model::Notification;
use crate::ui::views::{
    BranchListView, CommitListView, DiffView, FileChangesView, FileContentView, FileTreeView,
    HeaderBar, ViewAction,
};
use crate::vim::{FocusContext, NavigableList, VimNavigator};

/// Main panels, in header order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Files,
    History,
    Branches,
    Changes,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Files, Panel::History, Panel::Branches, Panel::Changes];

    pub fn label(self) -> &'static str {
        match self {
            Self::Files => "Files",
            Self::History => "History",
            Self::Branches => "Branches",
            Self::Changes => "Changes",
        }
    }

    /// Focus context the panel registers under
    pub fn context(self) -> FocusContext {
        match self {
            Self::Files => FocusContext::FileTree,
            Self::History => FocusContext::CommitList,
            Self::Branches => FocusContext::BranchList,
            Self::Changes => FocusContext::FileChanges,
        }
    }

    /// Next panel (Tab), wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Files => Self::History,
            Self::History => Self::Branches,
            Self::Branches => Self::Changes,
            Self::Changes => Self::Files,
        }
    }
}

/// What the open diff shows, for reloading on refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DiffSource {
    File(String),
    Commit(String),
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current main panel
    pub panel: Panel,
    pub header: HeaderBar,
    pub file_tree: FileTreeView,
    pub commits: CommitListView,
    pub branches: BranchListView,
    pub changes: FileChangesView,
    /// Diff view (modal, created on demand)
    pub diff_view: Option<DiffView>,
    pub(crate) diff_source: Option<DiffSource>,
    /// File content view (modal, created on demand)
    pub file_view: Option<FileContentView>,
    /// Vim focus navigation
    pub vim: VimNavigator,
    pub(crate) git: Box<dyn GitService>,
    pub(crate) config: Config,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Last known frame height (updated during render)
    pub(crate) last_frame_height: u16,
}

impl App {
    /// Default terminal height until the first render
    const DEFAULT_FRAME_HEIGHT: u16 = 24;
    /// Rows taken by header, panel borders and status bar
    const CHROME_HEIGHT: u16 = 5;

    /// Construct a new instance of [`App`] and load every panel
    pub fn new(git: Box<dyn GitService>, config: Config, repo_name: impl Into<String>) -> Self {
        let vim = VimNavigator::new(config.vim.enabled_on_start);
        let mut app = Self {
            running: true,
            panel: Panel::default(),
            header: HeaderBar::new(repo_name),
            file_tree: FileTreeView::new(),
            commits: CommitListView::new(),
            branches: BranchListView::new(),
            changes: FileChangesView::new(),
            diff_view: None,
            diff_source: None,
            file_view: None,
            vim,
            git,
            config,
            error_message: None,
            notification: None,
            last_frame_height: Self::DEFAULT_FRAME_HEIGHT,
        };

        app.refresh_all();
        app.sync_vim();
        app
    }

    /// Rows available to the current panel's list
    pub(crate) fn panel_height(&self) -> usize {
        self.last_frame_height.saturating_sub(Self::CHROME_HEIGHT) as usize
    }

    /// The panel shown for a panel kind, as a navigable list
    pub(crate) fn panel_list(
        &mut self,
        panel: Panel,
    ) -> &mut dyn NavigableList<Action = ViewAction> {
        match panel {
            Panel::Files => &mut self.file_tree,
            Panel::History => &mut self.commits,
            Panel::Branches => &mut self.branches,
            Panel::Changes => &mut self.changes,
        }
    }

    /// Make `panel` current
    pub fn switch_panel(&mut self, panel: Panel) {
        if self.panel != panel {
            debug!(from = self.panel.label(), to = panel.label(), "switch panel");
            self.panel = panel;
        }
        let context = panel.context();
        self.vim.state_mut().set_last_content_context(context);

        // Focus inside a content panel moves with it
        let active = self.vim.state().active_context();
        if active.is_content() && active != context {
            let count = self.panel_list(panel).item_count();
            self.vim.activate_context(context, count);
        }
    }

    /// Set a panel's selection (and vim index when it holds focus)
    pub(crate) fn select_in_panel(&mut self, index: usize) {
        match self.panel {
            Panel::Files => self.file_tree.select(index),
            Panel::History => self.commits.select(index),
            Panel::Branches => self.branches.select(index),
            Panel::Changes => self.changes.select(index),
        }
        if self.vim.is_active(self.panel.context()) {
            self.vim.state_mut().set_focus_index(index);
        }
    }

    pub(crate) fn panel_selected_index(&self) -> usize {
        match self.panel {
            Panel::Files => self.file_tree.selected_index(),
            Panel::History => self.commits.selected_index(),
            Panel::Branches => self.branches.selected_index(),
            Panel::Changes => self.changes.selected_index(),
        }
    }

    /// Bring vim focus in line with the mounted panels
    ///
    /// The current panel is the only mounted content context. It claims focus
    /// when nothing holds it, counts are refreshed for the active context, and
    /// the panel selection follows the vim index.
    pub(crate) fn sync_vim(&mut self) {
        let panel = self.panel;
        let context = panel.context();
        self.vim.state_mut().set_last_content_context(context);

        let count = self.panel_list(panel).item_count();
        self.vim.claim_focus(context, count);

        let active = self.vim.state().active_context();
        if active == FocusContext::Header {
            self.vim.report_count(active, self.header.item_count());
        } else if active == context {
            self.vim.report_count(active, count);
            if self.vim.is_enabled() && count > 0 {
                let index = self.vim.current_index();
                match panel {
                    Panel::Files => self.file_tree.select(index),
                    Panel::History => self.commits.select(index),
                    Panel::Branches => self.branches.select(index),
                    Panel::Changes => self.changes.select(index),
                }
            }
        } else {
            self.vim.report_count(active, 0);
        }
    }

    /// Copy the panel selection into the vim index after a panel-local move
    pub(crate) fn pull_panel_selection(&mut self) {
        if self.vim.is_active(self.panel.context()) {
            let index = self.panel_selected_index();
            self.vim.state_mut().set_focus_index(index);
        }
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
