//! Navigation state

use tracing::debug;

use super::FocusContext;

/// Vim navigation state, owned by the application
///
/// `focus_index < focusable_count` holds whenever `focusable_count > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    enabled: bool,
    active_context: FocusContext,
    focus_index: usize,
    focusable_count: usize,
    last_content_context: FocusContext,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl NavigationState {
    /// Create the state; with `enabled` set no context holds focus until a
    /// panel claims it
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            active_context: FocusContext::None,
            focus_index: 0,
            focusable_count: 0,
            last_content_context: FocusContext::CommitList,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn active_context(&self) -> FocusContext {
        self.active_context
    }

    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    pub fn focusable_count(&self) -> usize {
        self.focusable_count
    }

    pub fn last_content_context(&self) -> FocusContext {
        self.last_content_context
    }

    /// Turn navigation on (focus the header) or off (focus nothing)
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if enabled {
            self.switch_context(FocusContext::Header);
        } else {
            self.switch_context(FocusContext::None);
        }
        debug!(enabled, "vim navigation toggled");
    }

    /// Move focus to `context` at index 0
    ///
    /// Content contexts are remembered for `Tab`.
    pub fn switch_context(&mut self, context: FocusContext) {
        self.active_context = context;
        self.focus_index = 0;
        if context.is_content() {
            self.last_content_context = context;
        }
    }

    /// Set the focused index, clamped to the current count
    pub fn set_focus_index(&mut self, index: usize) {
        self.focus_index = index.min(self.focusable_count.saturating_sub(1));
    }

    /// Update the item count of the active context and re-clamp the index
    pub fn set_focusable_count(&mut self, count: usize) {
        self.focusable_count = count;
        self.set_focus_index(self.focus_index);
    }

    /// Set the last content context without moving focus
    pub fn set_last_content_context(&mut self, context: FocusContext) {
        if context.is_content() {
            self.last_content_context = context;
        }
    }
}
