//! Modal vim-style focus navigation
//!
//! One [`VimNavigator`] per application routes global keys (`v`, `Esc`,
//! `Tab`, `H`/`L`, `j`/`k`) and delegates `h`/`l`/`Enter` to the
//! [`NavigableList`] mounted for the active [`FocusContext`].

mod context;
mod navigator;
mod state;

pub use context::FocusContext;
pub use navigator::{NavigableList, VimNavigator, VimOutcome};
pub use state::NavigationState;

/// Status line label for the current focus, or None while disabled
///
/// Format: `"<Label> [i/n]"` with a 1-based index, or just the label when the
/// active context has no items.
pub fn focus_info(state: &NavigationState) -> Option<String> {
    if !state.enabled() {
        return None;
    }
    let label = state.active_context().label();
    let count = state.focusable_count();
    if count > 0 {
        Some(format!("{} [{}/{}]", label, state.focus_index() + 1, count))
    } else {
        Some(label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_info_disabled() {
        assert_eq!(focus_info(&NavigationState::default()), None);
    }

    #[test]
    fn test_focus_info_with_items() {
        let mut nav = VimNavigator::new(true);
        nav.activate_context(FocusContext::CommitList, 12);
        nav.state_mut().set_focus_index(2);
        assert_eq!(focus_info(nav.state()).as_deref(), Some("Commits [3/12]"));
    }

    #[test]
    fn test_focus_info_without_items() {
        let mut state = NavigationState::new(false);
        state.set_enabled(true);
        assert_eq!(focus_info(&state).as_deref(), Some("Header"));
    }
}
