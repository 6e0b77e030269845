//! Key router for vim navigation

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::{FocusContext, NavigationState};
use crate::keys;

/// Per-panel hooks called by [`VimNavigator`]
///
/// Each list panel implements this once and is handed to the router while it
/// is mounted. Hooks return an optional action for the application to apply.
pub trait NavigableList {
    /// Action produced by the panel
    type Action;

    /// Number of focusable items
    fn item_count(&self) -> usize;

    /// `Enter` on the item at `index`
    fn on_activate(&mut self, index: usize) -> Option<Self::Action>;

    /// `l` in a tree
    fn on_expand(&mut self, _index: usize) -> Option<Self::Action> {
        None
    }

    /// `h` in a tree
    fn on_collapse(&mut self, _index: usize) -> Option<Self::Action> {
        None
    }

    /// `h` outside a tree
    fn on_panel_left(&mut self) -> Option<Self::Action> {
        None
    }

    /// `l` outside a tree
    fn on_panel_right(&mut self) -> Option<Self::Action> {
        None
    }
}

/// Result of routing one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VimOutcome<A> {
    /// Not a navigation key in the current state
    Ignored,
    /// Consumed by the router
    Consumed,
    /// Consumed, and the active panel produced an action
    Action(A),
}

impl<A> VimOutcome<A> {
    /// Check if the key must not be handled any further
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    fn from_action(action: Option<A>) -> Self {
        action.map_or(Self::Consumed, Self::Action)
    }
}

/// Global vim key router over a [`NavigationState`]
#[derive(Debug, Clone, Default)]
pub struct VimNavigator {
    state: NavigationState,
}

impl VimNavigator {
    pub fn new(enabled: bool) -> Self {
        Self {
            state: NavigationState::new(enabled),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut NavigationState {
        &mut self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled()
    }

    /// Check if `context` currently owns the focus ring
    pub fn is_active(&self, context: FocusContext) -> bool {
        self.state.enabled() && self.state.active_context() == context
    }

    pub fn current_index(&self) -> usize {
        self.state.focus_index()
    }

    /// Toggle navigation mode (`v`)
    pub fn toggle(&mut self) {
        self.state.set_enabled(!self.state.enabled());
    }

    /// Give focus to `context` at index 0 with `count` items
    ///
    /// Does nothing while navigation is disabled.
    pub fn activate_context(&mut self, context: FocusContext, count: usize) {
        if !self.state.enabled() {
            return;
        }
        self.state.switch_context(context);
        self.state.set_focusable_count(count);
        debug!(%context, count, "vim context activated");
    }

    /// Let a freshly shown panel take focus when nothing else holds it
    ///
    /// Returns true when `context` took focus.
    pub fn claim_focus(&mut self, context: FocusContext, count: usize) -> bool {
        if self.state.enabled()
            && count > 0
            && self.state.active_context() == FocusContext::None
        {
            self.activate_context(context, count);
            return true;
        }
        false
    }

    /// Keep the focusable count of the active context current
    pub fn report_count(&mut self, context: FocusContext, count: usize) {
        if self.is_active(context) {
            self.state.set_focusable_count(count);
        }
    }

    /// Route a key event
    ///
    /// `list` is the panel mounted for the active context, if any. Keys that
    /// don't apply in the current state are [`VimOutcome::Ignored`] so the
    /// caller can apply its own bindings.
    pub fn handle_key<A>(
        &mut self,
        key: KeyEvent,
        list: Option<&mut dyn NavigableList<Action = A>>,
    ) -> VimOutcome<A> {
        if key.code == keys::VIM_TOGGLE && key.modifiers == KeyModifiers::NONE {
            self.toggle();
            return VimOutcome::Consumed;
        }

        if !self.state.enabled() {
            return VimOutcome::Ignored;
        }

        let plain = key.modifiers == KeyModifiers::NONE;
        let context = self.state.active_context();
        let index = self.state.focus_index();
        let count = self.state.focusable_count();

        match key.code {
            KeyCode::Esc => {
                self.state.set_enabled(false);
                VimOutcome::Consumed
            }
            KeyCode::Tab => {
                let target = if context == FocusContext::Header {
                    self.state.last_content_context()
                } else {
                    FocusContext::Header
                };
                self.state.switch_context(target);
                debug!(%target, "vim focus switched");
                VimOutcome::Consumed
            }
            KeyCode::Char(c @ ('H' | 'L')) if !has_ctrl_or_alt(key.modifiers) => {
                if context != FocusContext::Header {
                    self.state.switch_context(FocusContext::Header);
                } else if c == 'L' {
                    self.state.set_focus_index(index.saturating_add(1));
                } else {
                    self.state.set_focus_index(index.saturating_sub(1));
                }
                VimOutcome::Consumed
            }
            keys::MOVE_DOWN if plain => {
                if context != FocusContext::Header && index + 1 < count {
                    self.state.set_focus_index(index + 1);
                }
                VimOutcome::Consumed
            }
            keys::MOVE_UP if plain => {
                if context != FocusContext::Header && index > 0 {
                    self.state.set_focus_index(index - 1);
                }
                VimOutcome::Consumed
            }
            keys::VIM_LEFT if plain => {
                let action = list.and_then(|list| {
                    if context == FocusContext::FileTree {
                        list.on_collapse(index)
                    } else {
                        list.on_panel_left()
                    }
                });
                VimOutcome::from_action(action)
            }
            keys::VIM_RIGHT if plain => {
                let action = list.and_then(|list| {
                    if context == FocusContext::FileTree {
                        list.on_expand(index)
                    } else {
                        list.on_panel_right()
                    }
                });
                VimOutcome::from_action(action)
            }
            KeyCode::Enter => {
                let action = list
                    .filter(|list| list.item_count() > 0)
                    .and_then(|list| list.on_activate(index));
                VimOutcome::from_action(action)
            }
            _ => VimOutcome::Ignored,
        }
    }
}

fn has_ctrl_or_alt(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every hook call
    #[derive(Default)]
    struct Recorder {
        count: usize,
        calls: Vec<String>,
    }

    impl Recorder {
        fn with_count(count: usize) -> Self {
            Self {
                count,
                calls: Vec::new(),
            }
        }
    }

    impl NavigableList for Recorder {
        type Action = String;

        fn item_count(&self) -> usize {
            self.count
        }

        fn on_activate(&mut self, index: usize) -> Option<String> {
            self.calls.push(format!("activate {index}"));
            Some(format!("open {index}"))
        }

        fn on_expand(&mut self, index: usize) -> Option<String> {
            self.calls.push(format!("expand {index}"));
            None
        }

        fn on_collapse(&mut self, index: usize) -> Option<String> {
            self.calls.push(format!("collapse {index}"));
            None
        }

        fn on_panel_left(&mut self) -> Option<String> {
            self.calls.push("left".to_string());
            None
        }

        fn on_panel_right(&mut self) -> Option<String> {
            self.calls.push("right".to_string());
            None
        }
    }

    fn press(nav: &mut VimNavigator, code: KeyCode) -> VimOutcome<String> {
        nav.handle_key::<String>(KeyEvent::from(code), None)
    }

    fn press_with(
        nav: &mut VimNavigator,
        code: KeyCode,
        list: &mut Recorder,
    ) -> VimOutcome<String> {
        let list = list as &mut dyn NavigableList<Action = String>;
        nav.handle_key(KeyEvent::from(code), Some(list))
    }

    // =========================================================================
    // Toggle / Esc
    // =========================================================================

    #[test]
    fn test_v_enables_into_header() {
        let mut nav = VimNavigator::default();
        assert!(press(&mut nav, KeyCode::Char('v')).is_consumed());
        assert!(nav.is_enabled());
        assert_eq!(nav.state().active_context(), FocusContext::Header);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_v_disables_into_none() {
        let mut nav = VimNavigator::default();
        press(&mut nav, KeyCode::Char('v'));
        press(&mut nav, KeyCode::Char('v'));
        assert!(!nav.is_enabled());
        assert_eq!(nav.state().active_context(), FocusContext::None);
    }

    #[test]
    fn test_v_with_modifier_is_ignored() {
        let mut nav = VimNavigator::default();
        let key = KeyEvent::new(KeyCode::Char('v'), KeyModifiers::CONTROL);
        assert_eq!(nav.handle_key::<String>(key, None), VimOutcome::Ignored);
        assert!(!nav.is_enabled());
    }

    #[test]
    fn test_esc_disables() {
        let mut nav = VimNavigator::default();
        press(&mut nav, KeyCode::Char('v'));
        assert!(press(&mut nav, KeyCode::Esc).is_consumed());
        assert!(!nav.is_enabled());
        assert_eq!(nav.state().active_context(), FocusContext::None);
    }

    #[test]
    fn test_keys_ignored_when_disabled() {
        let mut nav = VimNavigator::default();
        for code in [KeyCode::Esc, KeyCode::Tab, KeyCode::Char('j'), KeyCode::Enter] {
            assert_eq!(press(&mut nav, code), VimOutcome::Ignored);
        }
    }

    // =========================================================================
    // Tab / H / L
    // =========================================================================

    #[test]
    fn test_tab_goes_to_last_content_context() {
        let mut nav = VimNavigator::default();
        press(&mut nav, KeyCode::Char('v'));
        press(&mut nav, KeyCode::Tab);
        assert_eq!(nav.state().active_context(), FocusContext::CommitList);
        assert_eq!(nav.current_index(), 0);

        press(&mut nav, KeyCode::Tab);
        assert_eq!(nav.state().active_context(), FocusContext::Header);
    }

    #[test]
    fn test_tab_remembers_file_tree() {
        let mut nav = VimNavigator::new(true);
        nav.activate_context(FocusContext::FileTree, 4);
        press(&mut nav, KeyCode::Tab);
        press(&mut nav, KeyCode::Tab);
        assert_eq!(nav.state().active_context(), FocusContext::FileTree);
    }

    #[test]
    fn test_shift_l_outside_header_jumps_to_header() {
        let mut nav = VimNavigator::new(true);
        nav.activate_context(FocusContext::BranchList, 5);
        nav.state_mut().set_focus_index(3);

        let key = KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT);
        nav.handle_key::<String>(key, None);
        assert_eq!(nav.state().active_context(), FocusContext::Header);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_shift_h_l_move_within_header_clamped() {
        let mut nav = VimNavigator::new(true);
        nav.activate_context(FocusContext::Header, 4);

        for _ in 0..6 {
            press(&mut nav, KeyCode::Char('L'));
        }
        assert_eq!(nav.current_index(), 3);

        for _ in 0..6 {
            press(&mut nav, KeyCode::Char('H'));
        }
        assert_eq!(nav.current_index(), 0);
    }

    // =========================================================================
    // j / k
    // =========================================================================

    #[test]
    fn test_j_clamps_at_last_item() {
        let mut nav = VimNavigator::new(true);
        nav.activate_context(FocusContext::CommitList, 5);
        nav.state_mut().set_focus_index(4);

        assert!(press(&mut nav, KeyCode::Char('j')).is_consumed());
        assert_eq!(nav.current_index(), 4);
    }

    #[test]
    fn test_j_k_move_in_content() {
        let mut nav = VimNavigator::new(true);
        nav.activate_context(FocusContext::CommitList, 3);
        press(&mut nav, KeyCode::Char('j'));
        press(&mut nav, KeyCode::Char('j'));
        assert_eq!(nav.current_index(), 2);
        press(&mut nav, KeyCode::Char('k'));
        assert_eq!(nav.current_index(), 1);
        press(&mut nav, KeyCode::Char('k'));
        press(&mut nav, KeyCode::Char('k'));
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_j_is_noop_in_header() {
        let mut nav = VimNavigator::new(true);
        nav.activate_context(FocusContext::Header, 4);
        press(&mut nav, KeyCode::Char('j'));
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_j_with_empty_list() {
        let mut nav = VimNavigator::new(true);
        nav.activate_context(FocusContext::BranchList, 0);
        press(&mut nav, KeyCode::Char('j'));
        assert_eq!(nav.current_index(), 0);
    }

    // =========================================================================
    // h / l / Enter delegation
    // =========================================================================

    #[test]
    fn test_h_l_in_file_tree_collapse_expand() {
        let mut nav = VimNavigator::new(true);
        nav.activate_context(FocusContext::FileTree, 3);
        nav.state_mut().set_focus_index(2);
        let mut list = Recorder::with_count(3);

        press_with(&mut nav, KeyCode::Char('l'), &mut list);
        press_with(&mut nav, KeyCode::Char('h'), &mut list);
        assert_eq!(list.calls, vec!["expand 2", "collapse 2"]);
    }

    #[test]
    fn test_h_l_elsewhere_switch_panels() {
        let mut nav = VimNavigator::new(true);
        nav.activate_context(FocusContext::CommitList, 3);
        let mut list = Recorder::with_count(3);

        press_with(&mut nav, KeyCode::Char('h'), &mut list);
        press_with(&mut nav, KeyCode::Char('l'), &mut list);
        assert_eq!(list.calls, vec!["left", "right"]);
    }

    #[test]
    fn test_enter_activates_focused_item() {
        let mut nav = VimNavigator::new(true);
        nav.activate_context(FocusContext::FileChanges, 5);
        nav.state_mut().set_focus_index(3);
        let mut list = Recorder::with_count(5);

        let outcome = press_with(&mut nav, KeyCode::Enter, &mut list);
        assert_eq!(outcome, VimOutcome::Action("open 3".to_string()));
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let mut nav = VimNavigator::new(true);
        nav.activate_context(FocusContext::FileChanges, 0);
        let mut list = Recorder::with_count(0);

        let outcome = press_with(&mut nav, KeyCode::Enter, &mut list);
        assert_eq!(outcome, VimOutcome::Consumed);
        assert!(list.calls.is_empty());
    }

    #[test]
    fn test_unrelated_key_ignored_when_enabled() {
        let mut nav = VimNavigator::new(true);
        nav.activate_context(FocusContext::FileChanges, 2);
        assert_eq!(press(&mut nav, KeyCode::Char('s')), VimOutcome::Ignored);
    }

    // =========================================================================
    // Context activation
    // =========================================================================

    #[test]
    fn test_claim_focus_only_when_unfocused() {
        let mut nav = VimNavigator::new(true);
        assert!(!nav.claim_focus(FocusContext::CommitList, 0));
        assert!(nav.claim_focus(FocusContext::CommitList, 7));
        assert!(nav.is_active(FocusContext::CommitList));
        assert_eq!(nav.state().focusable_count(), 7);

        assert!(!nav.claim_focus(FocusContext::BranchList, 2));
        assert!(nav.is_active(FocusContext::CommitList));
    }

    #[test]
    fn test_claim_focus_disabled() {
        let mut nav = VimNavigator::default();
        assert!(!nav.claim_focus(FocusContext::CommitList, 3));
        assert!(!nav.is_active(FocusContext::CommitList));
    }

    #[test]
    fn test_report_count_only_for_active_context() {
        let mut nav = VimNavigator::new(true);
        nav.activate_context(FocusContext::FileTree, 10);
        nav.state_mut().set_focus_index(9);

        nav.report_count(FocusContext::CommitList, 2);
        assert_eq!(nav.state().focusable_count(), 10);

        nav.report_count(FocusContext::FileTree, 4);
        assert_eq!(nav.state().focusable_count(), 4);
        assert_eq!(nav.current_index(), 3);
    }
}
