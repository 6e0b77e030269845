//! Keybinding definitions for gitty
//!
//! All keybindings are defined here so views and the vim router agree on them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::Panel;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

fn is_ctrl_char(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
}

/// Check if key is Ctrl+C (quit from anywhere)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    is_ctrl_char(key, 'c')
}

/// Check if key is Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    is_ctrl_char(key, 'l')
}

/// Check if key is Ctrl+S (submit the commit message)
pub fn is_submit_commit_key(key: &KeyEvent) -> bool {
    is_ctrl_char(key, 's')
}

/// Check if key is Ctrl+D (half page down)
pub fn is_half_page_down(key: &KeyEvent) -> bool {
    is_ctrl_char(key, 'd')
}

/// Check if key is Ctrl+U (half page up)
pub fn is_half_page_up(key: &KeyEvent) -> bool {
    is_ctrl_char(key, 'u')
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application or close the diff
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Close the diff / cancel input
pub const ESC: KeyCode = KeyCode::Esc;

/// Cycle main panels (vim mode off)
pub const TAB: KeyCode = KeyCode::Tab;

/// Switch to the Files panel
pub const PANEL_FILES: KeyCode = KeyCode::Char('1');

/// Switch to the History panel
pub const PANEL_HISTORY: KeyCode = KeyCode::Char('2');

/// Switch to the Branches panel
pub const PANEL_BRANCHES: KeyCode = KeyCode::Char('3');

/// Switch to the Changes panel
pub const PANEL_CHANGES: KeyCode = KeyCode::Char('4');

/// Push the current branch
pub const PUSH: KeyCode = KeyCode::Char('P');

/// Pull the current branch
pub const PULL: KeyCode = KeyCode::Char('p');

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Open the selected item
pub const OPEN: KeyCode = KeyCode::Enter;

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Vim navigation keys
// =============================================================================

/// Toggle vim navigation
pub const VIM_TOGGLE: KeyCode = KeyCode::Char('v');

/// Collapse / panel left
pub const VIM_LEFT: KeyCode = KeyCode::Char('h');

/// Expand / panel right
pub const VIM_RIGHT: KeyCode = KeyCode::Char('l');

// =============================================================================
// File tree keys
// =============================================================================

/// Check if key expands a directory (l or →)
pub fn is_expand(code: KeyCode) -> bool {
    matches!(code, VIM_RIGHT | KeyCode::Right)
}

/// Show the diff of the selected file (also in the content view)
pub const SHOW_DIFF: KeyCode = KeyCode::Char('d');

/// Check if key collapses a directory (h or ←)
pub fn is_collapse(code: KeyCode) -> bool {
    matches!(code, VIM_LEFT | KeyCode::Left)
}

// =============================================================================
// Changes panel keys
// =============================================================================

/// Stage the selected file
pub const STAGE: KeyCode = KeyCode::Char('s');

/// Unstage the selected file
pub const UNSTAGE: KeyCode = KeyCode::Char('u');

/// Open the commit message editor
pub const COMMIT: KeyCode = KeyCode::Char('C');

// =============================================================================
// Diff View keys
// =============================================================================

/// Reveal more lines of the focused section
pub const REVEAL: KeyCode = KeyCode::Enter;

/// Reveal more lines (alternative)
pub const REVEAL_ALT: KeyCode = KeyCode::Char(' ');

/// Reveal every collapsed section
pub const REVEAL_ALL: KeyCode = KeyCode::Char('e');

/// Jump to next reveal control
pub const NEXT_CONTROL: KeyCode = KeyCode::Char(']');

/// Jump to previous reveal control
pub const PREV_CONTROL: KeyCode = KeyCode::Char('[');

// =============================================================================
// Status bar hints
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_PANELS: KeyHint = KeyHint {
    key: "1-4",
    label: "Panels",
    color: Color::Cyan,
};
pub const HINT_VIM: KeyHint = KeyHint {
    key: "v",
    label: "Vim",
    color: Color::Magenta,
};
pub const HINT_VIM_EXIT: KeyHint = KeyHint {
    key: "Esc",
    label: "Exit vim",
    color: Color::Magenta,
};
pub const HINT_VIM_FOCUS: KeyHint = KeyHint {
    key: "Tab",
    label: "Focus",
    color: Color::Cyan,
};
pub const HINT_VIM_HEADER: KeyHint = KeyHint {
    key: "H/L",
    label: "Header",
    color: Color::Cyan,
};
pub const HINT_REFRESH: KeyHint = KeyHint {
    key: "^L",
    label: "Refresh",
    color: Color::Blue,
};
pub const HINT_OPEN: KeyHint = KeyHint {
    key: "Enter",
    label: "Open",
    color: Color::Green,
};
pub const HINT_TREE: KeyHint = KeyHint {
    key: "h/l",
    label: "Fold",
    color: Color::Yellow,
};
pub const HINT_DIFF: KeyHint = KeyHint {
    key: "d",
    label: "Diff",
    color: Color::Magenta,
};
pub const HINT_SYNC: KeyHint = KeyHint {
    key: "p/P",
    label: "Pull/Push",
    color: Color::Blue,
};
pub const HINT_SWITCH: KeyHint = KeyHint {
    key: "Enter",
    label: "Switch",
    color: Color::Green,
};
pub const HINT_STAGE: KeyHint = KeyHint {
    key: "s",
    label: "Stage",
    color: Color::Green,
};
pub const HINT_UNSTAGE: KeyHint = KeyHint {
    key: "u",
    label: "Unstage",
    color: Color::Yellow,
};
pub const HINT_COMMIT: KeyHint = KeyHint {
    key: "C",
    label: "Commit",
    color: Color::Magenta,
};
pub const HINT_SUBMIT_COMMIT: KeyHint = KeyHint {
    key: "^S",
    label: "Commit",
    color: Color::Green,
};
pub const HINT_CANCEL: KeyHint = KeyHint {
    key: "Esc",
    label: "Cancel",
    color: Color::Red,
};

/// Diff view hints (fixed, the diff is modal)
pub const DIFF_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Move",
        color: Color::Cyan,
    },
    KeyHint {
        key: "Enter",
        label: "Expand",
        color: Color::Green,
    },
    KeyHint {
        key: "]/[",
        label: "Next/Prev fold",
        color: Color::Yellow,
    },
    KeyHint {
        key: "e",
        label: "Expand all",
        color: Color::Magenta,
    },
    KeyHint {
        key: "q",
        label: "Close",
        color: Color::Red,
    },
];

/// File content view hints
pub const CONTENT_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Move",
        color: Color::Cyan,
    },
    HINT_DIFF,
    KeyHint {
        key: "q",
        label: "Close",
        color: Color::Red,
    },
];

/// Commit editor hints
pub const COMMIT_EDITOR_HINTS: &[KeyHint] = &[HINT_SUBMIT_COMMIT, HINT_CANCEL];

/// Get the hints for a main panel
pub fn panel_hints(panel: Panel, vim_enabled: bool) -> Vec<KeyHint> {
    let mut hints = match panel {
        Panel::Files => vec![HINT_OPEN, HINT_DIFF, HINT_TREE],
        Panel::History => vec![HINT_OPEN],
        Panel::Branches => vec![HINT_SWITCH, HINT_SYNC],
        Panel::Changes => vec![HINT_OPEN, HINT_STAGE, HINT_UNSTAGE, HINT_COMMIT],
    };
    if vim_enabled {
        hints.extend([HINT_VIM_FOCUS, HINT_VIM_HEADER, HINT_VIM_EXIT]);
    } else {
        hints.extend([HINT_PANELS, HINT_VIM]);
    }
    hints.extend([HINT_REFRESH, HINT_QUIT]);
    hints
}

// =============================================================================
// Tests
// =============================================================================
