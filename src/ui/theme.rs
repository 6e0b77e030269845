//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the header bar
pub mod header {
    use super::*;

    /// Current panel tab
    pub const ACTIVE_TAB: Color = Color::Cyan;
    /// Other tabs
    pub const INACTIVE_TAB: Color = Color::DarkGray;
    /// Branch name
    pub const BRANCH: Color = Color::Green;
}

/// Colors for list panels
pub mod list {
    use super::*;

    /// Commit hash
    pub const HASH: Color = Color::Yellow;
    /// Author name
    pub const AUTHOR: Color = Color::Cyan;
    /// Timestamps
    pub const TIMESTAMP: Color = Color::DarkGray;
    /// Directory entries
    pub const DIRECTORY: Color = Color::Blue;
    /// Current branch marker
    pub const CURRENT_BRANCH: Color = Color::Green;
    /// Remote branches
    pub const REMOTE_BRANCH: Color = Color::Red;
    /// Group headings in the Changes panel
    pub const GROUP_HEADING: Color = Color::Magenta;
}

/// Colors for Diff View
pub mod diff_view {
    use super::*;

    /// Added line color
    pub const ADDED: Color = Color::Green;
    /// Removed line color
    pub const REMOVED: Color = Color::Red;
    /// Context line color
    pub const CONTEXT: Color = Color::Reset;
    /// Hunk header color
    pub const HUNK_HEADER: Color = Color::Cyan;
    /// Line number gutter
    pub const LINE_NUMBER: Color = Color::DarkGray;
    /// "Show more" control
    pub const REVEAL_CONTROL: Color = Color::Blue;
}

/// Colors for the Changes panel
pub mod status_view {
    use super::*;

    /// Staged file color
    pub const STAGED: Color = Color::Green;
    /// Modified file color
    pub const MODIFIED: Color = Color::Yellow;
    /// Untracked file color
    pub const UNTRACKED: Color = Color::Red;
    /// Unresolved conflict color
    pub const CONFLICT: Color = Color::LightRed;
}

/// Selection highlight
pub mod selection {
    use super::*;

    pub const FG: Color = Color::White;
    pub const BG: Color = Color::DarkGray;
    /// Vim focus ring
    pub const VIM_BG: Color = Color::Blue;
}
