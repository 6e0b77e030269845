//! Transient feedback shown in the title bar after a Git operation

use std::time::{Duration, Instant};

/// How long a notification stays visible
const LIFETIME: Duration = Duration::from_secs(4);

/// Notification severity (selects the color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation completed (green)
    Success,
    /// Neutral message (cyan)
    Info,
    /// Something was skipped (yellow)
    Warning,
}

/// A message displayed for a short time
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// True once the notification has outlived its display time
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= LIFETIME
    }
}
