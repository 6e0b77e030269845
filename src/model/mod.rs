//! Data models for gitty
//!
//! This module contains UI-independent data structures: parsed diff lines,
//! collapsible sections, and the repository data returned by the Git service.

mod diff;
mod notification;
mod repository;
mod section;

pub use diff::{DiffLine, DiffLineKind};
pub use notification::{Notification, NotificationKind};
pub use repository::{Author, Branch, Commit, FileChange, FileInfo, RepositoryStatus};
pub use section::{CollapsibleSection, RevealDirection, SectionId};
