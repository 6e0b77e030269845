//! Reusable UI components
//!
//! Common building blocks for views.

pub mod blocks;
pub mod empty_state;
pub mod list;
pub mod message;

pub use blocks::*;
pub use empty_state::*;
pub use list::*;
pub use message::*;
