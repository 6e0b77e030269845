//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and panel management
//! - `input`: Key event routing (modal views, vim navigation, panels)
//! - `actions`: Git operations requested by panels
//! - `navigation`: Opening and reloading the diff and file views
//! - `refresh`: Reloading panel data from the Git service
//! - `render`: UI rendering

mod actions;
mod input;
mod navigation;
mod refresh;
mod render;
mod state;

pub use state::{App, Panel};
