//! gitty - a terminal Git client
//!
//! Browse a repository's files, history, branches and pending changes, and
//! read diffs where long unchanged stretches stay folded until asked for.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`config`]: User configuration
//! - [`diff`]: Diff segmentation and progressive reveal
//! - [`git`]: Git command execution and parsing
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models
//! - [`ui`]: User interface components
//! - [`vim`]: Modal vim-style focus navigation

pub mod app;
pub mod config;
pub mod diff;
pub mod git;
pub mod keys;
pub mod model;
pub mod ui;
pub mod vim;
