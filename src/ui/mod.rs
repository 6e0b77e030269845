//! UI layer
//!
//! Contains views, widgets, shared components and theme definitions.

pub mod components;
pub mod theme;
pub mod views;
pub mod widgets;
