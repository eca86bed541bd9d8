//! Core application logic
//!
//! Panel state and the rules for what a lookup displays. No rendering code:
//! core updates data structures, frontends read and render them.

pub mod app_core;
pub mod input_panel;
pub mod word_panel;

pub use app_core::AppCore;
