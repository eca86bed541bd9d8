//! Ratatui rendering of the Dumile window.
//!
//! `app` owns the terminal. The remaining modules draw one piece of the
//! window each and record the screen areas mouse handling needs.

pub mod app;
mod button;
mod input_panel;
mod results;
mod shell;
mod word_panel;

pub use app::TuiFrontend;
