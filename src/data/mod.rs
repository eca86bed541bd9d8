//! Data layer - Pure state without UI coupling
//!
//! Focus, result lists and status text as plain data structures.
//! NO imports from frontend/ or any rendering code.
//! The TUI frontend reads from these structures to render.

pub mod ui_state;

pub use ui_state::*;
