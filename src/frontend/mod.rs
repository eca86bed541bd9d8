//! Frontend abstraction layer
//!
//! This module defines the `Frontend` trait the terminal frontend implements.
//! It provides a unified interface for event polling, rendering, and cleanup.

pub mod events;
pub mod tui;

use crate::core::AppCore;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Frontend trait
///
/// Separates rendering concerns from panel logic: the frontend reads
/// `AppCore` to draw and hands back `FrontendEvent`s for the core to apply.
pub trait Frontend {
    /// Poll for user input events
    ///
    /// Returns all pending events (keyboard, mouse, resize, paste) converted
    /// to `FrontendEvent`; empty if nothing arrived within the poll timeout.
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state
    ///
    /// Mutable because rendering records where buttons and lists were drawn
    /// for mouse hit-testing.
    fn render(&mut self, core: &mut AppCore) -> Result<()>;

    /// Restore the terminal before the application exits
    fn cleanup(&mut self) -> Result<()>;

    /// Current terminal size in cells as `(width, height)`
    fn size(&self) -> (u16, u16);
}
