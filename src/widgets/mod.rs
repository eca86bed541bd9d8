//! Widget state structs
//!
//! State-only structures for the interactive widgets: the themed button and
//! the single-line word entry. They hold data and provide methods for state
//! manipulation; drawing lives in `frontend::tui`.

pub mod entry;
pub mod themed_button;

pub use entry::EntryField;
pub use themed_button::ThemedButton;
