//! UI State - Focus, result lists, and status line
//!
//! This module contains UI state that is independent of rendering.

use ratatui::layout::Rect;
use ratatui::widgets::ListState;

/// Which part of the window receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The word entry field of the input panel
    Entry,
    /// The input panel's result list
    InputResults,
    /// The word-of-the-day panel (button and list)
    WordOfTheDay,
}

impl Focus {
    /// Move focus forward (entry -> results -> word of the day)
    pub fn next(self) -> Self {
        match self {
            Focus::Entry => Focus::InputResults,
            Focus::InputResults => Focus::WordOfTheDay,
            Focus::WordOfTheDay => Focus::Entry,
        }
    }

    /// Move focus backward
    pub fn prev(self) -> Self {
        match self {
            Focus::Entry => Focus::WordOfTheDay,
            Focus::InputResults => Focus::Entry,
            Focus::WordOfTheDay => Focus::InputResults,
        }
    }
}

/// Lines shown in a panel's list view, with an optional selection cursor.
///
/// Rebuilt from scratch on every panel action. The list state (selection and
/// scroll offset) persists across frames so the renderer can keep the
/// selection in view and clicks map back to the item drawn under the pointer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultList {
    lines: Vec<String>,
    state: ListState,
    /// Rows each item took when last drawn (wrapped lines take several)
    item_heights: Vec<u16>,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.item_heights.clear();
        self.state = ListState::default();
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn selected_line(&self) -> Option<&str> {
        self.selected()
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    /// Select a row; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.lines.len() {
            self.state.select(Some(index));
        }
    }

    pub fn select_next(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        let next = match self.selected() {
            Some(idx) => (idx + 1) % self.lines.len(),
            None => 0,
        };
        self.state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        let previous = match self.selected() {
            Some(0) | None => self.lines.len() - 1,
            Some(idx) => idx - 1,
        };
        self.state.select(Some(previous));
    }

    /// State handed to ratatui's `List`; rendering updates the scroll offset
    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    /// Record how many rows each item took in the last frame
    pub fn set_item_heights(&mut self, heights: Vec<u16>) {
        self.item_heights = heights;
    }

    /// Item drawn at `row` (0 = first row inside the border) in the last frame
    pub fn item_at_row(&self, row: usize) -> Option<usize> {
        let mut top = 0;
        for index in self.state.offset()..self.lines.len() {
            let height = self.item_heights.get(index).copied().unwrap_or(1).max(1) as usize;
            if row < top + height {
                return Some(index);
            }
            top += height;
        }
        None
    }
}

/// Where the clickable regions were drawn last frame (for mouse hit-testing)
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutAreas {
    pub entry: Option<Rect>,
    pub input_list: Option<Rect>,
    pub word_list: Option<Rect>,
}

/// Check if (x, y) lies inside `area`
pub fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x
        && x < area.x.saturating_add(area.width)
        && y >= area.y
        && y < area.y.saturating_add(area.height)
}

/// Application UI state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Currently focused region
    pub focus: Focus,

    /// Regions recorded by the renderer
    pub areas: LayoutAreas,

    /// Status bar text
    pub status_text: String,

    /// Cleared when the user asks to quit
    pub running: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Entry,
            areas: LayoutAreas::default(),
            status_text: String::new(),
            running: true,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_text = text.into();
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
