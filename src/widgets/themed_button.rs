//! Button state with a hover color swap.
//!
//! The frontend records where the button was last drawn; pointer movement is
//! fed through [`ThemedButton::track_pointer`], which fires the enter/leave
//! hooks on transitions.

use ratatui::layout::Rect;

pub const DEFAULT_COLOR: &str = "#1F6AA5";
pub const HOVER_COLOR: &str = "#FF5733";

#[derive(Debug, Clone)]
pub struct ThemedButton {
    label: String,
    default_color: String,
    hover_color: String,
    hovered: bool,
    area: Option<Rect>,
}

impl ThemedButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            default_color: DEFAULT_COLOR.to_string(),
            hover_color: HOVER_COLOR.to_string(),
            hovered: false,
            area: None,
        }
    }

    pub fn set_colors(&mut self, default_color: impl Into<String>, hover_color: impl Into<String>) {
        self.default_color = default_color.into();
        self.hover_color = hover_color.into();
    }

    /// Pointer entered the button
    pub fn on_enter(&mut self) {
        self.hovered = true;
    }

    /// Pointer left the button
    pub fn on_leave(&mut self) {
        self.hovered = false;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Hex color the button should be filled with right now
    pub fn current_color(&self) -> &str {
        if self.hovered {
            &self.hover_color
        } else {
            &self.default_color
        }
    }

    /// Record where the button was drawn
    pub fn set_area(&mut self, area: Rect) {
        self.area = Some(area);
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// Check if (x, y) falls inside the last drawn area
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area
            .is_some_and(|area| crate::data::rect_contains(area, x, y))
    }

    /// Fire enter/leave for a pointer at (x, y). Returns true if hover changed.
    pub fn track_pointer(&mut self, x: u16, y: u16) -> bool {
        let inside = self.contains(x, y);
        if inside && !self.hovered {
            self.on_enter();
            true
        } else if !inside && self.hovered {
            self.on_leave();
            true
        } else {
            false
        }
    }
}
