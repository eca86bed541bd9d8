//! Single-line word entry built on tui-textarea.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use tui_textarea::{Input, Key, TextArea};

pub struct EntryField {
    textarea: TextArea<'static>,
    focused: bool,
}

impl EntryField {
    pub fn new() -> Self {
        let mut entry = Self {
            textarea: TextArea::default(),
            focused: true,
        };
        entry.reset_textarea();
        entry
    }

    fn reset_textarea(&mut self) {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Type a word");
        self.textarea = textarea;
        self.apply_cursor_style();
    }

    fn apply_cursor_style(&mut self) {
        let style = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(style);
    }

    /// Current contents (never contains a newline)
    pub fn text(&self) -> String {
        self.textarea.lines().join("")
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(|line| line.is_empty())
    }

    /// Replace the contents
    pub fn set_text(&mut self, text: &str) {
        self.reset_textarea();
        self.textarea.insert_str(first_line(text));
    }

    pub fn clear(&mut self) {
        self.reset_textarea();
    }

    /// Insert text at the cursor; only the first line is kept
    pub fn paste(&mut self, text: &str) {
        self.textarea.insert_str(first_line(text));
    }

    /// Feed a key to the editor. Enter is refused so the field stays on one
    /// line. Returns true if the contents changed.
    pub fn input(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let input = Input::from(KeyEvent::new(code, modifiers));
        if matches!(input.key, Key::Enter) || (input.ctrl && matches!(input.key, Key::Char('m' | 'j'))) {
            return false;
        }
        self.textarea.input(input)
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.apply_cursor_style();
        }
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }
}

impl Default for EntryField {
    fn default() -> Self {
        Self::new()
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(entry: &mut EntryField, text: &str) {
        for c in text.chars() {
            entry.input(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut entry = EntryField::new();
        assert!(entry.is_empty());

        type_str(&mut entry, "happyy");
        assert!(entry.input(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(entry.text(), "happy");
    }

    #[test]
    fn test_enter_does_not_add_a_line() {
        let mut entry = EntryField::new();
        type_str(&mut entry, "glad");
        assert!(!entry.input(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(entry.textarea().lines().len(), 1);
        assert_eq!(entry.text(), "glad");
    }

    #[test]
    fn test_set_text_and_clear() {
        let mut entry = EntryField::new();
        entry.set_text("sonder\nsecond line");
        assert_eq!(entry.text(), "sonder");

        entry.clear();
        assert_eq!(entry.text(), "");
        assert!(entry.is_empty());
    }

    #[test]
    fn test_paste_keeps_first_line() {
        let mut entry = EntryField::new();
        type_str(&mut entry, "pe");
        entry.paste("trichor\nignored");
        assert_eq!(entry.text(), "petrichor");
    }
}
