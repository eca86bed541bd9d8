use crate::config::Config;
use crate::core::input_panel::{InputPanel, SubmitOutcome};
use crate::core::word_panel::WordOfTheDayPanel;
use crate::data::{rect_contains, Focus, ResultList, UiState};
use crate::lexicon::Thesaurus;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

/// Core application state (frontend-agnostic)
///
/// AppCore owns both panels, the lookup service and the UI state. Frontends
/// translate their native events into calls on `handle_key`, `handle_mouse`
/// and `paste`, then render whatever state results.
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Synonym lookup service shared by both panels
    thesaurus: Box<dyn Thesaurus>,

    /// Left panel: free-text lookup
    pub input_panel: InputPanel,

    /// Right panel: word of the day
    pub word_panel: WordOfTheDayPanel,

    /// Focus, status line, clickable regions
    pub ui_state: UiState,
}

impl AppCore {
    pub fn new(config: Config, thesaurus: Box<dyn Thesaurus>) -> Self {
        let mut core = Self {
            config,
            thesaurus,
            input_panel: InputPanel::new(),
            word_panel: WordOfTheDayPanel::new(),
            ui_state: UiState::new(),
        };
        core.apply_button_colors();
        core
    }

    fn apply_button_colors(&mut self) {
        let colors = &self.config.buttons;
        for button in [
            &mut self.input_panel.find_button,
            &mut self.input_panel.clear_button,
            &mut self.word_panel.button,
        ] {
            button.set_colors(colors.default_color.clone(), colors.hover_color.clone());
        }
    }

    pub fn is_running(&self) -> bool {
        self.ui_state.running
    }

    pub fn quit(&mut self) {
        tracing::info!("Quit requested");
        self.ui_state.running = false;
    }

    /// Input panel: look up the entry text
    pub fn submit_input(&mut self) {
        match self.input_panel.submit(self.thesaurus.as_ref()) {
            SubmitOutcome::Displayed => self.ui_state.set_status(""),
            SubmitOutcome::Ignored => {}
        }
    }

    /// Input panel: empty the result list
    pub fn clear_input(&mut self) {
        self.input_panel.clear();
    }

    /// Word-of-the-day panel: pick the next word
    pub fn advance_word(&mut self) {
        self.word_panel.advance(self.thesaurus.as_ref());
    }

    /// Paste text into the entry field
    pub fn paste(&mut self, text: &str) {
        self.set_focus(Focus::Entry);
        self.input_panel.entry.paste(text);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.ui_state.focus = focus;
        self.input_panel.entry.set_focused(focus == Focus::Entry);
    }

    fn focused_list_mut(&mut self) -> Option<&mut ResultList> {
        match self.ui_state.focus {
            Focus::Entry => None,
            Focus::InputResults => Some(&mut self.input_panel.results),
            Focus::WordOfTheDay => Some(&mut self.word_panel.results),
        }
    }

    /// Copy the selected line of the focused list to the clipboard
    fn copy_selection(&mut self) {
        let list = match self.ui_state.focus {
            Focus::WordOfTheDay => &self.word_panel.results,
            _ => &self.input_panel.results,
        };
        let Some(line) = list.selected_line().map(str::to_string) else {
            self.ui_state.set_status("Nothing selected to copy");
            return;
        };

        match crate::clipboard::copy(&line) {
            Ok(()) => self.ui_state.set_status(format!("Copied '{}'", line)),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.ui_state.set_status(format!("Clipboard unavailable: {}", e));
            }
        }
    }

    fn paste_from_clipboard(&mut self) {
        match crate::clipboard::paste() {
            Ok(text) => self.paste(&text),
            Err(e) => {
                tracing::warn!("Clipboard paste failed: {:#}", e);
                self.ui_state.set_status(format!("Clipboard unavailable: {}", e));
            }
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);

        match code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char('l') if ctrl => self.clear_input(),
            KeyCode::Char('w') if ctrl => self.advance_word(),
            KeyCode::Char('y') if ctrl => self.copy_selection(),
            KeyCode::Char('v') if ctrl => self.paste_from_clipboard(),
            KeyCode::Tab => self.set_focus(self.ui_state.focus.next()),
            KeyCode::BackTab => self.set_focus(self.ui_state.focus.prev()),
            KeyCode::Enter => match self.ui_state.focus {
                Focus::Entry => self.submit_input(),
                Focus::WordOfTheDay => self.advance_word(),
                Focus::InputResults => {}
            },
            KeyCode::Up => {
                if let Some(list) = self.focused_list_mut() {
                    list.select_previous();
                }
            }
            KeyCode::Down => {
                if let Some(list) = self.focused_list_mut() {
                    list.select_next();
                }
            }
            _ => {
                if self.ui_state.focus == Focus::Entry {
                    self.input_panel.entry.input(code, modifiers);
                }
            }
        }
    }

    /// Handle one mouse event at terminal cell (x, y)
    pub fn handle_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        match kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.track_hover(x, y),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(x, y),
            MouseEventKind::ScrollUp => {
                if let Some(list) = self.focused_list_mut() {
                    list.select_previous();
                }
            }
            MouseEventKind::ScrollDown => {
                if let Some(list) = self.focused_list_mut() {
                    list.select_next();
                }
            }
            _ => {}
        }
    }

    fn track_hover(&mut self, x: u16, y: u16) {
        for button in [
            &mut self.input_panel.find_button,
            &mut self.input_panel.clear_button,
            &mut self.word_panel.button,
        ] {
            if button.track_pointer(x, y) {
                tracing::trace!("Hover on '{}': {}", button.label(), button.is_hovered());
            }
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) {
        if self.input_panel.find_button.contains(x, y) {
            self.set_focus(Focus::Entry);
            self.submit_input();
            return;
        }
        if self.input_panel.clear_button.contains(x, y) {
            self.clear_input();
            return;
        }
        if self.word_panel.button.contains(x, y) {
            self.set_focus(Focus::WordOfTheDay);
            self.advance_word();
            return;
        }

        let areas = self.ui_state.areas;
        if areas.entry.is_some_and(|area| rect_contains(area, x, y)) {
            self.set_focus(Focus::Entry);
        } else if let Some(area) = areas.input_list.filter(|area| rect_contains(*area, x, y)) {
            self.set_focus(Focus::InputResults);
            let results = &mut self.input_panel.results;
            if let Some(index) = list_row(area, y).and_then(|row| results.item_at_row(row)) {
                results.select(index);
            }
        } else if let Some(area) = areas.word_list.filter(|area| rect_contains(*area, x, y)) {
            self.set_focus(Focus::WordOfTheDay);
            let results = &mut self.word_panel.results;
            if let Some(index) = list_row(area, y).and_then(|row| results.item_at_row(row)) {
                results.select(index);
            }
        }
    }
}

/// Row index under `y` for a bordered list drawn in `area`
fn list_row(area: Rect, y: u16) -> Option<usize> {
    let relative_y = y.checked_sub(area.y)?;
    // Border takes 1 row at top and bottom
    if relative_y == 0 || relative_y + 1 >= area.height {
        return None;
    }
    Some((relative_y - 1) as usize)
}
