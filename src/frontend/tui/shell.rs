//! The fixed-size "Dumile" frame: two panels side by side at a 1:3 width
//! ratio, with a one-line status bar underneath.

use super::{input_panel, word_panel};
use crate::core::AppCore;
use crate::theme::{hex_to_color, AppTheme};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const WINDOW_TITLE: &str = " Dumile ";
const KEY_HINTS: &str =
    "Enter find | Ctrl+L clear | Ctrl+W word of the day | Tab focus | Ctrl+Y copy | Esc quit";

pub(super) fn render(frame: &mut Frame, core: &mut AppCore, theme: &AppTheme) {
    let window = centered(frame.area(), core.config.ui.width, core.config.ui.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.window_border))
        .title(WINDOW_TITLE)
        .title_style(
            Style::default()
                .fg(theme.window_title)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(window);
    frame.render_widget(block, window);

    let [body, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    let [left, right] = Layout::horizontal([Constraint::Ratio(1, 4), Constraint::Ratio(3, 4)])
        .spacing(1)
        .areas(body);

    let text_color = hex_to_color(&core.config.buttons.text_color).unwrap_or(Color::White);
    input_panel::render(frame, left, core, theme, text_color);
    word_panel::render(frame, right, core, theme, text_color);

    let status = if core.ui_state.status_text.is_empty() {
        KEY_HINTS
    } else {
        core.ui_state.status_text.as_str()
    };
    frame.render_widget(
        Paragraph::new(status.to_string()).style(Style::default().fg(theme.text_secondary)),
        status_area,
    );
}

/// A `width` x `height` rect centered in `screen`, shrunk to fit
fn centered(screen: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);
    Rect::new(
        screen.x + (screen.width - width) / 2,
        screen.y + (screen.height - height) / 2,
        width,
        height,
    )
}
