//! Left panel: entry field, Find/Clear buttons, results.

use super::{button, results};
use crate::core::AppCore;
use crate::data::Focus;
use crate::theme::AppTheme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

pub(super) fn render(frame: &mut Frame, area: Rect, core: &mut AppCore, theme: &AppTheme, text_color: Color) {
    let [entry_area, button_row, list_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    let focus = core.ui_state.focus;
    let entry_border = if focus == Focus::Entry {
        theme.window_border_focused
    } else {
        theme.window_border
    };
    let entry_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(entry_border))
        .title("Word");
    let entry_inner = entry_block.inner(entry_area);
    frame.render_widget(entry_block, entry_area);
    frame.render_widget(core.input_panel.entry.textarea(), entry_inner);
    core.ui_state.areas.entry = Some(entry_area);

    let [find_area, clear_area] =
        Layout::horizontal([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
            .spacing(1)
            .areas(button_row);
    button::render(frame, find_area, &mut core.input_panel.find_button, text_color);
    button::render(frame, clear_area, &mut core.input_panel.clear_button, text_color);

    results::render(
        frame,
        list_area,
        &mut core.input_panel.results,
        "Synonyms",
        focus == Focus::InputResults,
        theme,
    );
    core.ui_state.areas.input_list = Some(list_area);
}
