//! Right panel: current word label, Word of the Day button, results.

use super::{button, results};
use crate::core::AppCore;
use crate::data::Focus;
use crate::theme::AppTheme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub(super) fn render(frame: &mut Frame, area: Rect, core: &mut AppCore, theme: &AppTheme, text_color: Color) {
    let [label_area, _, button_row, list_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    let label = Paragraph::new(core.word_panel.label()).style(
        Style::default()
            .fg(theme.label)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(label, label_area);

    let button_width = core.word_panel.button.label().chars().count() as u16 + 6;
    let [button_area, _] =
        Layout::horizontal([Constraint::Length(button_width), Constraint::Min(0)]).areas(button_row);
    button::render(frame, button_area, &mut core.word_panel.button, text_color);

    results::render(
        frame,
        list_area,
        &mut core.word_panel.results,
        "Synonyms",
        core.ui_state.focus == Focus::WordOfTheDay,
        theme,
    );
    core.ui_state.areas.word_list = Some(list_area);
}
