//! Filled, single-label button drawn in the color its hover state selects.

use crate::theme::hex_to_color;
use crate::widgets::ThemedButton;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Draw `button` over `area` and remember `area` for hit-testing
pub(super) fn render(frame: &mut Frame, area: Rect, button: &mut ThemedButton, text_color: Color) {
    button.set_area(area);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let fill = hex_to_color(button.current_color()).unwrap_or(Color::Blue);
    let style = Style::default()
        .bg(fill)
        .fg(text_color)
        .add_modifier(Modifier::BOLD);

    frame.render_widget(Block::default().style(style), area);

    let label_row = Rect::new(area.x, area.y + (area.height - 1) / 2, area.width, 1);
    frame.render_widget(
        Paragraph::new(button.label().to_string())
            .style(style)
            .alignment(Alignment::Center),
        label_row,
    );
}
