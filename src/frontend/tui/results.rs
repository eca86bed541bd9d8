//! Bordered, selectable result list shared by both panels.

use crate::data::ResultList;
use crate::theme::AppTheme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    results: &mut ResultList,
    title: &str,
    focused: bool,
    theme: &AppTheme,
) {
    let border = if focused {
        theme.window_border_focused
    } else {
        theme.window_border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title.to_string());

    let width = block.inner(area).width as usize;
    let mut heights = Vec::with_capacity(results.len());
    let items: Vec<ListItem> = results
        .lines()
        .iter()
        .map(|line| {
            let wrapped: Vec<Line> = wrap(line, width).into_iter().map(Line::from).collect();
            heights.push(wrapped.len() as u16);
            ListItem::new(Text::from(wrapped))
        })
        .collect();
    results.set_item_heights(heights);

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(theme.text_primary))
        .highlight_style(
            Style::default()
                .fg(theme.text_selected)
                .bg(theme.background_selected)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(list, area, results.list_state_mut());
}

/// Greedy word wrap on whitespace. Words wider than `width` stay whole.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let current_len = current.chars().count();
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current_len + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
