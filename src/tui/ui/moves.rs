//! Move list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::move_label;
use crate::tui::app::{App, Focus};

/// First visible entry when `selected` must be visible in `visible` rows.
pub fn list_offset(selected: usize, visible: u16) -> usize {
    selected.saturating_sub(usize::from(visible.max(1)) - 1)
}

/// Renders one entry per history snapshot.
///
/// The displayed snapshot is drawn bold; the selection marker follows the
/// move-list cursor while the list has focus.
pub fn render_moves(f: &mut Frame, area: Rect, app: &App) {
    let current = *app.game().current_move();
    let focused = *app.focus() == Focus::Moves;

    let items: Vec<ListItem> = (0..app.game().history().len())
        .map(|n| {
            let style = if n == current {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(move_label(n)).style(style)
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let inner_height = area.height.saturating_sub(2);
    let selected = *app.selected_move();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Moves"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default()
        .with_offset(list_offset(selected, inner_height))
        .with_selected(focused.then_some(selected));
    f.render_stateful_widget(list, area, &mut state);
}
