//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::games::tictactoe::{Player, Position, Square};
use crate::tui::app::{App, Focus};

/// Renders the nine cells and the grid lines between them.
///
/// Cells on the winning line get a highlighted background; the keyboard
/// cursor is shown in reverse video while the board has focus.
pub fn render_board(f: &mut Frame, cells: &[Rect; 9], app: &App) {
    let board = app.game().current_board();
    let result = app.game().result();
    let show_cursor = *app.focus() == Focus::Board;

    for pos in Position::ALL {
        let square = board.get(pos);
        let (symbol, base_style) = match square {
            Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
            Square::Occupied(Player::X) => {
                ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            }
            Square::Occupied(Player::O) => {
                ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            }
        };

        let mut style = base_style;
        if result.is_winning_cell(pos) {
            style = style.bg(Color::Green).fg(Color::Black);
        }
        if show_cursor && pos == *app.cursor() {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(" ".repeat(12), style)),
            Line::from(Span::styled(format!("{:^12}", symbol), style)),
            Line::from(Span::styled(" ".repeat(12), style)),
        ])
        .alignment(Alignment::Center);
        f.render_widget(paragraph, cells[pos.to_index()]);
    }

    render_grid(f, cells);
}

fn render_grid(f: &mut Frame, cells: &[Rect; 9]) {
    let style = Style::default().fg(Color::DarkGray);
    let left = cells[0].x;
    let width = cells[2].right().saturating_sub(left);

    for row in 0..2 {
        let y = cells[row * 3].bottom();
        let area = Rect::new(left, y, width, 1);
        f.render_widget(Paragraph::new("─".repeat(width as usize)).style(style), area);
    }

    for col in 0..2 {
        let x = cells[col].right();
        let top = cells[col].y;
        let height = cells[6 + col].bottom().saturating_sub(top);
        let area = Rect::new(x, top, 1, height);
        let lines: Vec<Line> = (top..top + height)
            .map(|y| {
                let on_separator = (0..2).any(|r| cells[r * 3].bottom() == y);
                Line::from(if on_separator { "┼" } else { "│" })
            })
            .collect();
        f.render_widget(Paragraph::new(lines).style(style), area);
    }
}
