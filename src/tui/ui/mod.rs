//! Stateless UI rendering using ratatui.
//!
//! Everything drawn here is derived from [`App`] on each frame. The same
//! [`ViewLayout`] is used for drawing and for mapping mouse clicks back to
//! cells and move-list entries.

mod board;
mod moves;

use super::app::App;
use crate::games::tictactoe::{GameResult, GameStatus, Player, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;
pub use moves::{list_offset, render_moves};

/// Width of the drawn grid: three cells and two separators.
const BOARD_WIDTH: u16 = 38;
/// Height of the drawn grid: three rows and two separators.
const BOARD_HEIGHT: u16 = 11;
/// Width of the move list panel.
const MOVES_WIDTH: u16 = 26;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line ("Next player: X" etc).
    pub status: Rect,
    /// Area of each board cell, indexed by position.
    pub cells: [Rect; 9],
    /// Move list panel, including its border.
    pub moves: Rect,
    /// Key help line, if shown.
    pub help: Option<Rect>,
}

impl ViewLayout {
    /// Splits `area` into the regions of the game screen.
    pub fn new(area: Rect, show_help: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(BOARD_HEIGHT),
                Constraint::Length(if show_help { 3 } else { 0 }),
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(BOARD_WIDTH), Constraint::Length(MOVES_WIDTH)])
            .split(chunks[2]);

        Self {
            title: chunks[0],
            status: chunks[1],
            cells: cell_areas(center_rect(main[0], BOARD_WIDTH, BOARD_HEIGHT)),
            moves: main[1],
            help: show_help.then_some(chunks[3]),
        }
    }

    /// Board cell under the given terminal coordinates.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .position(|rect| contains(*rect, column, row))
            .and_then(Position::from_index)
    }

    /// Rows of the move list available for entries (inside the border).
    pub fn moves_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.moves)
    }
}

/// Draws the whole game screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ViewLayout::new(frame.area(), *app.config().show_help());

    let title = Paragraph::new(app.config().title().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let result = app.game().result();
    let status = Paragraph::new(status_text(&result, app.game().next_player()))
        .style(status_style(result.status()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    render_board(frame, &layout.cells, app);
    render_moves(frame, layout.moves, app);

    if let Some(help_area) = layout.help {
        let help = Paragraph::new(
            "1-9/Enter: Play | Tab: Moves | Home/End: Start/Latest | R: Restart | Q: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, help_area);
    }
}

/// Status line for a board evaluation.
pub fn status_text(result: &GameResult, next: Player) -> String {
    match result.status() {
        GameStatus::Draw => "Result: Draw".to_string(),
        GameStatus::Won(winner) => format!("Winner: {}", winner),
        GameStatus::InProgress => format!("Next player: {}", next),
    }
}

/// Move list label for history index `move_number`.
pub fn move_label(move_number: usize) -> String {
    if move_number == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", move_number)
    }
}

fn status_style(status: GameStatus) -> Style {
    match status {
        GameStatus::InProgress => Style::default().fg(Color::Yellow),
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    }
}

fn cell_areas(board_area: Rect) -> [Rect; 9] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(row_area);
        for (col, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row * 3 + col] = col_area;
        }
    }
    cells
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_labels() {
        assert_eq!(move_label(0), "Go to game start");
        assert_eq!(move_label(3), "Go to move #3");
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = ViewLayout::new(Rect::new(0, 0, 80, 30), true);
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!(a.width, 12);
            assert_eq!(a.height, 3);
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_cell_at_hits_every_cell() {
        let layout = ViewLayout::new(Rect::new(0, 0, 80, 30), false);
        for pos in Position::ALL {
            let rect = layout.cells[pos.to_index()];
            assert_eq!(layout.cell_at(rect.x + 1, rect.y + 1), Some(pos));
        }
        assert_eq!(layout.cell_at(0, 0), None);
    }
}
