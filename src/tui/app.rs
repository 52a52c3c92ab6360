//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};
use super::ui::{ViewLayout, list_offset, status_text};
use crate::TuiConfig;
use crate::games::tictactoe::{GameState, MoveError, Position};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select a move-list entry.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// What the event loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running and redraw.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Holds the game and the view-only state around it. Every handler
/// mutates the game through [`GameState`] and the next frame is drawn
/// from its derived values.
#[derive(Debug, Getters)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    config: TuiConfig,
}

impl App {
    /// Creates a new application with an empty board.
    #[instrument(skip(config))]
    pub fn new(config: TuiConfig) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            config,
        }
    }

    /// Status line for the displayed snapshot.
    pub fn status_line(&self) -> String {
        status_text(&self.game.result(), self.game.next_player())
    }

    /// Plays at `pos`. Invalid plays are ignored.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) {
        let outcome = self.game.play(pos.to_index());
        let placed = outcome.is_ok();
        self.settle(outcome);

        let result = self.game.result();
        if placed && let Some(winner) = result.winner() {
            info!(
                %winner,
                cells = ?result.winning_cells(),
                board = %self.game.current_board().display(),
                "Game won"
            );
        }
    }

    /// Shows history entry `move_number`. Invalid jumps are ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) {
        let outcome = self.game.jump_to(move_number);
        self.settle(outcome);
    }

    /// Starts over with a fresh history.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameState::new();
        self.cursor = Position::Center;
        self.selected_move = 0;
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected_move = *self.game.current_move();
            }
            KeyCode::Home => self.jump_to(0),
            KeyCode::End => self.jump_to(self.game.last_move()),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
        Control::Continue
    }

    /// Handles a mouse event; `area` is the full frame the last draw used.
    #[instrument(skip(self, area), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = ViewLayout::new(area, *self.config.show_help());
        if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.play(pos);
        } else if let Some(move_number) = self.move_at(&layout, mouse.column, mouse.row) {
            self.focus = Focus::Moves;
            self.jump_to(move_number);
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.selected_move = self.selected_move.saturating_sub(1),
            KeyCode::Down => {
                self.selected_move = (self.selected_move + 1).min(self.game.last_move());
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to(self.selected_move),
            _ => {}
        }
    }

    fn move_at(&self, layout: &ViewLayout, column: u16, row: u16) -> Option<usize> {
        let inner = layout.moves_inner();
        if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
            return None;
        }
        let offset = list_offset(self.selected_move, inner.height);
        let move_number = offset + usize::from(row - inner.y);
        (move_number <= self.game.last_move()).then_some(move_number)
    }

    /// Applies the outcome of a game operation to the view state.
    fn settle(&mut self, outcome: Result<(), MoveError>) {
        match outcome {
            Ok(()) => self.selected_move = *self.game.current_move(),
            Err(e) => debug!(error = %e, "Ignoring rejected input"),
        }
    }
}
