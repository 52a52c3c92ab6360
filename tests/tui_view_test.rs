//! Tests for the terminal view: rendering and input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use tictactoe_replay::{
    App, Control, Focus, GameStatus, Player, Position, Square, TuiConfig, ViewLayout, draw,
};

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 30,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn press_digits(app: &mut App, digits: &str) {
    for c in digits.chars() {
        assert_eq!(app.handle_key(key(KeyCode::Char(c))), Control::Continue);
    }
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(usize::from(buffer.area.width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_initial_screen() {
    let app = App::new(TuiConfig::default());
    let screen = render(&app);
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to game start"));
    assert!(!screen.contains("Go to move #1"));
}

#[test]
fn test_first_play_updates_status_and_moves() {
    let mut app = App::new(TuiConfig::default());
    press_digits(&mut app, "1");

    assert_eq!(app.status_line(), "Next player: O");
    assert_eq!(
        app.game().current_board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
    let screen = render(&app);
    assert!(screen.contains("Next player: O"));
    assert!(screen.contains("Go to move #1"));
}

#[test]
fn test_win_status() {
    let mut app = App::new(TuiConfig::default());
    press_digits(&mut app, "14253");
    assert_eq!(app.status_line(), "Winner: X");
    assert!(render(&app).contains("Winner: X"));
}

#[test]
fn test_draw_status() {
    let mut app = App::new(TuiConfig::default());
    press_digits(&mut app, "123546879");
    assert_eq!(app.game().result().status(), GameStatus::Draw);
    assert!(render(&app).contains("Result: Draw"));
}

#[test]
fn test_invalid_play_is_silent() {
    let mut app = App::new(TuiConfig::default());
    press_digits(&mut app, "55");
    assert_eq!(app.game().history().len(), 2);
    assert_eq!(app.status_line(), "Next player: O");
}

#[test]
fn test_keyboard_cursor_play() {
    let mut app = App::new(TuiConfig::default());
    assert_eq!(*app.cursor(), Position::Center);
    app.handle_key(key(KeyCode::Up));
    app.handle_key(key(KeyCode::Left));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(
        app.game().current_board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_move_list_navigation() {
    let mut app = App::new(TuiConfig::default());
    press_digits(&mut app, "159");
    assert_eq!(*app.selected_move(), 3);

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(*app.focus(), Focus::Moves);
    app.handle_key(key(KeyCode::Up));
    app.handle_key(key(KeyCode::Up));
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(*app.game().current_move(), 1);
    assert_eq!(app.game().history().len(), 4);
    assert_eq!(app.status_line(), "Next player: O");
}

#[test]
fn test_home_and_end() {
    let mut app = App::new(TuiConfig::default());
    press_digits(&mut app, "12");
    app.handle_key(key(KeyCode::Home));
    assert_eq!(*app.game().current_move(), 0);
    app.handle_key(key(KeyCode::End));
    assert_eq!(*app.game().current_move(), 2);
}

#[test]
fn test_branching_from_keyboard() {
    let mut app = App::new(TuiConfig::default());
    press_digits(&mut app, "159");
    app.handle_key(key(KeyCode::Home));
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Tab));
    press_digits(&mut app, "3");

    assert_eq!(app.game().history().len(), 3);
    let screen = render(&app);
    assert!(screen.contains("Go to move #2"));
    assert!(!screen.contains("Go to move #3"));
}

#[test]
fn test_restart_and_quit() {
    let mut app = App::new(TuiConfig::default());
    press_digits(&mut app, "12");
    app.handle_key(key(KeyCode::Char('r')));
    assert_eq!(app.game().history().len(), 1);
    assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Control::Quit);
    assert_eq!(app.handle_key(key(KeyCode::Esc)), Control::Quit);
}

#[test]
fn test_mouse_click_plays_cell() {
    let mut app = App::new(TuiConfig::default());
    let layout = ViewLayout::new(AREA, *app.config().show_help());
    let cell = layout.cells[Position::BottomRight.to_index()];

    app.handle_mouse(click(cell.x + 2, cell.y + 1), AREA);

    assert_eq!(
        app.game().current_board().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
    assert_eq!(*app.cursor(), Position::BottomRight);
}

#[test]
fn test_mouse_click_jumps_in_move_list() {
    let mut app = App::new(TuiConfig::default());
    press_digits(&mut app, "12");
    let inner = ViewLayout::new(AREA, true).moves_inner();

    app.handle_mouse(click(inner.x + 1, inner.y), AREA);
    assert_eq!(*app.game().current_move(), 0);

    app.handle_mouse(click(inner.x + 1, inner.y + 1), AREA);
    assert_eq!(*app.game().current_move(), 1);

    // Below the last entry: ignored.
    app.handle_mouse(click(inner.x + 1, inner.y + 5), AREA);
    assert_eq!(*app.game().current_move(), 1);
}

#[test]
fn test_mouse_release_ignored() {
    let mut app = App::new(TuiConfig::default());
    let cell = ViewLayout::new(AREA, true).cells[0];
    let mut event = click(cell.x + 1, cell.y + 1);
    event.kind = MouseEventKind::Up(MouseButton::Left);
    app.handle_mouse(event, AREA);
    assert_eq!(app.game().history().len(), 1);
}

#[test]
fn test_winning_cells_highlighted() {
    let mut app = App::new(TuiConfig::default());
    press_digits(&mut app, "14253");

    let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
    terminal.draw(|f| draw(f, &app)).unwrap();
    let buffer = terminal.backend().buffer();
    let layout = ViewLayout::new(AREA, true);

    let bg_at = |pos: Position| {
        let rect = layout.cells[pos.to_index()];
        buffer[(rect.x + 6, rect.y + 1)].bg
    };
    assert_eq!(bg_at(Position::TopLeft), bg_at(Position::TopRight));
    assert_ne!(bg_at(Position::TopLeft), bg_at(Position::MiddleLeft));
}
