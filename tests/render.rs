use calcpad::calculator::{Button, Chaining};
use calcpad::ui::app::App;
use calcpad::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::time::Duration;

const WIDTH: u16 = 60;
const HEIGHT: u16 = 27;

fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

fn screen_text(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| row_text(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn app_after(buttons: &[Button]) -> App {
    let mut app = App::new(Chaining::Accumulate, Duration::from_millis(150));
    app.on_resize(WIDTH, HEIGHT);
    for &button in buttons {
        app.press(button);
    }
    app
}

#[test]
fn fresh_app_shows_zero_right_aligned() {
    let buffer = render(&app_after(&[]));
    let value_row = row_text(&buffer, 2);
    assert!(value_row.trim_end_matches('│').trim_end().ends_with('0'));
}

#[test]
fn pending_operation_is_shown_above_value() {
    let buffer = render(&app_after(&[Button::Five, Button::Plus, Button::Three]));
    assert!(row_text(&buffer, 1).contains("5 +"));
    assert!(row_text(&buffer, 2).contains('3'));
}

#[test]
fn result_and_error_render() {
    let buffer = render(&app_after(&[
        Button::Six,
        Button::Multiply,
        Button::Seven,
        Button::Equals,
    ]));
    assert!(row_text(&buffer, 2).contains("42"));

    let buffer = render(&app_after(&[Button::One, Button::Divide, Button::Zero, Button::Equals]));
    assert!(row_text(&buffer, 2).contains("Error"));
}

#[test]
fn keypad_labels_are_drawn() {
    let text = screen_text(&render(&app_after(&[])));
    for label in ["AC", "+/-", "%", "/", "X", "7", "0", ".", "="] {
        assert!(text.contains(label), "missing label {label}");
    }
}

#[test]
fn footer_shows_version() {
    let buffer = render(&app_after(&[]));
    let footer = row_text(&buffer, HEIGHT - 2);
    assert!(footer.contains(env!("CARGO_PKG_VERSION")));
    assert!(footer.contains("accumulate"));
}

#[test]
fn footer_names_running_total_mode() {
    let mut app = App::new(Chaining::RunningTotal, Duration::from_millis(150));
    app.on_resize(WIDTH, HEIGHT);
    let buffer = render(&app);
    assert!(row_text(&buffer, HEIGHT - 2).contains("running total"));
}
