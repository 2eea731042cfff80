use crate::calculator::Button;
use crate::ui::app::App;
use crate::ui::keypad::Direction;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Press(Button),
    MoveFocus(Direction),
    PressFocused,
    Quit,
}

pub fn key_command(key: KeyEvent) -> Option<KeyCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'c') {
        return Some(KeyCommand::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(KeyCommand::Quit),
        KeyCode::Char(' ') => Some(KeyCommand::PressFocused),
        KeyCode::Char(ch) => Button::from_char(ch).map(KeyCommand::Press),
        KeyCode::Enter => Some(KeyCommand::Press(Button::Equals)),
        KeyCode::Esc | KeyCode::Delete => Some(KeyCommand::Press(Button::Clear)),
        KeyCode::Up => Some(KeyCommand::MoveFocus(Direction::Up)),
        KeyCode::Down => Some(KeyCommand::MoveFocus(Direction::Down)),
        KeyCode::Left => Some(KeyCommand::MoveFocus(Direction::Left)),
        KeyCode::Right => Some(KeyCommand::MoveFocus(Direction::Right)),
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key_command(key) {
        Some(KeyCommand::Press(button)) => app.press(button),
        Some(KeyCommand::MoveFocus(direction)) => app.move_focus(direction),
        Some(KeyCommand::PressFocused) => app.press_focused(),
        Some(KeyCommand::Quit) => app.request_quit(),
        None => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.click(mouse.column, mouse.row);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn characters_map_to_buttons() {
        assert_eq!(
            key_command(press(KeyCode::Char('7'))),
            Some(KeyCommand::Press(Button::Seven))
        );
        assert_eq!(
            key_command(press(KeyCode::Char('*'))),
            Some(KeyCommand::Press(Button::Multiply))
        );
        assert_eq!(key_command(press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn enter_and_escape_are_equals_and_clear() {
        assert_eq!(
            key_command(press(KeyCode::Enter)),
            Some(KeyCommand::Press(Button::Equals))
        );
        assert_eq!(
            key_command(press(KeyCode::Esc)),
            Some(KeyCommand::Press(Button::Clear))
        );
    }

    #[test]
    fn ctrl_c_quits_instead_of_clearing() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_command(key), Some(KeyCommand::Quit));
        assert_eq!(
            key_command(press(KeyCode::Char('c'))),
            Some(KeyCommand::Press(Button::Clear))
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let key = KeyEvent::new_with_kind(
            KeyCode::Char('1'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(key_command(key), None);
    }
}
