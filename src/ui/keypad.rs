use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::calculator::{Button, ButtonRole, KEYPAD};
use crate::ui::layout::button_rects;
use crate::ui::theme::{
    BACKGROUND, DIGIT_BG, DISPLAY_TEXT, FLASH_BG, FOCUS_TEXT, FUNCTION_BG, OPERATOR_BG,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Keyboard focus on the keypad grid.
///
/// `column` is a grid column, not an index into the row, so moving vertically
/// through the double-width zero returns to the column it came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub struct KeypadCursor {
    row: usize,
    column: u16,
}

impl KeypadCursor {
    pub fn button(&self) -> Button {
        let row = KEYPAD[self.row];
        let mut start = 0;
        for &button in row {
            if self.column < start + button.span() {
                return button;
            }
            start += button.span();
        }
        row[row.len() - 1]
    }

    pub fn moved(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                row: (self.row + KEYPAD.len() - 1) % KEYPAD.len(),
                ..self
            },
            Direction::Down => Self {
                row: (self.row + 1) % KEYPAD.len(),
                ..self
            },
            Direction::Left | Direction::Right => {
                let row = KEYPAD[self.row];
                let current = row
                    .iter()
                    .position(|&b| b == self.button())
                    .unwrap_or(0);
                let next = if direction == Direction::Left {
                    (current + row.len() - 1) % row.len()
                } else {
                    (current + 1) % row.len()
                };
                let column = row[..next].iter().map(|b| b.span()).sum();
                Self { column, ..self }
            }
        }
    }

    /// Focus `button`, wherever it sits on the keypad.
    pub fn focus(button: Button) -> Option<Self> {
        KEYPAD.iter().enumerate().find_map(|(row, buttons)| {
            let index = buttons.iter().position(|&b| b == button)?;
            let column = buttons[..index].iter().map(|b| b.span()).sum();
            Some(Self { row, column })
        })
    }
}

/// Keypad grid widget.
pub struct Keypad {
    focused: Button,
    flashing: Option<Button>,
}

impl Keypad {
    pub fn new(focused: Button, flashing: Option<Button>) -> Self {
        Self { focused, flashing }
    }

    fn style_for(&self, button: Button) -> Style {
        let (bg, fg) = match button.role() {
            ButtonRole::Digit => (DIGIT_BG, DISPLAY_TEXT),
            ButtonRole::Function => (FUNCTION_BG, Color::Black),
            ButtonRole::Operator => (OPERATOR_BG, DISPLAY_TEXT),
        };
        let mut style = Style::default().bg(bg).fg(fg);
        if self.flashing == Some(button) {
            style = style.bg(FLASH_BG).fg(Color::Black);
        }
        if self.focused == button {
            style = style
                .fg(FOCUS_TEXT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        style
    }
}

impl Widget for Keypad {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(BACKGROUND))
            .render(area, buf);

        for (button, rect) in button_rects(area) {
            if rect.is_empty() {
                continue;
            }
            let style = self.style_for(button);
            Block::default().style(style).render(rect, buf);
            let label = Rect {
                y: rect.y + rect.height / 2,
                height: 1,
                ..rect
            };
            Paragraph::new(button.label())
                .style(style)
                .alignment(Alignment::Center)
                .render(label, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_focus_is_clear() {
        assert_eq!(KeypadCursor::default().button(), Button::Clear);
    }

    #[test]
    fn horizontal_moves_wrap_within_row() {
        let cursor = KeypadCursor::default().moved(Direction::Left);
        assert_eq!(cursor.button(), Button::Divide);
        assert_eq!(cursor.moved(Direction::Right).button(), Button::Clear);
    }

    #[test]
    fn vertical_moves_keep_column_through_zero() {
        let eight = KeypadCursor::focus(Button::Eight).unwrap();
        let zero = eight
            .moved(Direction::Down)
            .moved(Direction::Down)
            .moved(Direction::Down);
        assert_eq!(zero.button(), Button::Zero);
        assert_eq!(zero.moved(Direction::Up).button(), Button::Two);
        assert_eq!(zero.moved(Direction::Down).button(), Button::SignToggle);
    }

    #[test]
    fn right_from_zero_reaches_dot() {
        let zero = KeypadCursor::focus(Button::Zero).unwrap();
        assert_eq!(zero.moved(Direction::Right).button(), Button::Dot);
        assert_eq!(
            zero.moved(Direction::Right).moved(Direction::Right).button(),
            Button::Equals
        );
    }
}
