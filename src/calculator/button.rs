use crate::calculator::operation::Operation;
use crate::mvi::Intent;

/// A keypad button. Pressing one is the calculator's only intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Plus,
    Minus,
    Multiply,
    Divide,
    Equals,
    Clear,
    SignToggle,
    Percent,
    Dot,
}

impl Intent for Button {}

/// Visual grouping of buttons; only the renderer cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    /// Digits and the decimal point.
    Digit,
    /// `AC`, `+/-`, `%`.
    Function,
    /// Binary operators and equals.
    Operator,
}

const DIGITS: [Button; 10] = [
    Button::Zero,
    Button::One,
    Button::Two,
    Button::Three,
    Button::Four,
    Button::Five,
    Button::Six,
    Button::Seven,
    Button::Eight,
    Button::Nine,
];

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Zero => "0",
            Button::One => "1",
            Button::Two => "2",
            Button::Three => "3",
            Button::Four => "4",
            Button::Five => "5",
            Button::Six => "6",
            Button::Seven => "7",
            Button::Eight => "8",
            Button::Nine => "9",
            Button::Plus => "+",
            Button::Minus => "-",
            Button::Multiply => "X",
            Button::Divide => "/",
            Button::Equals => "=",
            Button::Clear => "AC",
            Button::SignToggle => "+/-",
            Button::Percent => "%",
            Button::Dot => ".",
        }
    }

    pub fn role(self) -> ButtonRole {
        match self {
            Button::Clear | Button::SignToggle | Button::Percent => ButtonRole::Function,
            Button::Plus | Button::Minus | Button::Multiply | Button::Divide | Button::Equals => {
                ButtonRole::Operator
            }
            _ => ButtonRole::Digit,
        }
    }

    /// The button for digit `value`, if `value` is 0..=9.
    pub fn digit(value: u32) -> Option<Self> {
        DIGITS.get(value as usize).copied()
    }

    pub fn is_digit(self) -> bool {
        DIGITS.contains(&self)
    }

    /// The binary operation this button selects, or `None` for non-operators.
    pub fn operation(self) -> Option<Operation> {
        match self {
            Button::Plus => Some(Operation::Plus),
            Button::Minus => Some(Operation::Minus),
            Button::Multiply => Some(Operation::Multiply),
            Button::Divide => Some(Operation::Divide),
            _ => None,
        }
    }

    /// Single-character key binding, shared by the keyboard handler and
    /// `--keys` parsing.
    pub fn from_char(ch: char) -> Option<Self> {
        if let Some(value) = ch.to_digit(10) {
            return Self::digit(value);
        }
        match ch {
            '+' => Some(Button::Plus),
            '-' => Some(Button::Minus),
            '*' | 'x' | 'X' => Some(Button::Multiply),
            '/' => Some(Button::Divide),
            '=' => Some(Button::Equals),
            'c' | 'C' => Some(Button::Clear),
            'n' => Some(Button::SignToggle),
            '%' => Some(Button::Percent),
            '.' | ',' => Some(Button::Dot),
            _ => None,
        }
    }

    /// Number of keypad columns the button occupies.
    pub fn span(self) -> u16 {
        if self == Button::Zero {
            2
        } else {
            1
        }
    }
}

/// Row-major keypad catalog handed to the renderer.
pub const KEYPAD: [&[Button]; 5] = [
    &[Button::Clear, Button::SignToggle, Button::Percent, Button::Divide],
    &[Button::Seven, Button::Eight, Button::Nine, Button::Multiply],
    &[Button::Four, Button::Five, Button::Six, Button::Minus],
    &[Button::One, Button::Two, Button::Three, Button::Plus],
    &[Button::Zero, Button::Dot, Button::Equals],
];

/// Columns in a full keypad row.
pub const KEYPAD_COLUMNS: u16 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_fills_the_grid() {
        for row in KEYPAD {
            let width: u16 = row.iter().map(|b| b.span()).sum();
            assert_eq!(width, KEYPAD_COLUMNS);
        }
    }

    #[test]
    fn digits_map_to_their_labels() {
        for value in 0..10 {
            let button = Button::digit(value).unwrap();
            assert!(button.is_digit());
            assert_eq!(button.label(), value.to_string());
        }
        assert_eq!(Button::digit(10), None);
    }

    #[test]
    fn roles_follow_keypad_colors() {
        assert_eq!(Button::Dot.role(), ButtonRole::Digit);
        assert_eq!(Button::Percent.role(), ButtonRole::Function);
        assert_eq!(Button::Equals.role(), ButtonRole::Operator);
        assert_eq!(Button::Divide.role(), ButtonRole::Operator);
    }

    #[test]
    fn multiply_has_several_bindings() {
        for ch in ['*', 'x', 'X'] {
            assert_eq!(Button::from_char(ch), Some(Button::Multiply));
        }
        assert_eq!(Button::from_char('?'), None);
    }

    #[test]
    fn only_binary_operators_carry_an_operation() {
        assert_eq!(Button::Minus.operation(), Some(Operation::Minus));
        assert_eq!(Button::Equals.operation(), None);
        assert_eq!(Button::Seven.operation(), None);
    }
}
