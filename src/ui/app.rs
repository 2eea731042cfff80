use crate::calculator::{Button, CalculatorReducer, CalculatorState, Chaining};
use crate::mvi::Reducer;
use crate::ui::keypad::{Direction, KeypadCursor};
use crate::ui::layout::{button_at, keypad_rect};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Calculator state (MVI pattern).
    calculator: CalculatorState,
    cursor: KeypadCursor,
    /// Last pressed button and when it was pressed, for the highlight.
    flash: Option<(Button, Instant)>,
    flash_duration: Duration,
}

impl App {
    pub fn new(chaining: Chaining, flash_duration: Duration) -> Self {
        Self {
            should_quit: false,
            size: None,
            calculator: CalculatorState::new(chaining),
            cursor: KeypadCursor::default(),
            flash: None,
            flash_duration,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn calculator(&self) -> &CalculatorState {
        &self.calculator
    }

    pub fn focused(&self) -> Button {
        self.cursor.button()
    }

    pub fn flashing(&self) -> Option<Button> {
        self.flash.map(|(button, _)| button)
    }

    /// Run one button press through the reducer.
    pub fn press(&mut self, button: Button) {
        let had_error = self.calculator.has_error();
        dispatch_mvi!(self, calculator, CalculatorReducer, button);
        self.flash = Some((button, Instant::now()));

        tracing::debug!(
            button = button.label(),
            display = %self.calculator.display,
            accumulator = self.calculator.accumulator,
            "button pressed"
        );
        if let (false, Some(err)) = (had_error, self.calculator.error) {
            tracing::warn!(button = button.label(), "evaluation failed: {}", err);
        }
    }

    pub fn press_focused(&mut self) {
        self.press(self.cursor.button());
    }

    pub fn move_focus(&mut self, direction: Direction) {
        self.cursor = self.cursor.moved(direction);
    }

    /// Press whatever button is drawn at screen cell `(column, row)`.
    /// Returns false when the click missed the keypad.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        let Some((cols, rows)) = self.size else {
            return false;
        };
        let keypad = keypad_rect(Rect::new(0, 0, cols, rows));
        let Some(button) = button_at(keypad, column, row) else {
            return false;
        };
        if let Some(cursor) = KeypadCursor::focus(button) {
            self.cursor = cursor;
        }
        self.press(button);
        true
    }

    pub fn on_tick(&mut self) {
        if let Some((_, at)) = self.flash {
            if at.elapsed() >= self.flash_duration {
                self.flash = None;
            }
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }
}
