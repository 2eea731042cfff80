//! Reducer turning button presses into calculator state.

use crate::calculator::button::Button;
use crate::calculator::error::CalcError;
use crate::calculator::operation::Operation;
use crate::calculator::state::{CalculatorState, Chaining, DEFAULT_DISPLAY};
use crate::mvi::Reducer;

/// Reducer for the calculator keypad.
///
/// Pure: arithmetic errors end up in the returned state, never in a panic.
pub struct CalculatorReducer;

impl Reducer for CalculatorReducer {
    type State = CalculatorState;
    type Intent = Button;

    fn reduce(state: Self::State, button: Self::Intent) -> Self::State {
        if let Some(op) = button.operation() {
            return select_operation(state, op);
        }
        match button {
            Button::Equals => evaluate(state),
            Button::Clear => CalculatorState::new(state.chaining),
            // Accepted but inert.
            Button::SignToggle | Button::Percent | Button::Dot => state,
            digit => enter_digit(state, digit),
        }
    }
}

fn select_operation(mut state: CalculatorState, op: Operation) -> CalculatorState {
    let operand = state.operand();
    match state.chaining {
        Chaining::Accumulate => {
            state.accumulator = state.accumulator.wrapping_add(operand);
        }
        Chaining::RunningTotal => match state.pending.apply(state.accumulator, operand) {
            Ok(Some(total)) => state.accumulator = total,
            Ok(None) => state.accumulator = operand,
            Err(err) => return fail(state, err),
        },
    }
    state.pending = op;
    state.error = None;
    state.display = DEFAULT_DISPLAY.to_string();
    state
}

fn evaluate(mut state: CalculatorState) -> CalculatorState {
    match state.pending.apply(state.accumulator, state.operand()) {
        Ok(Some(result)) => {
            state.display = result.to_string();
            state.error = None;
            if state.chaining == Chaining::RunningTotal {
                state.accumulator = 0;
                state.pending = Operation::None;
            }
            state
        }
        Ok(None) => state,
        Err(err) => fail(state, err),
    }
}

fn enter_digit(mut state: CalculatorState, digit: Button) -> CalculatorState {
    if state.has_error() || state.display == DEFAULT_DISPLAY {
        state.display = digit.label().to_string();
        state.error = None;
    } else {
        state.display.push_str(digit.label());
    }
    state
}

fn fail(mut state: CalculatorState, err: CalcError) -> CalculatorState {
    state.display = err.display_token().to_string();
    state.error = Some(err);
    state
}
