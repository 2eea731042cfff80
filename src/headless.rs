//! Replaying a key sequence without a terminal UI.

use crate::calculator::{parse_keys, CalculatorReducer, CalculatorState, Chaining, KeyParseError};
use crate::mvi::Reducer;

/// Parse `keys` and press them on a fresh calculator.
pub fn evaluate(keys: &str, chaining: Chaining) -> Result<CalculatorState, KeyParseError> {
    let buttons = parse_keys(keys)?;
    tracing::debug!(presses = buttons.len(), ?chaining, "Replaying key sequence");

    let state = CalculatorReducer::replay(CalculatorState::new(chaining), buttons);
    if let Some(err) = state.error {
        tracing::warn!("Key sequence ended in an error: {}", err);
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_a_sequence() {
        let state = evaluate("12 X 3 =", Chaining::Accumulate).unwrap();
        assert_eq!(state.display, "36");
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(evaluate("1 ^ 2", Chaining::Accumulate).is_err());
    }
}
