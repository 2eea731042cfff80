use serde::{Deserialize, Serialize};

use crate::calculator::error::CalcError;
use crate::calculator::operation::Operation;
use crate::mvi::UiState;

/// Display value of a fresh or cleared calculator.
pub const DEFAULT_DISPLAY: &str = "0";

/// How an operator press treats an operation that is already pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Chaining {
    /// Add the operand into the accumulator and replace the pending operator.
    /// `2 + 3 X 4 =` evaluates `(2 + 3) X 4`, ignoring which operator came
    /// first.
    #[default]
    Accumulate,
    /// Resolve the pending operation before recording the new one, and
    /// consume the result on equals.
    #[value(alias = "running_total")]
    RunningTotal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    pub display: String,
    pub accumulator: i64,
    pub pending: Operation,
    /// Set when the last evaluation failed; `display` then holds the error token.
    pub error: Option<CalcError>,
    pub chaining: Chaining,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(Chaining::default())
    }
}

impl UiState for CalculatorState {}

impl CalculatorState {
    pub fn new(chaining: Chaining) -> Self {
        Self {
            display: DEFAULT_DISPLAY.to_string(),
            accumulator: 0,
            pending: Operation::None,
            error: None,
            chaining,
        }
    }

    /// Integer value of the display. Anything unparsable, including the
    /// error token, counts as zero.
    pub fn operand(&self) -> i64 {
        self.display.parse().unwrap_or(0)
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_shows_zero() {
        let state = CalculatorState::default();
        assert_eq!(state.display, "0");
        assert_eq!(state.accumulator, 0);
        assert_eq!(state.pending, Operation::None);
        assert!(!state.has_error());
        assert_eq!(state.chaining, Chaining::Accumulate);
    }

    #[test]
    fn unparsable_display_is_zero() {
        let mut state = CalculatorState::default();
        state.display = "Error".to_string();
        assert_eq!(state.operand(), 0);
        state.display = "-42".to_string();
        assert_eq!(state.operand(), -42);
        state.display = "99999999999999999999".to_string();
        assert_eq!(state.operand(), 0);
    }
}
