use thiserror::Error;

/// Arithmetic failures surfaced through the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
}

impl CalcError {
    /// Token shown in place of a numeric result.
    pub fn display_token(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "Error",
        }
    }
}

/// A `--keys` sequence contained a character with no button binding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown key '{ch}' at offset {offset}")]
pub struct KeyParseError {
    pub ch: char,
    pub offset: usize,
}
