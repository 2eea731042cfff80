//! Calculator core: keypad buttons, pending operations and the reducer that
//! folds button presses into a display value.

mod button;
mod error;
mod keys;
mod operation;
mod reducer;
mod state;

pub use button::{Button, ButtonRole, KEYPAD, KEYPAD_COLUMNS};
pub use error::{CalcError, KeyParseError};
pub use keys::parse_keys;
pub use operation::Operation;
pub use reducer::CalculatorReducer;
pub use state::{CalculatorState, Chaining, DEFAULT_DISPLAY};
