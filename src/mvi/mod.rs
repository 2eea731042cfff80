//! Model-View-Intent primitives shared by the calculator core and the UI.
//!
//! ```text
//! Button ──→ Reducer ──→ CalculatorState ──→ Renderer
//!    ↑                                         │
//!    └─────────────── key / click ─────────────┘
//! ```
//!
//! - **State**: everything the renderer needs to draw one frame
//! - **Intent**: a single input (for the calculator, one button press)
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
