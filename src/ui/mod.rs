//! Terminal front end: owns one calculator session, turns key presses and
//! mouse clicks into buttons and redraws after every event.

pub mod app;
pub mod display;
pub mod events;
pub mod footer;
pub mod input;
pub mod keypad;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
