//! Marker trait for inputs fed to a reducer.

/// An input event a reducer knows how to apply.
///
/// Intents are plain values: a button press, a clear request. They carry no
/// behaviour of their own.
pub trait Intent: Copy + Send + 'static {}
