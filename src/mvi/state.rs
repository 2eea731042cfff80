//! Marker trait for reducer-owned state.

/// State owned by a reducer.
///
/// `Default` is the session's initial state and is also what the UI swaps in
/// while a transition is in flight; `PartialEq` lets callers skip redraws.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
