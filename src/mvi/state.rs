//! State marker for MVI state machines.

/// Marker for state types.
///
/// A state value is a complete, self-contained snapshot: cloneable so the
/// reducer can produce a successor without aliasing, comparable so hosts can
/// skip redundant redraws, and `Default` for the pre-first-event state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
