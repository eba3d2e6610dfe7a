//! Intent marker for MVI state machines.

/// Marker for intent types: user actions, host notifications, timer ticks.
///
/// Intents are the only way state changes; they carry data into the reducer
/// and nothing else.
pub trait Intent: Send + 'static {}
