//! Reducer trait for MVI state machines.

use super::intent::Intent;
use super::state::UiState;

/// The single place where state transitions happen.
///
/// `reduce` must be pure: same state and intent in, same state out, no side
/// effects. Anything observable to the outside (notifications, timers) is
/// the caller's job, keyed off the state change.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
