//! Model-View-Intent primitives.
//!
//! Unidirectional data flow: intents go through a reducer, the reducer
//! produces the next state, views are derived from state alone.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! The traits are markers plus one pure function; they exist so every state
//! machine in the crate has the same shape and the same testing story.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
