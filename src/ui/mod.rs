//! Terminal front end: the ratatui rendering of the OTP field plus the demo
//! application host (event loop, key routing, layout).

pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod widget;
