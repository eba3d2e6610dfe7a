//! A six-digit one-time-password entry field.
//!
//! The field itself is the headless state machine in [`otp`]: candidate
//! input validation, focus-driven active-box selection, error-shake
//! timeline, and completion notification, all framework-free. [`ui`] is a
//! ratatui front end for it, and the crate's binary is a small demo screen
//! embedding the widget.

pub mod logging;
pub mod mvi;
pub mod otp;
pub mod ui;
