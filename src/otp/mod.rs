//! Headless controller for the 6-digit OTP entry field.
//!
//! Everything in this module is framework-free: state comes in as events,
//! derived visual state comes out as a plain value (`OtpView`). The ratatui
//! front end in [`crate::ui`] is one possible consumer; tests drive the
//! controller directly.

mod controller;
mod intent;
mod reducer;
mod shake;
mod state;
mod view;

pub use controller::{OtpEvent, OtpFieldController, RejectedInput};
pub use intent::OtpIntent;
pub use reducer::OtpReducer;
pub use shake::{ShakeState, SHAKE_OFFSET, SHAKE_STEPS, SHAKE_STEP_MS};
pub use state::OtpFieldState;
pub use view::{derive_view, DigitBox, OtpView, VisualCategory, OTP_LENGTH};
