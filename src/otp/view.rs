//! Pure projection from field state to per-box visual state.

use crate::otp::state::OtpFieldState;

/// Number of digit boxes.
pub const OTP_LENGTH: usize = 6;

/// Border/fill treatment for one box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualCategory {
    Default,
    Focused,
    Error,
}

/// One of the six digit slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigitBox {
    /// Character at this index of the value, if entered.
    pub digit: Option<char>,
    /// Whether this is the slot indicated as ready for the next character.
    pub active: bool,
    pub category: VisualCategory,
}

/// Everything the rendering layer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpView {
    pub boxes: [DigitBox; OTP_LENGTH],
    /// Horizontal displacement from the shake timeline, in layout units.
    pub shake_offset: i16,
    /// Whether the error treatment applies (mirrors the external payload).
    pub error: bool,
}

pub fn derive_view(state: &OtpFieldState) -> OtpView {
    let chars: Vec<char> = state.value.chars().collect();
    let boxes = std::array::from_fn(|index| {
        let active = is_active(chars.len(), index, state.focused);
        DigitBox {
            digit: chars.get(index).copied(),
            active,
            category: category(active, state.error),
        }
    });
    OtpView {
        boxes,
        shake_offset: state.shake.offset(),
        error: state.error,
    }
}

/// Which slot would receive the next character.
///
/// Below full length the next empty slot is indicated, but only while the
/// field actually holds focus. Once full, the last slot is indicated
/// whether or not the field is focused.
fn is_active(len: usize, index: usize, focused: bool) -> bool {
    if len < OTP_LENGTH {
        index == len && focused
    } else {
        index == OTP_LENGTH - 1
    }
}

/// Error treatment wins over focus; otherwise the active slot is highlighted.
fn category(active: bool, error: bool) -> VisualCategory {
    if error {
        VisualCategory::Error
    } else if active {
        VisualCategory::Focused
    } else {
        VisualCategory::Default
    }
}
