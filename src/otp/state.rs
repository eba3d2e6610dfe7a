use crate::otp::shake::ShakeState;
use crate::mvi::UiState;

/// Complete state of one OTP field instance.
///
/// `value` and `error` are snapshots of externally-owned data, refreshed
/// whenever the owner reports a change; the controller never mutates the
/// value on its own. `focused` and `shake` are owned here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OtpFieldState {
    /// Last observed external value: 0–6 decimal digit characters.
    pub value: String,
    /// Whether the field currently holds input focus.
    pub focused: bool,
    /// Whether the external error payload is present. The payload itself
    /// never enters the controller; only its presence matters here.
    pub error: bool,
    /// Error-shake timeline position.
    pub shake: ShakeState,
}

impl UiState for OtpFieldState {}
