use crate::mvi::Intent;

/// External events driving the OTP field state machine.
#[derive(Debug, Clone)]
pub enum OtpIntent {
    /// The externally-owned value changed (accepted proposal or reset).
    ValueObserved(String),
    /// The host granted or revoked input focus.
    FocusChanged(bool),
    /// The external error payload appeared (`true`) or was cleared (`false`).
    ErrorChanged(bool),
    /// One timeline step elapsed; advances an in-flight shake.
    Tick,
}

impl Intent for OtpIntent {}
