use crate::otp::intent::OtpIntent;
use crate::otp::reducer::OtpReducer;
use crate::otp::state::OtpFieldState;
use crate::otp::view::{derive_view, OtpView, OTP_LENGTH};
use crate::mvi::Reducer;
use std::collections::VecDeque;
use thiserror::Error;

/// Why a candidate string was not accepted.
///
/// Rejection is silent: the field keeps showing its previous value and no
/// notification goes out. This type exists so the embedding
/// layer can log or ignore the reason; it is never shown to the user by
/// the widget itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectedInput {
    #[error("candidate is {len} characters, limit is {OTP_LENGTH}")]
    TooLong { len: usize },
    #[error("candidate contains non-digit {ch:?} at index {index}")]
    NonDigit { ch: char, index: usize },
}

/// Outward notifications, drained by the host via [`OtpFieldController::poll_event`].
///
/// Events are queued rather than delivered through callbacks so the host is
/// free to process them whenever it gets control back; nothing here may
/// assume it runs inside the state update that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpEvent {
    /// An accepted proposal, carrying the candidate string verbatim.
    ValueChanged(String),
    /// The observed value reached 6 digits.
    Complete,
}

/// Owns the field state machine and the outbound notification queue.
pub struct OtpFieldController {
    state: OtpFieldState,
    events: VecDeque<OtpEvent>,
    /// When set, observing the same 6-digit value twice in a row fires
    /// `Complete` only once. Off by default: each observation counts.
    dedup_repeated_complete: bool,
}

impl Default for OtpFieldController {
    fn default() -> Self {
        Self::new()
    }
}

impl OtpFieldController {
    pub fn new() -> Self {
        Self {
            state: OtpFieldState::default(),
            events: VecDeque::new(),
            dedup_repeated_complete: false,
        }
    }

    /// Opt into deduplicating back-to-back completions of an identical value.
    pub fn dedup_repeated_complete(&mut self, dedup: bool) {
        self.dedup_repeated_complete = dedup;
    }

    /// Validate a candidate string from the input surface.
    ///
    /// Accepts iff the candidate is at most 6 characters and every character
    /// is an ASCII decimal digit; the empty string (a cleared field) passes.
    /// On acceptance the candidate is forwarded unchanged in a
    /// [`OtpEvent::ValueChanged`]; digits are opaque characters here, so
    /// `"007"` stays `"007"`. On rejection nothing happens at all.
    pub fn propose_input(&mut self, raw: &str) -> Result<(), RejectedInput> {
        validate(raw)?;
        self.events.push_back(OtpEvent::ValueChanged(raw.to_string()));
        Ok(())
    }

    /// Report the current externally-owned value.
    ///
    /// Called by the owner on every change, whether from an accepted proposal
    /// or an external reset. Each observation of a 6-digit value queues one
    /// [`OtpEvent::Complete`], including a repeat of the same value, unless
    /// the dedup policy was enabled.
    pub fn observe_value(&mut self, value: &str) {
        let repeat = self.state.value == value;
        self.dispatch(OtpIntent::ValueObserved(value.to_string()));
        let complete = value.chars().count() == OTP_LENGTH;
        if complete && !(self.dedup_repeated_complete && repeat) {
            self.events.push_back(OtpEvent::Complete);
        }
    }

    /// Report a focus gain or loss from the host.
    pub fn set_focused(&mut self, focused: bool) {
        self.dispatch(OtpIntent::FocusChanged(focused));
    }

    /// Report presence or absence of the external error payload.
    pub fn set_error_present(&mut self, present: bool) {
        self.dispatch(OtpIntent::ErrorChanged(present));
    }

    /// Advance time by one shake step.
    pub fn tick(&mut self) {
        if self.state.shake.is_shaking() {
            self.dispatch(OtpIntent::Tick);
        }
    }

    /// Take the next queued notification, oldest first.
    pub fn poll_event(&mut self) -> Option<OtpEvent> {
        self.events.pop_front()
    }

    pub fn state(&self) -> &OtpFieldState {
        &self.state
    }

    /// Derive the per-box visual state for the current frame.
    pub fn view(&self) -> OtpView {
        derive_view(&self.state)
    }

    /// Current shake displacement in layout units.
    pub fn shake_offset(&self) -> i16 {
        self.state.shake.offset()
    }

    fn dispatch(&mut self, intent: OtpIntent) {
        self.state = OtpReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}

fn validate(raw: &str) -> Result<(), RejectedInput> {
    let mut len = 0;
    for (index, ch) in raw.chars().enumerate() {
        if !ch.is_ascii_digit() {
            return Err(RejectedInput::NonDigit { ch, index });
        }
        len = index + 1;
    }
    if len > OTP_LENGTH {
        return Err(RejectedInput::TooLong { len });
    }
    Ok(())
}
