//! Shared helpers for driving the OTP field controller.

#![allow(dead_code)]

use otpfield::otp::{OtpEvent, OtpFieldController};

/// Drain every queued notification, oldest first.
pub fn drain(controller: &mut OtpFieldController) -> Vec<OtpEvent> {
    let mut events = Vec::new();
    while let Some(event) = controller.poll_event() {
        events.push(event);
    }
    events
}

/// Propose a candidate and, if accepted, report it back as the new
/// externally-owned value, as an embedding host does on every keystroke.
pub fn feed(controller: &mut OtpFieldController, raw: &str) {
    if controller.propose_input(raw).is_ok() {
        controller.observe_value(raw);
    }
}

/// The accepted-value payloads among `events`, in order.
pub fn value_changes(events: &[OtpEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            OtpEvent::ValueChanged(value) => Some(value.clone()),
            OtpEvent::Complete => None,
        })
        .collect()
}

/// How many completions are among `events`.
pub fn completions(events: &[OtpEvent]) -> usize {
    events.iter().filter(|event| matches!(event, OtpEvent::Complete)).count()
}
