use crate::otp::{OtpEvent, OtpFieldController, OtpView};
use tracing::debug;
use ui_text::{TextResolver, UiText};

/// String-resource table for the demo.
///
/// Stands in for the platform resource lookup the error payload would
/// normally resolve against. Unknown ids come back wrapped in markers so a
/// missing entry is visible instead of silently blank.
pub struct DemoStrings;

impl TextResolver for DemoStrings {
    fn lookup(&self, id: &str, args: &[String]) -> String {
        match id {
            "otp_incorrect" => "Incorrect code, try again".to_string(),
            "otp_attempts" => match args.first() {
                Some(count) => format!(" (attempt {count})"),
                None => String::new(),
            },
            other => format!("??{other}??"),
        }
    }
}

/// Demo host embedding one OTP field.
///
/// Plays the role of the surrounding screen: it owns the canonical value
/// string and the error payload, routes keystrokes into the controller as
/// candidate proposals, and verifies the code when the field completes.
/// The controller only ever sees the value through `observe_value` and the
/// error through its presence flag.
pub struct App {
    controller: OtpFieldController,
    /// Canonical value, owned here. The controller reads, never writes.
    value: String,
    /// Opaque error payload; its presence is mirrored into the controller.
    error: Option<UiText>,
    expected: String,
    spacing: u16,
    attempts: u32,
    solved: bool,
    focused: bool,
    should_quit: bool,
}

impl App {
    pub fn new(expected: String, spacing: u16) -> Self {
        let mut controller = OtpFieldController::new();
        // The demo requests focus for the field on startup, the same way a
        // screen would through a focus handle.
        controller.set_focused(true);
        Self {
            controller,
            value: String::new(),
            error: None,
            expected,
            spacing,
            attempts: 0,
            solved: false,
            focused: true,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Append a typed character to the candidate and propose it.
    ///
    /// The candidate may be anything the keyboard produces; the controller
    /// silently drops invalid ones and the previous value stays displayed.
    pub fn type_char(&mut self, ch: char) {
        if self.solved || !self.focused {
            return;
        }
        let mut candidate = self.value.clone();
        candidate.push(ch);
        if let Err(rejected) = self.controller.propose_input(&candidate) {
            debug!(%rejected, "candidate dropped");
        }
        self.pump_controller();
    }

    /// Propose the candidate with the last character removed.
    pub fn backspace(&mut self) {
        if self.solved || !self.focused {
            return;
        }
        let mut candidate = self.value.clone();
        if candidate.pop().is_none() {
            return;
        }
        if let Err(rejected) = self.controller.propose_input(&candidate) {
            debug!(%rejected, "candidate dropped");
        }
        self.pump_controller();
    }

    /// Move focus onto or off the field.
    pub fn toggle_focus(&mut self) {
        self.focused = !self.focused;
        self.controller.set_focused(self.focused);
    }

    /// Clear the field and start over. Attempts keep counting.
    pub fn reset(&mut self) {
        self.solved = false;
        self.value.clear();
        self.clear_error();
        self.controller.observe_value("");
        self.pump_controller();
    }

    pub fn on_tick(&mut self) {
        self.controller.tick();
    }

    /// Drain controller notifications.
    ///
    /// Runs after the triggering update, never inside it: an accepted
    /// proposal becomes the canonical value and is fed back as an
    /// observation, and a completion triggers verification.
    fn pump_controller(&mut self) {
        while let Some(event) = self.controller.poll_event() {
            match event {
                OtpEvent::ValueChanged(value) => {
                    self.clear_error();
                    self.value = value.clone();
                    self.controller.observe_value(&value);
                }
                OtpEvent::Complete => self.verify(),
            }
        }
    }

    fn verify(&mut self) {
        if self.value == self.expected {
            self.solved = true;
            self.clear_error();
            debug!("code accepted");
        } else {
            self.attempts += 1;
            let message = UiText::resource("otp_incorrect")
                .and(UiText::resource_with("otp_attempts", vec![self.attempts.to_string()]));
            self.error = Some(message);
            self.controller.set_error_present(true);
            debug!(attempts = self.attempts, "code mismatch");
        }
    }

    fn clear_error(&mut self) {
        if self.error.take().is_some() {
            self.controller.set_error_present(false);
        }
    }

    // -- Render accessors -----------------------------------------------

    pub fn view(&self) -> OtpView {
        self.controller.view()
    }

    pub fn spacing(&self) -> u16 {
        self.spacing
    }

    /// Error payload resolved to display text, verbatim for the renderer.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|text| text.resolve(&DemoStrings))
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
