use crate::otp::intent::OtpIntent;
use crate::otp::state::OtpFieldState;
use crate::mvi::Reducer;

pub struct OtpReducer;

impl Reducer for OtpReducer {
    type State = OtpFieldState;
    type Intent = OtpIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OtpIntent::ValueObserved(value) => OtpFieldState { value, ..state },
            OtpIntent::FocusChanged(focused) => OtpFieldState { focused, ..state },
            OtpIntent::ErrorChanged(present) => {
                // Rising edge starts the shake; a level repeat does not, and
                // neither does an edge arriving while a shake is in flight.
                // Clearing the error never cancels a running timeline.
                let shake = if present && !state.error {
                    state.shake.trigger()
                } else {
                    state.shake
                };
                OtpFieldState {
                    error: present,
                    shake,
                    ..state
                }
            }
            OtpIntent::Tick => OtpFieldState {
                shake: state.shake.advance(),
                ..state
            },
        }
    }
}
