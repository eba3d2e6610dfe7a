//! Error-shake timeline.
//!
//! Three oscillation cycles: the field is displaced `+SHAKE_OFFSET`, then
//! `-SHAKE_OFFSET`, each position held for one tick, repeated three times,
//! then the offset returns to neutral. The timeline is edge-triggered and
//! runs to completion: clearing the error mid-shake does not cancel it, and
//! a second trigger while running does not restart it.

/// Horizontal displacement in layout units while shaking.
pub const SHAKE_OFFSET: i16 = 10;

/// Number of held positions in one full shake (3 cycles of +/-).
pub const SHAKE_STEPS: u8 = 6;

/// How long each position is held, and therefore the tick cadence the host
/// should use while a shake can be in flight.
pub const SHAKE_STEP_MS: u64 = 50;

/// Where the shake timeline currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShakeState {
    #[default]
    Idle,
    Shaking {
        /// Index of the currently held position, `0..SHAKE_STEPS`.
        step: u8,
    },
}

impl ShakeState {
    /// Start the timeline. Only effective from `Idle`; an in-flight shake
    /// keeps its current step.
    pub fn trigger(self) -> Self {
        match self {
            Self::Idle => Self::Shaking { step: 0 },
            shaking => shaking,
        }
    }

    /// Move to the next held position, returning to `Idle` after the last.
    pub fn advance(self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Shaking { step } => {
                let next = step + 1;
                if next >= SHAKE_STEPS {
                    Self::Idle
                } else {
                    Self::Shaking { step: next }
                }
            }
        }
    }

    /// Current horizontal displacement.
    pub fn offset(self) -> i16 {
        match self {
            Self::Idle => 0,
            Self::Shaking { step } => {
                if step % 2 == 0 {
                    SHAKE_OFFSET
                } else {
                    -SHAKE_OFFSET
                }
            }
        }
    }

    pub fn is_shaking(self) -> bool {
        matches!(self, Self::Shaking { .. })
    }
}
