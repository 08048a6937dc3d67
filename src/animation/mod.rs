//! The animation contract and its implementations.
//!
//! An [`Animation`] turns a clock reading plus an [`AnimationState`] into one
//! frame of pixel colors. Implementations hold only configuration, never
//! per-track data, so a single instance can drive any number of tracks.
//!
//! Each variant also has an inherent `init` method taking its own
//! parameters (color, initial phase, pixel layout); `init` is the only way to
//! produce an initialized state.

mod moving_pulse;
mod pulse;
mod red_flash;
mod solid_color;

pub use moving_pulse::MovingPulse;
pub use pulse::Pulse;
pub use red_flash::RedFlash;
pub use solid_color::SolidColor;

use crate::state::{AnimationKind, AnimationState, CommonState};
use crate::strip::PixelStrip;
use crate::time::Millis;

/// Errors that can occur while driving an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationError {
    /// The state was never initialized by an animation's `init`.
    UninitializedState,

    /// The state belongs to a different animation variant.
    StateMismatch {
        /// The variant that was asked to handle the state.
        expected: AnimationKind,
        /// The variant that initialized the state.
        actual: AnimationKind,
    },
}

impl core::fmt::Display for AnimationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnimationError::UninitializedState => {
                write!(f, "animation state used before init")
            }
            AnimationError::StateMismatch { expected, actual } => {
                write!(
                    f,
                    "state mismatch: expected {} state, but state was initialized by {}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnimationError {}

/// Builds the error for a state whose tag is not `expected`.
pub(crate) fn mismatch(expected: AnimationKind, state: &AnimationState) -> AnimationError {
    match state.kind() {
        None => AnimationError::UninitializedState,
        Some(actual) => AnimationError::StateMismatch { expected, actual },
    }
}

/// Returns the common fields of `state` if it was initialized by `expected`.
fn checked_common(
    expected: AnimationKind,
    state: &AnimationState,
) -> Result<&CommonState, AnimationError> {
    match state.common() {
        Some(common) if state.kind() == Some(expected) => Ok(common),
        _ => Err(mismatch(expected, state)),
    }
}

/// Contract shared by all animation variants.
pub trait Animation {
    /// The variant this implementation drives.
    fn kind(&self) -> AnimationKind;

    /// Restarts the cycle: the phase is measured from `now` from here on.
    fn start(&self, now: Millis, state: &mut AnimationState) -> Result<(), AnimationError> {
        checked_common(self.kind(), state)?;
        if let Some(common) = state.common_mut() {
            common.restart(now);
        }
        Ok(())
    }

    /// Renders the frame for `now` into `strip` and flushes it.
    ///
    /// Deterministic in `(now, state)` and never blocks.
    fn do_frame(
        &self,
        now: Millis,
        state: &AnimationState,
        strip: &mut dyn PixelStrip,
    ) -> Result<(), AnimationError>;

    /// Number of whole cycles completed since the state's start time.
    fn cycles_complete(&self, now: Millis, state: &AnimationState) -> Result<u32, AnimationError> {
        Ok(checked_common(self.kind(), state)?.cycles_complete(now))
    }

    /// Returns true once at least one full cycle has elapsed.
    ///
    /// Used to retire transient effects such as [`RedFlash`].
    fn done(&self, now: Millis, state: &AnimationState) -> Result<bool, AnimationError> {
        Ok(self.cycles_complete(now, state)? > 0)
    }
}
