//! One shared instance of every animation.
//!
//! Animations carry no per-track data, so a single [`Animations`] value can
//! render any number of tracks. The registry dispatches on the state's tag,
//! which means a state is always rendered by the variant that initialized it.

use crate::animation::{
    Animation, AnimationError, MovingPulse, Pulse, RedFlash, SolidColor,
};
use crate::color::Color;
use crate::command::AnimationCommand;
use crate::state::{AnimationKind, AnimationState};
use crate::strip::PixelStrip;
use crate::time::Millis;

/// Collection of all supported animations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Animations {
    pub moving_pulse: MovingPulse,
    pub pulse: Pulse,
    pub red_flash: RedFlash,
    pub solid_color: SolidColor,
}

impl Animations {
    /// Returns the animation implementing `kind`.
    pub fn animation_for(&self, kind: AnimationKind) -> &dyn Animation {
        match kind {
            AnimationKind::MovingPulse => &self.moving_pulse,
            AnimationKind::Pulse => &self.pulse,
            AnimationKind::RedFlash => &self.red_flash,
            AnimationKind::SolidColor => &self.solid_color,
        }
    }

    /// Initializes `state` as described by `command`.
    ///
    /// Returns the variant now driving the state.
    pub fn apply<S: PixelStrip + ?Sized>(
        &self,
        now: Millis,
        command: AnimationCommand,
        state: &mut AnimationState,
        strip: &S,
    ) -> AnimationKind {
        match command {
            AnimationCommand::MovingPulse { color } => {
                self.moving_pulse.init(now, state, strip, color)
            }
            AnimationCommand::Pulse {
                color,
                initial_phase,
            } => self.pulse.init(now, state, strip, color, initial_phase),
            AnimationCommand::RedFlash { is_rgbw } => {
                self.red_flash.init(now, state, strip, is_rgbw)
            }
            AnimationCommand::Solid { color } => self.solid_color.init(now, state, strip, color),
            AnimationCommand::Off => self.solid_color.init(now, state, strip, Color::OFF),
        }
        command.kind()
    }

    /// Renders one frame of `state` with the variant that initialized it.
    pub fn do_frame(
        &self,
        now: Millis,
        state: &AnimationState,
        strip: &mut dyn PixelStrip,
    ) -> Result<(), AnimationError> {
        match state {
            AnimationState::Uninitialized => Err(AnimationError::UninitializedState),
            AnimationState::MovingPulse(_) => self.moving_pulse.do_frame(now, state, strip),
            AnimationState::Pulse(_) => self.pulse.do_frame(now, state, strip),
            AnimationState::RedFlash(_) => self.red_flash.do_frame(now, state, strip),
            AnimationState::SolidColor(_) => self.solid_color.do_frame(now, state, strip),
        }
    }

    /// Restarts the cycle of `state`, whichever variant it belongs to.
    pub fn start(&self, now: Millis, state: &mut AnimationState) -> Result<(), AnimationError> {
        let kind = state.kind().ok_or(AnimationError::UninitializedState)?;
        self.animation_for(kind).start(now, state)
    }

    /// Number of whole cycles `state` has completed.
    pub fn cycles_complete(
        &self,
        now: Millis,
        state: &AnimationState,
    ) -> Result<u32, AnimationError> {
        let kind = state.kind().ok_or(AnimationError::UninitializedState)?;
        self.animation_for(kind).cycles_complete(now, state)
    }

    /// Returns true once `state` has completed at least one cycle.
    pub fn done(&self, now: Millis, state: &AnimationState) -> Result<bool, AnimationError> {
        let kind = state.kind().ok_or(AnimationError::UninitializedState)?;
        self.animation_for(kind).done(now, state)
    }
}
