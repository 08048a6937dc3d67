//! "Breathing" pulse: the whole strip brightens and dims repeatedly.

use super::{Animation, AnimationError, mismatch};
use crate::color::Color;
use crate::config::{ConfigError, PulseConfig};
use crate::state::{AnimationKind, AnimationState, CommonState, PulseState};
use crate::strip::PixelStrip;
use crate::time::Millis;

/// Breathing animation.
///
/// Brightness follows a triangle envelope: it rises linearly from
/// `min_brightness` at the start of the cycle to full brightness at
/// `brightness_fraction * duration`, then falls linearly back to
/// `min_brightness` at the end of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pulse {
    config: PulseConfig,
}

impl Pulse {
    /// Creates the animation with custom timing.
    ///
    /// # Errors
    /// * `ZeroDuration` - `duration` is zero
    /// * `FractionOutOfRange` - `brightness_fraction` or `min_brightness` is outside `[0.0, 1.0]`
    pub fn new(config: PulseConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the timing this animation renders with.
    pub fn config(&self) -> &PulseConfig {
        &self.config
    }

    /// Initializes `state` to breathe `color`.
    ///
    /// `initial_phase` in `[0.0, 1.0]` offsets the starting point within the
    /// cycle, so several pulsing tracks can run out of step with each other.
    /// Values outside that range are clamped.
    pub fn init<S: PixelStrip + ?Sized>(
        &self,
        now: Millis,
        state: &mut AnimationState,
        strip: &S,
        color: Color,
        initial_phase: f32,
    ) {
        let duration = self.config.duration;
        let offset = (initial_phase.clamp(0.0, 1.0) * duration as f32) as Millis;

        *state = AnimationState::Pulse(PulseState {
            common: CommonState::new(strip.num_pixels(), now.wrapping_sub(offset), duration),
            color,
        });
    }

    /// Point in the cycle where brightness peaks.
    pub fn bright_point(&self) -> Millis {
        (self.config.duration as f32 * self.config.brightness_fraction) as Millis
    }

    /// Brightness multiplier at `phase` ms into a cycle.
    ///
    /// `phase` is reduced modulo the cycle duration first.
    pub fn brightness_factor(&self, phase: Millis) -> f32 {
        let duration = self.config.duration;
        let phase = phase % duration;
        let bright_point = self.bright_point();

        let triangle = if phase < bright_point {
            phase as f32 / bright_point as f32
        } else {
            (duration - phase) as f32 / (duration - bright_point) as f32
        };

        let min = self.config.min_brightness;
        (1.0 - min) * triangle + min
    }
}

impl Animation for Pulse {
    fn kind(&self) -> AnimationKind {
        AnimationKind::Pulse
    }

    fn do_frame(
        &self,
        now: Millis,
        state: &AnimationState,
        strip: &mut dyn PixelStrip,
    ) -> Result<(), AnimationError> {
        let AnimationState::Pulse(s) = state else {
            return Err(mismatch(self.kind(), state));
        };

        let color = s.color.scale(self.brightness_factor(s.common.phase(now)));
        for i in 0..s.common.num_pixels() {
            strip.set_pixel_color(i, color);
        }
        strip.show();
        Ok(())
    }
}
