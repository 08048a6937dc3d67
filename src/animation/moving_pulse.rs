//! A block of light sweeping down the strip.

use core::ops::Range;

use super::{Animation, AnimationError, mismatch};
use crate::color::Color;
use crate::config::{ConfigError, MovingPulseConfig};
use crate::state::{AnimationKind, AnimationState, CommonState, MovingPulseState};
use crate::strip::PixelStrip;
use crate::time::Millis;

/// Moving pulse animation.
///
/// A block of `num_pixels / pulse_divisor` pixels travels from pixel 0 to
/// the end of the strip once per cycle, then jumps back to the start. The
/// block is clipped at the far end of the strip rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovingPulse {
    config: MovingPulseConfig,
}

impl MovingPulse {
    /// Creates the animation with custom timing.
    ///
    /// # Errors
    /// * `ZeroDuration` - `duration` is zero
    /// * `ZeroPulseDivisor` - `pulse_divisor` is zero
    pub fn new(config: MovingPulseConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the timing this animation renders with.
    pub fn config(&self) -> &MovingPulseConfig {
        &self.config
    }

    /// Initializes `state` to the start of a sweep of `color`.
    pub fn init<S: PixelStrip + ?Sized>(
        &self,
        now: Millis,
        state: &mut AnimationState,
        strip: &S,
        color: Color,
    ) {
        let num_pixels = strip.num_pixels();
        let duration = self.config.duration;

        *state = AnimationState::MovingPulse(MovingPulseState {
            common: CommonState::new(num_pixels, now, duration),
            color,
            pulse_length: num_pixels / self.config.pulse_divisor,
            pixels_per_ms: f32::from(num_pixels) / duration as f32,
        });
    }

    /// Pixel indices lit at `now`. May extend past the end of the strip.
    fn lit_pixels(state: &MovingPulseState, now: Millis) -> Range<u32> {
        let common = &state.common;
        let phase = common.phase(now);

        // floor(phase * pixels_per_ms), kept in integers so whole-pixel
        // positions land exactly
        let start = u64::from(phase) * u64::from(common.num_pixels()) / u64::from(common.duration());
        let start = start as u32;

        start..start + u32::from(state.pulse_length)
    }
}

impl Animation for MovingPulse {
    fn kind(&self) -> AnimationKind {
        AnimationKind::MovingPulse
    }

    fn do_frame(
        &self,
        now: Millis,
        state: &AnimationState,
        strip: &mut dyn PixelStrip,
    ) -> Result<(), AnimationError> {
        let AnimationState::MovingPulse(s) = state else {
            return Err(mismatch(self.kind(), state));
        };

        let lit = Self::lit_pixels(s, now);
        for i in 0..s.common.num_pixels() {
            let color = if lit.contains(&u32::from(i)) {
                s.color
            } else {
                Color::OFF
            };
            strip.set_pixel_color(i, color);
        }
        strip.show();
        Ok(())
    }
}
