//! White to red to white flash.
//!
//! A transient cue for a discrete state change. Run it for one cycle and
//! retire it once [`Animation::done`] reports true.

use super::{Animation, AnimationError, mismatch};
use crate::color::Color;
use crate::config::{ConfigError, RedFlashConfig};
use crate::state::{AnimationKind, AnimationState, CommonState, RedFlashState};
use crate::strip::PixelStrip;
use crate::time::Millis;

/// Red flash animation.
///
/// The cycle starts at full white, fades white out until `start_red`, ramps
/// red up to full by `max_red_start`, holds it until `max_red_end`, ramps it
/// down to nothing at `end_red`, then fades white back in until the end of
/// the cycle.
///
/// On RGBW strips white is emitted on the white channel; otherwise it is
/// emulated with equal red, green and blue. Red is always pure red.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RedFlash {
    config: RedFlashConfig,
}

/// Segment boundaries in whole milliseconds.
struct Boundaries {
    start_red: Millis,
    max_red_start: Millis,
    max_red_end: Millis,
    end_red: Millis,
}

impl RedFlash {
    /// Creates the animation with custom timing.
    ///
    /// # Errors
    /// * `ZeroDuration` - `duration` is zero
    /// * `FractionOutOfRange` - A boundary is outside `[0.0, 1.0]`
    /// * `BoundariesOutOfOrder` - The boundaries are not ascending
    pub fn new(config: RedFlashConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the timing this animation renders with.
    pub fn config(&self) -> &RedFlashConfig {
        &self.config
    }

    /// Initializes `state` to the start of a flash.
    pub fn init<S: PixelStrip + ?Sized>(
        &self,
        now: Millis,
        state: &mut AnimationState,
        strip: &S,
        is_rgbw: bool,
    ) {
        *state = AnimationState::RedFlash(RedFlashState {
            common: CommonState::new(strip.num_pixels(), now, self.config.duration),
            is_rgbw,
        });
    }

    fn boundaries(&self) -> Boundaries {
        let at = |fraction: f32| (self.config.duration as f32 * fraction) as Millis;
        Boundaries {
            start_red: at(self.config.start_red),
            max_red_start: at(self.config.max_red_start),
            max_red_end: at(self.config.max_red_end),
            end_red: at(self.config.end_red),
        }
    }

    /// Color of every pixel at `phase` ms into the flash.
    ///
    /// `phase` is reduced modulo the cycle duration first.
    pub fn color_at(&self, phase: Millis, is_rgbw: bool) -> Color {
        let duration = self.config.duration;
        let phase = phase % duration;
        let b = self.boundaries();

        if phase < b.start_red || phase > b.end_red {
            let pct = if phase < b.start_red {
                (b.start_red - phase) as f32 / b.start_red as f32
            } else {
                (phase - b.end_red) as f32 / (duration - b.end_red) as f32
            };
            let white = (255.0 * pct) as u8;
            if is_rgbw {
                Color::white(white)
            } else {
                Color::rgb(white, white, white)
            }
        } else {
            let pct = if phase < b.max_red_start {
                (phase - b.start_red) as f32 / (b.max_red_start - b.start_red) as f32
            } else if phase > b.max_red_end {
                (b.end_red - phase) as f32 / (b.end_red - b.max_red_end) as f32
            } else {
                1.0
            };
            Color::rgb((255.0 * pct) as u8, 0, 0)
        }
    }
}

impl Animation for RedFlash {
    fn kind(&self) -> AnimationKind {
        AnimationKind::RedFlash
    }

    fn do_frame(
        &self,
        now: Millis,
        state: &AnimationState,
        strip: &mut dyn PixelStrip,
    ) -> Result<(), AnimationError> {
        let AnimationState::RedFlash(s) = state else {
            return Err(mismatch(self.kind(), state));
        };

        let color = self.color_at(s.common.phase(now), s.is_rgbw);
        for i in 0..s.common.num_pixels() {
            strip.set_pixel_color(i, color);
        }
        strip.show();
        Ok(())
    }
}
