//! Static color fill.

use super::{Animation, AnimationError, mismatch};
use crate::color::Color;
use crate::config::{ConfigError, SolidColorConfig};
use crate::state::{AnimationKind, AnimationState, CommonState, SolidColorState};
use crate::strip::PixelStrip;
use crate::time::Millis;

/// Solid color animation - every pixel holds one color.
///
/// The nominal cycle length only gives [`Animation::done`] something to
/// report, for hosts that show a color for a while before moving on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolidColor {
    config: SolidColorConfig,
}

impl SolidColor {
    /// Creates the animation with custom timing.
    ///
    /// # Errors
    /// * `ZeroDuration` - `duration` is zero
    pub fn new(config: SolidColorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the timing this animation renders with.
    pub fn config(&self) -> &SolidColorConfig {
        &self.config
    }

    pub fn init<S: PixelStrip + ?Sized>(
        &self,
        now: Millis,
        state: &mut AnimationState,
        strip: &S,
        color: Color,
    ) {
        *state = AnimationState::SolidColor(SolidColorState {
            common: CommonState::new(strip.num_pixels(), now, self.config.duration),
            color,
        });
    }
}

impl Animation for SolidColor {
    fn kind(&self) -> AnimationKind {
        AnimationKind::SolidColor
    }

    fn do_frame(
        &self,
        _now: Millis,
        state: &AnimationState,
        strip: &mut dyn PixelStrip,
    ) -> Result<(), AnimationError> {
        let AnimationState::SolidColor(s) = state else {
            return Err(mismatch(self.kind(), state));
        };

        for i in 0..s.common.num_pixels() {
            strip.set_pixel_color(i, s.color);
        }
        strip.show();
        Ok(())
    }
}
