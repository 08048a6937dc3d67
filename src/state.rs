//! Per-track animation state.
//!
//! An [`AnimationState`] holds everything that changes between two tracks
//! running the same animation: when the track started, how many pixels it
//! drives and the variant's parameters. Animations themselves are stateless,
//! so one instance can render any number of states.
//!
//! Initialized payloads can only be built by the variants' `init` methods,
//! which guarantees a non-zero cycle duration.

use crate::color::Color;
use crate::time::{Millis, elapsed};

/// Identifies an animation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationKind {
    /// A lit block sweeping down the strip.
    MovingPulse,
    /// Whole-strip breathing.
    Pulse,
    /// White to red to white transient flash.
    RedFlash,
    /// Constant color.
    SolidColor,
}

impl AnimationKind {
    /// Returns a short lowercase name, suitable for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            AnimationKind::MovingPulse => "moving_pulse",
            AnimationKind::Pulse => "pulse",
            AnimationKind::RedFlash => "red_flash",
            AnimationKind::SolidColor => "solid_color",
        }
    }
}

impl core::fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by every animation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommonState {
    num_pixels: u16,
    start_time: Millis,
    duration: Millis,
}

impl CommonState {
    pub(crate) const fn new(num_pixels: u16, start_time: Millis, duration: Millis) -> Self {
        Self {
            num_pixels,
            start_time,
            duration,
        }
    }

    /// Pixel count captured from the strip at init time.
    pub const fn num_pixels(&self) -> u16 {
        self.num_pixels
    }

    /// Clock reading the cycle phase is measured from.
    pub const fn start_time(&self) -> Millis {
        self.start_time
    }

    /// Length of one cycle in milliseconds. Always non-zero.
    pub const fn duration(&self) -> Millis {
        self.duration
    }

    /// Time since `start_time`, wraparound-safe.
    #[inline]
    pub const fn elapsed(&self, now: Millis) -> Millis {
        elapsed(now, self.start_time)
    }

    /// Position within the current cycle, in `[0, duration)`.
    #[inline]
    pub const fn phase(&self, now: Millis) -> Millis {
        self.elapsed(now) % self.duration
    }

    /// Number of whole cycles completed since `start_time`.
    #[inline]
    pub const fn cycles_complete(&self, now: Millis) -> u32 {
        self.elapsed(now) / self.duration
    }

    pub(crate) fn restart(&mut self, now: Millis) {
        self.start_time = now;
    }
}

/// State of a [`MovingPulse`](crate::animation::MovingPulse) track.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MovingPulseState {
    pub(crate) common: CommonState,
    pub(crate) color: Color,
    pub(crate) pulse_length: u16,
    /// Informational only: frames place the block with integer math on the
    /// phase, so this value never drives the sweep.
    pub(crate) pixels_per_ms: f32,
}

impl MovingPulseState {
    /// Color of the lit block.
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Number of pixels in the lit block.
    pub const fn pulse_length(&self) -> u16 {
        self.pulse_length
    }

    /// Sweep speed, `num_pixels / duration`.
    ///
    /// Reported for hosts; rendering computes the block position from the
    /// phase with integer math and does not read it.
    pub const fn pixels_per_ms(&self) -> f32 {
        self.pixels_per_ms
    }
}

/// State of a [`Pulse`](crate::animation::Pulse) track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseState {
    pub(crate) common: CommonState,
    pub(crate) color: Color,
}

impl PulseState {
    /// Base color at full brightness.
    pub const fn color(&self) -> Color {
        self.color
    }
}

/// State of a [`RedFlash`](crate::animation::RedFlash) track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RedFlashState {
    pub(crate) common: CommonState,
    pub(crate) is_rgbw: bool,
}

impl RedFlashState {
    /// Whether white is emitted on the dedicated white channel.
    pub const fn is_rgbw(&self) -> bool {
        self.is_rgbw
    }
}

/// State of a [`SolidColor`](crate::animation::SolidColor) track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SolidColorState {
    pub(crate) common: CommonState,
    pub(crate) color: Color,
}

impl SolidColorState {
    /// The color every pixel is set to.
    pub const fn color(&self) -> Color {
        self.color
    }
}

/// The mutable state of one track.
///
/// Exactly one variant payload is live at a time. A fresh state is
/// `Uninitialized` until one of the animations' `init` methods fills it in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationState {
    /// Not yet initialized by any animation.
    #[default]
    Uninitialized,
    MovingPulse(MovingPulseState),
    Pulse(PulseState),
    RedFlash(RedFlashState),
    SolidColor(SolidColorState),
}

impl AnimationState {
    /// Returns the variant driving this state, or `None` if uninitialized.
    pub const fn kind(&self) -> Option<AnimationKind> {
        match self {
            AnimationState::Uninitialized => None,
            AnimationState::MovingPulse(_) => Some(AnimationKind::MovingPulse),
            AnimationState::Pulse(_) => Some(AnimationKind::Pulse),
            AnimationState::RedFlash(_) => Some(AnimationKind::RedFlash),
            AnimationState::SolidColor(_) => Some(AnimationKind::SolidColor),
        }
    }

    /// Returns true once an animation has initialized this state.
    pub const fn is_initialized(&self) -> bool {
        !matches!(self, AnimationState::Uninitialized)
    }

    /// Returns the fields shared by all variants.
    pub const fn common(&self) -> Option<&CommonState> {
        match self {
            AnimationState::Uninitialized => None,
            AnimationState::MovingPulse(s) => Some(&s.common),
            AnimationState::Pulse(s) => Some(&s.common),
            AnimationState::RedFlash(s) => Some(&s.common),
            AnimationState::SolidColor(s) => Some(&s.common),
        }
    }

    pub(crate) fn common_mut(&mut self) -> Option<&mut CommonState> {
        match self {
            AnimationState::Uninitialized => None,
            AnimationState::MovingPulse(s) => Some(&mut s.common),
            AnimationState::Pulse(s) => Some(&mut s.common),
            AnimationState::RedFlash(s) => Some(&mut s.common),
            AnimationState::SolidColor(s) => Some(&mut s.common),
        }
    }

    /// Resets the state to `Uninitialized`.
    pub fn reset(&mut self) {
        *self = AnimationState::Uninitialized;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_uninitialized() {
        let state = AnimationState::default();
        assert!(!state.is_initialized());
        assert_eq!(state.kind(), None);
        assert!(state.common().is_none());
    }

    #[test]
    fn common_state_phase_and_cycles_use_wrapping_elapsed() {
        let common = CommonState::new(10, u32::MAX - 499, 1000);
        // 500ms before the wrap plus 2000ms after it
        let now = 2000;
        assert_eq!(common.elapsed(now), 2500);
        assert_eq!(common.phase(now), 500);
        assert_eq!(common.cycles_complete(now), 2);
    }

    #[test]
    fn kind_matches_payload() {
        let state = AnimationState::RedFlash(RedFlashState {
            common: CommonState::new(4, 0, 1000),
            is_rgbw: true,
        });
        assert_eq!(state.kind(), Some(AnimationKind::RedFlash));
        assert_eq!(state.common().map(CommonState::duration), Some(1000));
    }
}
