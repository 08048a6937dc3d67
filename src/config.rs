//! Per-variant animation parameters.
//!
//! Every animation is built from a config value. The `Default` of each config
//! reproduces the stock effect; hosts that want a different feel (a longer
//! sweep, a deeper breathing floor) build their own and pass it through the
//! variant's `new`, which validates it.

use crate::time::Millis;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Cycle duration is zero.
    ZeroDuration,

    /// Moving pulse divisor is zero.
    ZeroPulseDivisor,

    /// A fractional parameter lies outside `[0.0, 1.0]` or is NaN.
    FractionOutOfRange {
        /// Name of the offending parameter.
        name: &'static str,
    },

    /// Red flash boundaries are not in ascending order.
    BoundariesOutOfOrder,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroDuration => write!(f, "cycle duration must be non-zero"),
            ConfigError::ZeroPulseDivisor => write!(f, "pulse divisor must be non-zero"),
            ConfigError::FractionOutOfRange { name } => {
                write!(f, "{} must be within 0.0..=1.0", name)
            }
            ConfigError::BoundariesOutOfOrder => {
                write!(
                    f,
                    "red flash boundaries must satisfy start_red <= max_red_start <= max_red_end <= end_red"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

fn check_duration(duration: Millis) -> Result<(), ConfigError> {
    if duration == 0 {
        return Err(ConfigError::ZeroDuration);
    }
    Ok(())
}

fn check_fraction(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::FractionOutOfRange { name });
    }
    Ok(())
}

/// Parameters of [`MovingPulse`](crate::animation::MovingPulse).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MovingPulseConfig {
    /// Time for the block to sweep the strip once.
    pub duration: Millis,

    /// The lit block is `num_pixels / pulse_divisor` pixels long.
    pub pulse_divisor: u16,
}

impl MovingPulseConfig {
    /// Checks that the config describes a renderable animation.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_duration(self.duration)?;
        if self.pulse_divisor == 0 {
            return Err(ConfigError::ZeroPulseDivisor);
        }
        Ok(())
    }
}

impl Default for MovingPulseConfig {
    fn default() -> Self {
        Self {
            duration: 4000,
            pulse_divisor: 8,
        }
    }
}

/// Parameters of [`Pulse`](crate::animation::Pulse).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseConfig {
    /// Length of one breath.
    pub duration: Millis,

    /// Point in the cycle, as a fraction of `duration`, where brightness
    /// peaks.
    pub brightness_fraction: f32,

    /// Brightness floor applied at the start and end of each cycle.
    pub min_brightness: f32,
}

impl PulseConfig {
    /// Checks that the config describes a renderable animation.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_duration(self.duration)?;
        check_fraction("brightness_fraction", self.brightness_fraction)?;
        check_fraction("min_brightness", self.min_brightness)
    }

    /// Returns the config with a different brightness floor.
    pub fn with_min_brightness(mut self, min_brightness: f32) -> Self {
        self.min_brightness = min_brightness;
        self
    }

    /// Returns the config with a different peak point.
    pub fn with_brightness_fraction(mut self, brightness_fraction: f32) -> Self {
        self.brightness_fraction = brightness_fraction;
        self
    }
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            duration: 4000,
            brightness_fraction: 0.5,
            min_brightness: 0.25,
        }
    }
}

/// Parameters of [`RedFlash`](crate::animation::RedFlash).
///
/// Boundaries are fractions of `duration` and must be ascending.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RedFlashConfig {
    /// Length of the whole flash.
    pub duration: Millis,

    /// White has faded out and red starts ramping up.
    pub start_red: f32,

    /// Red reaches full brightness.
    pub max_red_start: f32,

    /// Red starts fading.
    pub max_red_end: f32,

    /// Red is gone and white starts fading back in.
    pub end_red: f32,
}

impl RedFlashConfig {
    /// Checks that the config describes a renderable animation.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_duration(self.duration)?;
        check_fraction("start_red", self.start_red)?;
        check_fraction("max_red_start", self.max_red_start)?;
        check_fraction("max_red_end", self.max_red_end)?;
        check_fraction("end_red", self.end_red)?;

        let ordered = self.start_red <= self.max_red_start
            && self.max_red_start <= self.max_red_end
            && self.max_red_end <= self.end_red;
        if !ordered {
            return Err(ConfigError::BoundariesOutOfOrder);
        }
        Ok(())
    }
}

impl Default for RedFlashConfig {
    fn default() -> Self {
        Self {
            duration: 1000,
            start_red: 0.25,
            max_red_start: 0.45,
            max_red_end: 0.55,
            end_red: 0.75,
        }
    }
}

/// Parameters of [`SolidColor`](crate::animation::SolidColor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SolidColorConfig {
    /// Nominal cycle length; only affects `cycles_complete` and `done`.
    pub duration: Millis,
}

impl SolidColorConfig {
    /// Checks that the config describes a renderable animation.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_duration(self.duration)
    }
}

impl Default for SolidColorConfig {
    fn default() -> Self {
        Self { duration: 1000 }
    }
}
