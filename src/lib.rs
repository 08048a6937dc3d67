#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Color`**: An RGBW pixel value, also packable into a `0xWWRRGGBB` word
//! - **`AnimationState`**: The per-track state of whichever animation is running on it
//! - **`Animation`**: Trait implemented by every variant (`start`, `do_frame`, `cycles_complete`, `done`)
//! - **`MovingPulse`**, **`Pulse`**, **`RedFlash`**, **`SolidColor`**: The animation variants
//! - **`Animations`**: One stateless instance of every variant, shared by all tracks
//! - **`CircularBuffer`**: Fixed-capacity FIFO that drops the oldest value when full
//! - **`Zone`** / **`ZoneSet`**: Strips paired with their state and a queue of `AnimationCommand`s
//! - **`PixelStrip`**: Trait to implement for your LED strip driver
//! - **`Clock`**: Trait to implement for your millisecond counter
//!
//! All time values are wrapping `u32` milliseconds; elapsed time is always
//! computed with wrapping subtraction, so counter rollover is harmless.

/// Debug log through `defmt` when the feature is enabled.
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    };
}
pub(crate) use debug;

pub mod animation;
pub mod buffer;
pub mod color;
pub mod command;
pub mod config;
pub mod registry;
pub mod state;
pub mod strip;
pub mod time;
pub mod zone;

pub use animation::{Animation, AnimationError, MovingPulse, Pulse, RedFlash, SolidColor};
pub use buffer::{BufferError, CircularBuffer};
pub use color::Color;
pub use command::AnimationCommand;
pub use config::{ConfigError, MovingPulseConfig, PulseConfig, RedFlashConfig, SolidColorConfig};
pub use registry::Animations;
pub use state::{AnimationKind, AnimationState, CommonState};
pub use strip::PixelStrip;
pub use time::{Clock, Millis};
pub use zone::{Zone, ZoneError, ZoneId, ZoneSet};

pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const WHITE: Color = Color::white(255);
pub const BLACK: Color = Color::OFF;
