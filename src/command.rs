//! Command-based animation selection.

use crate::color::Color;
use crate::state::AnimationKind;

/// Selects an animation and its parameters for a track.
///
/// Commands are plain values so hosts can queue them (see
/// [`Zone`](crate::zone::Zone)) and apply them later with
/// [`Animations::apply`](crate::registry::Animations::apply).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationCommand {
    /// Sweep a block of `color` down the strip.
    MovingPulse { color: Color },
    /// Breathe `color`, starting `initial_phase` of the way into the cycle.
    Pulse { color: Color, initial_phase: f32 },
    /// Flash white to red to white once.
    RedFlash { is_rgbw: bool },
    /// Hold `color`.
    Solid { color: Color },
    /// Turn every pixel off.
    #[default]
    Off,
}

impl AnimationCommand {
    /// The animation variant this command starts.
    pub const fn kind(&self) -> AnimationKind {
        match self {
            AnimationCommand::MovingPulse { .. } => AnimationKind::MovingPulse,
            AnimationCommand::Pulse { .. } => AnimationKind::Pulse,
            AnimationCommand::RedFlash { .. } => AnimationKind::RedFlash,
            AnimationCommand::Solid { .. } | AnimationCommand::Off => AnimationKind::SolidColor,
        }
    }
}
