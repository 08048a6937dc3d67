//! Strips paired with their animation state and a queue of pending commands.
//!
//! A [`Zone`] is one physical strip (or strip segment with its own driver)
//! running one track. A [`ZoneSet`] is a fixed-size arena of zones addressed
//! by [`ZoneId`], serviced together once per tick.

use crate::animation::AnimationError;
use crate::buffer::CircularBuffer;
use crate::command::AnimationCommand;
use crate::registry::Animations;
use crate::state::{AnimationKind, AnimationState};
use crate::strip::PixelStrip;
use crate::time::Millis;

/// An identifier for a zone within a [`ZoneSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneId(pub usize);

impl From<usize> for ZoneId {
    fn from(id: usize) -> Self {
        ZoneId(id)
    }
}

impl From<ZoneId> for usize {
    fn from(id: ZoneId) -> Self {
        id.0
    }
}

/// Errors that can occur during zone set operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ZoneError {
    /// The specified zone does not exist in the set.
    InvalidZoneId(ZoneId),

    /// Attempted to add a zone with an ID that already exists.
    DuplicateZoneId(ZoneId),

    /// The zone ID exceeds the set's capacity.
    ZoneIdOutOfBounds { id: ZoneId, capacity: usize },

    /// Rendering a zone failed.
    Animation(AnimationError),
}

impl core::fmt::Display for ZoneError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ZoneError::InvalidZoneId(id) => {
                write!(f, "zone {} does not exist", id.0)
            }
            ZoneError::DuplicateZoneId(id) => {
                write!(f, "zone {} already exists", id.0)
            }
            ZoneError::ZoneIdOutOfBounds { id, capacity } => {
                write!(f, "zone {} exceeds capacity of {}", id.0, capacity)
            }
            ZoneError::Animation(err) => write!(f, "animation error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZoneError {}

impl From<AnimationError> for ZoneError {
    fn from(err: AnimationError) -> Self {
        ZoneError::Animation(err)
    }
}

/// One strip, its track state and the commands waiting to run on it.
///
/// Queued commands start when the current animation has completed at least
/// one cycle (or when nothing is running yet). Up to four commands can wait;
/// queuing a fifth drops the oldest.
pub struct Zone<S: PixelStrip> {
    strip: S,
    state: AnimationState,
    pending: CircularBuffer<AnimationCommand>,
}

impl<S: PixelStrip> Zone<S> {
    /// Creates an idle zone. Nothing is drawn until a command is applied.
    pub fn new(strip: S) -> Self {
        Self {
            strip,
            state: AnimationState::Uninitialized,
            pending: CircularBuffer::new(),
        }
    }

    /// Starts `command` immediately and drops anything queued.
    pub fn play(
        &mut self,
        animations: &Animations,
        now: Millis,
        command: AnimationCommand,
    ) -> AnimationKind {
        self.pending.clear();
        animations.apply(now, command, &mut self.state, &self.strip)
    }

    /// Queues `command` behind the current animation.
    pub fn enqueue(&mut self, command: AnimationCommand) {
        self.pending.add(command);
    }

    /// Replaces everything queued with `command`.
    pub fn replace_pending(&mut self, command: AnimationCommand) {
        self.pending.set_to(command);
    }

    /// Advances the zone by one tick.
    ///
    /// Starts the next queued command if the current animation is finished,
    /// then renders a frame if anything is running.
    ///
    /// A red flash plays once: when it completes with nothing queued, the
    /// zone switches to [`AnimationCommand::Off`].
    ///
    /// # Errors
    /// Returns the rendering error of the current state.
    pub fn service(&mut self, animations: &Animations, now: Millis) -> Result<(), AnimationError> {
        let finished = !self.state.is_initialized() || animations.done(now, &self.state)?;

        if finished && let Some(command) = self.pending.pop() {
            crate::debug!("starting queued {} animation", command.kind());
            animations.apply(now, command, &mut self.state, &self.strip);
        } else if finished && self.state.kind() == Some(AnimationKind::RedFlash) {
            crate::debug!("red flash complete, turning zone off");
            animations.apply(now, AnimationCommand::Off, &mut self.state, &self.strip);
        }

        if self.state.is_initialized() {
            animations.do_frame(now, &self.state, &mut self.strip)?;
        }
        Ok(())
    }

    /// Stops the current animation and drops anything queued.
    ///
    /// The strip keeps showing its last frame.
    pub fn reset(&mut self) {
        self.state.reset();
        self.pending.clear();
    }

    /// Returns the current track state.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Returns the commands waiting to run.
    pub fn pending(&self) -> &CircularBuffer<AnimationCommand> {
        &self.pending
    }

    /// Returns the strip driven by this zone.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Returns the strip mutably, e.g. to adjust driver settings.
    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }
}

/// Manages a set of zones sharing one [`Animations`] registry.
///
/// # Type Parameters
/// * `'a` - Lifetime of the registry reference
/// * `S` - Strip implementation type (same for all zones)
/// * `MAX_ZONES` - Maximum number of zones this set can hold
pub struct ZoneSet<'a, S: PixelStrip, const MAX_ZONES: usize> {
    zones: [Option<Zone<S>>; MAX_ZONES],
    animations: &'a Animations,
}

impl<'a, S: PixelStrip, const MAX_ZONES: usize> ZoneSet<'a, S, MAX_ZONES> {
    /// Creates an empty zone set.
    pub fn new(animations: &'a Animations) -> Self {
        Self {
            zones: core::array::from_fn(|_| None),
            animations,
        }
    }

    /// Adds a zone driving `strip` under the given ID.
    ///
    /// # Errors
    /// * `DuplicateZoneId` - A zone with this ID already exists
    /// * `ZoneIdOutOfBounds` - The ID exceeds the set's capacity
    pub fn add_zone(&mut self, id: ZoneId, strip: S) -> Result<(), ZoneError> {
        let idx = id.0;

        if idx >= MAX_ZONES {
            return Err(ZoneError::ZoneIdOutOfBounds {
                id,
                capacity: MAX_ZONES,
            });
        }

        if self.zones[idx].is_some() {
            return Err(ZoneError::DuplicateZoneId(id));
        }

        self.zones[idx] = Some(Zone::new(strip));
        Ok(())
    }

    /// Returns the zone with the given ID.
    ///
    /// # Errors
    /// Returns `InvalidZoneId` if the zone does not exist.
    pub fn zone(&self, id: ZoneId) -> Result<&Zone<S>, ZoneError> {
        self.zones
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(ZoneError::InvalidZoneId(id))
    }

    /// Returns the zone with the given ID mutably.
    ///
    /// # Errors
    /// Returns `InvalidZoneId` if the zone does not exist.
    pub fn zone_mut(&mut self, id: ZoneId) -> Result<&mut Zone<S>, ZoneError> {
        self.zones
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(ZoneError::InvalidZoneId(id))
    }

    /// Starts `command` on a zone immediately.
    pub fn play(
        &mut self,
        id: ZoneId,
        now: Millis,
        command: AnimationCommand,
    ) -> Result<AnimationKind, ZoneError> {
        let animations = self.animations;
        Ok(self.zone_mut(id)?.play(animations, now, command))
    }

    /// Queues `command` on a zone.
    pub fn enqueue(&mut self, id: ZoneId, command: AnimationCommand) -> Result<(), ZoneError> {
        self.zone_mut(id)?.enqueue(command);
        Ok(())
    }

    /// Services every zone for this tick.
    ///
    /// # Errors
    /// Returns the first rendering error. Zones after the failing one are not
    /// serviced this tick.
    pub fn service_all(&mut self, now: Millis) -> Result<(), ZoneError> {
        for zone in self.zones.iter_mut().flatten() {
            zone.service(self.animations, now)?;
        }
        Ok(())
    }

    /// IDs of all zones in the set, in ascending order.
    pub fn ids(&self) -> heapless::Vec<ZoneId, MAX_ZONES> {
        self.zones
            .iter()
            .enumerate()
            .filter(|(_, zone)| zone.is_some())
            .map(|(idx, _)| ZoneId(idx))
            .collect()
    }

    /// Returns the number of zones in the set.
    pub fn len(&self) -> usize {
        self.zones.iter().filter(|z| z.is_some()).count()
    }

    /// Returns true if the set contains no zones.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the set contains a zone with the given ID.
    pub fn contains(&self, id: ZoneId) -> bool {
        self.zones.get(id.0).is_some_and(Option::is_some)
    }
}
