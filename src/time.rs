//! Millisecond clock abstraction.
//!
//! Animations read time as a free-running `u32` millisecond counter, the kind
//! most embedded HALs expose. The counter wraps after roughly 49.7 days, so
//! every elapsed-time computation goes through [`elapsed`], which uses
//! wrapping subtraction.

/// A reading of the millisecond clock.
pub type Millis = u32;

/// Trait for abstracting the host's millisecond clock.
pub trait Clock {
    /// Returns the current clock reading.
    fn now(&self) -> Millis;
}

/// Returns the time elapsed between `since` and `now`.
///
/// Correct across a single wrap of the counter.
#[inline]
pub const fn elapsed(now: Millis, since: Millis) -> Millis {
    now.wrapping_sub(since)
}
