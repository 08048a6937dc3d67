//! Fixed-capacity ring queue with overwrite-on-full semantics.
//!
//! [`CircularBuffer`] keeps pending values (queued commands, colors, ...) in
//! FIFO order without allocating. Adding to a full buffer is not an error:
//! the oldest unread value is dropped to make room.
//!
//! Empty and full are told apart with the head and tail indices alone, which
//! leaves one slot permanently unused: a buffer with `C` slots holds at most
//! `C - 1` values.

/// Errors returned by [`CircularBuffer`] accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferError {
    /// The buffer holds no values.
    EmptyBuffer,
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BufferError::EmptyBuffer => write!(f, "buffer is empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BufferError {}

/// A ring queue with `C` slots and room for `C - 1` values.
///
/// # Type Parameters
/// * `T` - Element type
/// * `C` - Number of slots, at least 2
#[derive(Debug, Clone)]
pub struct CircularBuffer<T, const C: usize = 5> {
    buf: [Option<T>; C],
    head: usize,
    tail: usize,
}

impl<T, const C: usize> CircularBuffer<T, C> {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        const { assert!(C >= 2, "a circular buffer needs at least two slots") };

        Self {
            buf: core::array::from_fn(|_| None),
            head: 0,
            tail: 0,
        }
    }

    #[inline]
    fn next(index: usize) -> usize {
        if index + 1 >= C { 0 } else { index + 1 }
    }

    /// Appends `value` at the back.
    ///
    /// If the buffer is full, the oldest value is dropped.
    pub fn add(&mut self, value: T) {
        self.buf[self.head] = Some(value);
        self.head = Self::next(self.head);

        if self.head == self.tail {
            self.buf[self.tail] = None;
            self.tail = Self::next(self.tail);
        }
    }

    /// Drops the front value. Does nothing if the buffer is empty.
    pub fn remove(&mut self) {
        if !self.is_empty() {
            self.buf[self.tail] = None;
            self.tail = Self::next(self.tail);
        }
    }

    /// Removes and returns the front value.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.buf[self.tail].take();
        self.tail = Self::next(self.tail);
        value
    }

    /// Returns the front (oldest) value.
    ///
    /// # Errors
    /// * `EmptyBuffer` - The buffer holds no values
    pub fn peek(&self) -> Result<&T, BufferError> {
        if self.is_empty() {
            return Err(BufferError::EmptyBuffer);
        }
        self.buf[self.tail].as_ref().ok_or(BufferError::EmptyBuffer)
    }

    /// Returns the front value mutably.
    ///
    /// # Errors
    /// * `EmptyBuffer` - The buffer holds no values
    pub fn peek_mut(&mut self) -> Result<&mut T, BufferError> {
        if self.is_empty() {
            return Err(BufferError::EmptyBuffer);
        }
        self.buf[self.tail].as_mut().ok_or(BufferError::EmptyBuffer)
    }

    /// Number of values in the buffer.
    pub fn len(&self) -> usize {
        if self.head >= self.tail {
            self.head - self.tail
        } else {
            self.head + C - self.tail
        }
    }

    /// Returns true if the buffer holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns true if the next `add` will drop the oldest value.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Maximum number of values the buffer can hold, `C - 1`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        C - 1
    }

    /// Drops every value.
    ///
    /// Stale slots are overwritten by later `add` calls.
    pub fn clear(&mut self) {
        self.tail = self.head;
    }

    /// Replaces the whole queue with `value`.
    pub fn set_to(&mut self, value: T) {
        self.clear();
        self.add(value);
    }

    /// Iterates from the oldest to the newest value.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len()).filter_map(move |offset| self.buf[(self.tail + offset) % C].as_ref())
    }
}

impl<T, const C: usize> Default for CircularBuffer<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    #[test]
    fn new_buffer_is_empty() {
        let buffer: CircularBuffer<u8> = CircularBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.peek(), Err(BufferError::EmptyBuffer));
    }

    #[test]
    fn len_wraps_with_indices() {
        let mut buffer: CircularBuffer<u8, 3> = CircularBuffer::new();
        buffer.add(1);
        buffer.add(2);
        buffer.remove();
        buffer.add(3);
        // head has wrapped behind tail
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.peek(), Ok(&2));
    }

    #[test]
    fn stale_slots_after_clear_are_not_visible() {
        let mut buffer: CircularBuffer<u8> = CircularBuffer::new();
        buffer.add(1);
        buffer.add(2);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.iter().count(), 0);
        assert_eq!(buffer.pop(), None);
    }

    #[test]
    fn error_messages_format_correctly_for_display() {
        let message = format!("{}", BufferError::EmptyBuffer);
        assert!(message.contains("empty"));
    }
}
