//! Shared test infrastructure for strip-animations integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use strip_animations::{Clock, Color, Millis, PixelStrip};

// ============================================================================
// Mock Strip
// ============================================================================

pub const MAX_PIXELS: usize = 128;

/// Mock strip that keeps the buffered pixel colors and counts flushes
pub struct MockStrip {
    pixels: heapless::Vec<Color, MAX_PIXELS>,
    shown: heapless::Vec<Color, MAX_PIXELS>,
    show_count: u32,
}

impl MockStrip {
    pub fn new(num_pixels: u16) -> Self {
        let mut pixels = heapless::Vec::new();
        pixels
            .resize(num_pixels as usize, Color::OFF)
            .expect("mock strip too long");
        Self {
            shown: pixels.clone(),
            pixels,
            show_count: 0,
        }
    }

    /// Colors as of the last `show`
    pub fn shown(&self) -> &[Color] {
        &self.shown
    }

    pub fn show_count(&self) -> u32 {
        self.show_count
    }

    /// Indices of every pixel that is not off, as of the last `show`
    pub fn lit_indices(&self) -> heapless::Vec<usize, MAX_PIXELS> {
        self.shown
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_off())
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns the single color shown on every pixel, if the strip is uniform
    pub fn uniform_color(&self) -> Option<Color> {
        let first = *self.shown.first()?;
        self.shown.iter().all(|c| *c == first).then_some(first)
    }
}

impl PixelStrip for MockStrip {
    fn num_pixels(&self) -> u16 {
        self.pixels.len() as u16
    }

    fn set_pixel_color(&mut self, index: u16, color: Color) {
        if let Some(pixel) = self.pixels.get_mut(index as usize) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        self.shown = self.pixels.clone();
        self.show_count += 1;
    }
}

// ============================================================================
// Mock Clock
// ============================================================================

/// Mock millisecond clock with controllable time
pub struct MockClock {
    now: Cell<Millis>,
}

impl MockClock {
    pub fn new(start: Millis) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Advance time, wrapping like a hardware counter
    pub fn advance(&self, millis: Millis) {
        self.now.set(self.now.get().wrapping_add(millis));
    }

    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }
}

impl Clock for MockClock {
    fn now(&self) -> Millis {
        self.now.get()
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use strip_animations::{BLACK, BLUE, GREEN, RED, WHITE};
