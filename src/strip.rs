//! Pixel strip hardware abstraction.

use crate::color::Color;

/// Trait for abstracting an addressable LED strip.
///
/// Implement this for your driver (RMT, SPI, PIO, bit-banged GPIO, ...).
/// Writes are buffered by the driver and only reach the LEDs on [`show`].
///
/// [`show`]: PixelStrip::show
pub trait PixelStrip {
    /// Number of pixels on the strip.
    fn num_pixels(&self) -> u16;

    /// Buffers `color` for the pixel at `index`.
    ///
    /// Indices at or past [`num_pixels`](PixelStrip::num_pixels) should be
    /// ignored. Handle any hardware errors internally - this method cannot
    /// fail.
    fn set_pixel_color(&mut self, index: u16, color: Color);

    /// Flushes buffered colors to the hardware.
    ///
    /// Must not wait for the transmission to complete.
    fn show(&mut self);
}
