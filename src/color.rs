//! Four-channel pixel color.
//!
//! A [`Color`] addresses the red, green, blue and white channels of one RGBW
//! pixel. It can also be packed into a single `u32` word laid out as
//! `0xWWRRGGBB`:
//!
//! | bits   | channel |
//! |--------|---------|
//! | 24..32 | white   |
//! | 16..24 | red     |
//! | 8..16  | green   |
//! | 0..8   | blue    |
//!
//! The packed layout is an internal convenience and says nothing about the
//! wire order of any particular LED chipset.
//!
//! HSV helpers go through `palette` so hue wheels and similar effects can be
//! expressed without hand-written color math.

use palette::{FromColor, Hsv, Srgb};

/// An RGBW pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub white: u8,
}

impl Color {
    /// All channels off.
    pub const OFF: Color = Color::new(0, 0, 0, 0);

    /// Creates a color from all four channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Creates a color with the white channel off.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 0)
    }

    /// Creates a color that only uses the white channel.
    #[inline]
    pub const fn white(white: u8) -> Self {
        Self::new(0, 0, 0, white)
    }

    /// Unpacks a `0xWWRRGGBB` word.
    #[inline]
    pub const fn from_packed(word: u32) -> Self {
        let [white, red, green, blue] = word.to_be_bytes();
        Self::new(red, green, blue, white)
    }

    /// Packs the color into a `0xWWRRGGBB` word.
    #[inline]
    pub const fn packed(self) -> u32 {
        u32::from_be_bytes([self.white, self.red, self.green, self.blue])
    }

    /// Returns true if every channel is zero.
    #[inline]
    pub const fn is_off(self) -> bool {
        self.packed() == 0
    }

    /// Multiplies every channel by `factor`, truncating toward zero.
    ///
    /// `factor` is expected in `[0.0, 1.0]`; results saturate at the channel
    /// bounds.
    pub fn scale(self, factor: f32) -> Self {
        let channel = |value: u8| (f32::from(value) * factor) as u8;
        Self::new(
            channel(self.red),
            channel(self.green),
            channel(self.blue),
            channel(self.white),
        )
    }
}

impl From<u32> for Color {
    fn from(word: u32) -> Self {
        Color::from_packed(word)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.packed()
    }
}

impl From<Srgb<u8>> for Color {
    fn from(srgb: Srgb<u8>) -> Self {
        Color::rgb(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<Color> for Srgb<u8> {
    /// Drops the white channel.
    fn from(color: Color) -> Self {
        Srgb::new(color.red, color.green, color.blue)
    }
}

/// Creates a color from HSV components.
///
/// `hue` is in degrees, `saturation` and `value` in `[0.0, 1.0]`. The white
/// channel is left off.
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Color {
    let rgb = Srgb::from_color(Hsv::new(hue, saturation, value));
    Color::from(rgb.into_format::<u8>())
}

/// Creates a fully saturated, full brightness color from a hue in degrees.
#[inline]
pub fn hue(hue: f32) -> Color {
    hsv(hue, 1.0, 1.0)
}
