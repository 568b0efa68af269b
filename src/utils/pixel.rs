use image::{Primitive, Rgba};
use num_traits::ToPrimitive;

/// Largest intensity representable by a 16-bit channel.
pub const MAX_16BIT_COLOR: f64 = 65_535.0;

/// Color sample with 16 bits per channel.
///
/// Every [PixelSource](crate::texture::PixelSource) hands out colors at this
/// precision, whatever the depth of the decoded image, so transforms can do
/// their arithmetic before narrowing to the 8 bit output.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Hash)]
pub struct Color {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Color {
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Widen an 8 bit sample, `v -> v * 257`.
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as u16 * 257,
            g: g as u16 * 257,
            b: b as u16 * 257,
            a: a as u16 * 257,
        }
    }

    /// Widen a pixel of any primitive channel type.
    #[inline]
    pub fn from_rgba<T: Primitive>(pixel: Rgba<T>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self {
            r: widen(r),
            g: widen(g),
            b: widen(b),
            a: widen(a),
        }
    }

    /// Keep the high byte of every channel.
    #[inline]
    pub const fn to_rgba8(self) -> Rgba<u8> {
        Rgba([
            narrow(self.r),
            narrow(self.g),
            narrow(self.b),
            narrow(self.a),
        ])
    }
}

impl From<Rgba<u8>> for Color {
    #[inline]
    fn from(value: Rgba<u8>) -> Self {
        let [r, g, b, a] = value.0;
        Color::from_u8(r, g, b, a)
    }
}

impl From<Rgba<u16>> for Color {
    #[inline]
    fn from(value: Rgba<u16>) -> Self {
        let [r, g, b, a] = value.0;
        Color::new(r, g, b, a)
    }
}

/// Scale a channel value onto the 16 bit range.
///
/// Integer channels map their full range, `u8` being equivalent to `v * 257`.
/// Float channels are expected in `[0.0, 1.0]` and are clamped.
#[inline]
pub fn widen<T: Primitive + ToPrimitive>(value: T) -> u16 {
    let max = T::DEFAULT_MAX_VALUE.to_f64().unwrap_or(1.0);
    let value = value.to_f64().unwrap_or(0.0);
    clamp_16bit((value / max * MAX_16BIT_COLOR).round())
}

/// Keep the high byte of a 16 bit channel, `v >> 8`.
#[inline]
pub const fn narrow(value: u16) -> u8 {
    (value >> 8) as u8
}

/// Clamp an intermediate value to `[0, 65535]` and truncate it.
#[inline]
pub fn clamp_16bit(value: f64) -> u16 {
    value.clamp(0.0, MAX_16BIT_COLOR) as u16
}
