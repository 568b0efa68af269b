use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel, Primitive, Rgba, RgbaImage};
use num_traits::Zero;

use crate::{
    error::{Result, TonepunkerError},
    utils::pixel::Color,
};

/// Channels stored per pixel in a [Texture].
pub const PLANES: usize = 4;

/// Rectangle `[min_x, max_x) x [min_y, max_y)`.
///
/// The origin is not required to be `(0, 0)`. A rectangle whose max is
/// below its min on either axis is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    #[inline]
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Rectangle anchored at the origin.
    ///
    /// # Panics
    /// If a dimension does not fit in `i32`.
    #[inline]
    pub fn from_size(width: u32, height: u32) -> Self {
        let max_x = i32::try_from(width).expect("width exceeds i32::MAX");
        let max_y = i32::try_from(height).expect("height exceeds i32::MAX");
        Self::new(0, 0, max_x, max_y)
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        if self.max_x > self.min_x {
            self.max_x.abs_diff(self.min_x)
        } else {
            0
        }
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        if self.max_y > self.min_y {
            self.max_y.abs_diff(self.min_y)
        } else {
            0
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        self.min_x <= x && x < self.max_x && self.min_y <= y && y < self.max_y
    }
}

/// Read access to a rectangular grid of colors.
///
/// Implementations must answer [PixelSource::color_at] for every coordinate
/// inside [PixelSource::bounds]. Reading outside of it is a caller bug and
/// is allowed to panic.
pub trait PixelSource: Sync {
    fn bounds(&self) -> Bounds;

    fn color_at(&self, x: i32, y: i32) -> Color;
}

/// Dense 4 channel grid, row-major, with an arbitrary origin.
///
/// `Texture<u8>` is what the engine produces. Any primitive channel type can
/// be read back as a [PixelSource].
#[derive(Debug, Clone, PartialEq)]
pub struct Texture<T> {
    bounds: Bounds,
    buffer: Vec<T>,
}

impl<T> AsRef<[T]> for Texture<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.buffer
    }
}

impl<T> AsMut<[T]> for Texture<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.buffer
    }
}

impl<T> Texture<T> {
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.bounds.height()
    }

    /// Number of subpixels in a single row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width() as usize * PLANES
    }

    /// Offset of the first channel of `(x, y)` in the buffer.
    ///
    /// # Panics
    /// If `(x, y)` lies outside of the texture bounds.
    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.bounds.contains(x, y),
            "({x}, {y}) is outside of {:?}",
            self.bounds
        );
        let dx = x.abs_diff(self.bounds.min_x) as usize;
        let dy = y.abs_diff(self.bounds.min_y) as usize;
        (dy * self.width() as usize + dx) * PLANES
    }
}

impl<T: Primitive> Texture<T> {
    /// Allocate a zeroed texture.
    ///
    /// Fails instead of aborting when the buffer size overflows or the
    /// allocator refuses the reservation.
    pub fn try_new(bounds: Bounds) -> Result<Self> {
        let len = (bounds.width() as usize)
            .checked_mul(bounds.height() as usize)
            .and_then(|n| n.checked_mul(PLANES));
        let allocation_error = || TonepunkerError::Allocation {
            width: bounds.width(),
            height: bounds.height(),
        };

        let len = len.ok_or_else(allocation_error)?;
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|_| allocation_error())?;
        buffer.resize(len, <T as Zero>::zero());

        Ok(Self { bounds, buffer })
    }

    /// Wrap an existing buffer, `None` if its length doesn't match the bounds.
    pub fn from_raw(bounds: Bounds, buffer: Vec<T>) -> Option<Self> {
        let expected = bounds.width() as usize * bounds.height() as usize * PLANES;
        (buffer.len() == expected).then_some(Self { bounds, buffer })
    }

    /// # Panics
    /// If `(x, y)` lies outside of the texture bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Rgba<T> {
        let idx = self.index(x, y);
        Rgba([
            self.buffer[idx],
            self.buffer[idx + 1],
            self.buffer[idx + 2],
            self.buffer[idx + 3],
        ])
    }

    /// # Panics
    /// If `(x, y)` lies outside of the texture bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, pixel: Rgba<T>) {
        let idx = self.index(x, y);
        self.buffer[idx..idx + PLANES].copy_from_slice(&pixel.0);
    }

    /// Iterate rows as mutable slices of [Texture::row_len] subpixels.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, T> {
        let row_len = self.row_len().max(1);
        self.buffer.chunks_exact_mut(row_len)
    }
}

impl Texture<u8> {
    /// Write an 8 bit color.
    ///
    /// # Panics
    /// If `(x, y)` lies outside of the texture bounds.
    #[inline]
    pub fn set_color_at(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        self.set_pixel(x, y, color);
    }

    /// Copy an 8 bit RGBA image, anchored at the origin.
    pub fn from_rgba8_image(image: &RgbaImage) -> Self {
        Texture {
            bounds: Bounds::from_size(image.width(), image.height()),
            buffer: image.as_raw().clone(),
        }
    }
}

impl From<Texture<u8>> for RgbaImage {
    /// The origin of the texture is dropped, the image starts at `(0, 0)`.
    fn from(texture: Texture<u8>) -> Self {
        let (width, height) = (texture.width(), texture.height());
        ImageBuffer::from_raw(width, height, texture.buffer)
            .expect("texture buffer always matches its bounds")
    }
}

impl From<Texture<u8>> for DynamicImage {
    fn from(texture: Texture<u8>) -> Self {
        DynamicImage::ImageRgba8(texture.into())
    }
}

impl<T: Primitive + Sync> PixelSource for Texture<T> {
    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    fn color_at(&self, x: i32, y: i32) -> Color {
        Color::from_rgba(self.pixel(x, y))
    }
}

/// Converts a source coordinate of an origin anchored image.
///
/// # Panics
/// On negative coordinates.
#[inline]
fn image_coords(x: i32, y: i32) -> (u32, u32) {
    let x = u32::try_from(x).expect("image x coordinate is negative");
    let y = u32::try_from(y).expect("image y coordinate is negative");
    (x, y)
}

impl<P, C> PixelSource for ImageBuffer<P, C>
where
    P: Pixel + Sync,
    P::Subpixel: Sync,
    C: std::ops::Deref<Target = [P::Subpixel]> + Sync,
{
    #[inline]
    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width(), self.height())
    }

    #[inline]
    fn color_at(&self, x: i32, y: i32) -> Color {
        let (x, y) = image_coords(x, y);
        Color::from_rgba(self.get_pixel(x, y).to_rgba())
    }
}

impl PixelSource for DynamicImage {
    #[inline]
    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width(), self.height())
    }

    fn color_at(&self, x: i32, y: i32) -> Color {
        match self {
            DynamicImage::ImageLuma8(img) => img.color_at(x, y),
            DynamicImage::ImageLumaA8(img) => img.color_at(x, y),
            DynamicImage::ImageRgb8(img) => img.color_at(x, y),
            DynamicImage::ImageRgba8(img) => img.color_at(x, y),
            DynamicImage::ImageLuma16(img) => img.color_at(x, y),
            DynamicImage::ImageLumaA16(img) => img.color_at(x, y),
            DynamicImage::ImageRgb16(img) => img.color_at(x, y),
            DynamicImage::ImageRgba16(img) => img.color_at(x, y),
            DynamicImage::ImageRgb32F(img) => img.color_at(x, y),
            DynamicImage::ImageRgba32F(img) => img.color_at(x, y),
            other => {
                let (x, y) = image_coords(x, y);
                Color::from(other.get_pixel(x, y))
            }
        }
    }
}
