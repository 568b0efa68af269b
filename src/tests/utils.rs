use image::{Rgba, RgbaImage};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    texture::{Bounds, PLANES, Texture},
    utils::pixel::Color,
};

pub const BENCH_IMAGE_SIZE: u32 = 300;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5e91a)
}

pub fn rand_color(rng: &mut StdRng) -> Color {
    Color::new(
        rng.random::<u16>(),
        rng.random::<u16>(),
        rng.random::<u16>(),
        rng.random::<u16>(),
    )
}

pub fn gen_random_colors(count: usize) -> Vec<Color> {
    let mut rng = seeded_rng();
    (0..count).map(|_| rand_color(&mut rng)).collect()
}

/// 16 bit texture filled with noise.
pub fn gen_random_texture(bounds: Bounds) -> Texture<u16> {
    let mut rng = seeded_rng();
    let len = bounds.width() as usize * bounds.height() as usize * PLANES;
    let buffer = (0..len).map(|_| rng.random::<u16>()).collect();
    Texture::from_raw(bounds, buffer).unwrap()
}

pub fn gen_random_image(width: u32, height: u32) -> RgbaImage {
    let mut rng = seeded_rng();
    RgbaImage::from_fn(width, height, |_, _| Rgba(rng.random::<[u8; 4]>()))
}

/// The 2x2 red, green, blue, white image.
pub fn primaries_image() -> RgbaImage {
    let mut image = RgbaImage::new(2, 2);
    image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    image.put_pixel(1, 0, Rgba([0, 255, 0, 255]));
    image.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
    image.put_pixel(1, 1, Rgba([255, 255, 255, 255]));
    image
}
