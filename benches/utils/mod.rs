use image::{Rgba, RgbaImage};
use rand::Rng;

pub fn rand_pixel(rng: &mut rand::rngs::ThreadRng) -> Rgba<u8> {
    Rgba(rng.random::<[u8; 4]>())
}

pub fn gen_random_image(size: u32) -> RgbaImage {
    let mut rng = rand::rng();
    RgbaImage::from_fn(size, size, |_, _| rand_pixel(&mut rng))
}
