use image::Rgba;

use crate::utils::pixel::Color;

/// Core trait for a per pixel color transform.
///
/// Implementations must be pure and total: every input maps to an output,
/// no state is mutated, and the transform may be called from any worker
/// thread at the same time.
pub trait ColorTransform: Sync {
    /// Map a 16 bit sample onto an 8 bit output sample.
    fn transform(&self, color: Color) -> Rgba<u8>;
}

// Blanket implementation: plain functions and closures are transforms
impl<F> ColorTransform for F
where
    F: Fn(Color) -> Rgba<u8> + Sync,
{
    #[inline(always)]
    fn transform(&self, color: Color) -> Rgba<u8> {
        self(color)
    }
}
