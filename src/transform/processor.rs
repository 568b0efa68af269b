use crate::{
    error::Result,
    texture::{PixelSource, Texture},
    transform::{engine::Strategy, traits::ColorTransform},
};

/// A transform bound to the engine.
///
/// Holds no per image state, a single processor can serve any number of
/// images, including from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Processor<T> {
    transform: T,
    strategy: Strategy,
}

impl<T: ColorTransform> Processor<T> {
    pub const fn new(transform: T) -> Self {
        Self {
            transform,
            strategy: Strategy::Par,
        }
    }

    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Produce a new texture with the transform applied to every pixel of `source`.
    pub fn process<S: PixelSource + ?Sized>(&self, source: &S) -> Result<Texture<u8>> {
        self.strategy.apply(source, &self.transform)
    }
}
