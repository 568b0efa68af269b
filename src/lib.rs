use std::path::{Path, PathBuf};

use tracing::info;

use crate::{config::ProcessConfig, utils::prelude::*};

pub mod config;
pub mod error;
pub mod texture;
pub mod transform;
pub mod utils;


pub mod prelude {
    pub use crate::texture::{Bounds, PixelSource, Texture};
    pub use crate::transform::{
        engine::{Strategy, apply},
        filters::{Filter, grayscale, invert, sepia},
        processor::Processor,
        traits::ColorTransform,
    };
    pub use crate::utils::prelude::*;
}

/// Decode `input`, apply the configured filter and write the result next to it.
///
/// Returns the path of the written image. Format problems are reported
/// before any pixel is processed.
pub fn run(config: &ProcessConfig, input: &Path) -> error::Result<PathBuf> {
    let (image, detected) = read_image(input)?;
    let (format, extension) = config.resolve_format(detected)?;
    let output = output_path(input, config.filter.name(), &extension);

    info!(
        filter = %config.filter,
        input = %input.display(),
        width = image.width(),
        height = image.height(),
        "processing image"
    );

    let texture = config.filter.processor().process(&image)?;
    // decoded pixels are no longer needed while encoding
    drop(image);

    write_image(texture, &output, format)?;

    info!(output = %output.display(), %format, "image written");
    Ok(output)
}
