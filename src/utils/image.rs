use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::{
    error::{Result, TonepunkerError},
    texture::Texture,
};

/// Containers the encoder writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    /// Extension used for generated file names.
    pub const fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
        }
    }

    pub const fn image_format(&self) -> ImageFormat {
        match self {
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Png => ImageFormat::Png,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TonepunkerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            other => Err(TonepunkerError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl TryFrom<ImageFormat> for OutputFormat {
    type Error = TonepunkerError;

    fn try_from(format: ImageFormat) -> Result<Self> {
        match format {
            ImageFormat::Jpeg => Ok(OutputFormat::Jpeg),
            ImageFormat::Png => Ok(OutputFormat::Png),
            other => Err(TonepunkerError::UnsupportedFormat(
                other
                    .extensions_str()
                    .first()
                    .map_or_else(|| format!("{other:?}"), |ext| ext.to_string()),
            )),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Decode an image, guessing its format from the content.
///
/// Returns the detected format alongside the pixels, `None` when the
/// container was decoded without being identified.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<(DynamicImage, Option<ImageFormat>)> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let image = reader.decode()?;
    Ok((image, format))
}

/// Encode a texture to `path`.
///
/// JPEG has no alpha channel, the texture is flattened to RGB first.
pub fn write_image<P: AsRef<Path>>(texture: Texture<u8>, path: P, format: OutputFormat) -> Result {
    let image = DynamicImage::from(texture);
    let image = match format {
        OutputFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
        OutputFormat::Png => image,
    };

    let file = &mut BufWriter::new(File::create(path)?);
    image
        .write_to(&mut *file, format.image_format())
        .map_err(TonepunkerError::ImageEncode)?;
    // errors of the final flush are lost on drop
    file.flush()?;
    Ok(())
}
