pub mod image;
pub mod path;
pub mod pixel;

pub mod prelude {
    pub use super::{
        image::{OutputFormat, read_image, write_image},
        path::output_path,
        pixel::Color,
    };
}
