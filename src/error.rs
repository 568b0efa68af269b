use std::fmt;

/// The main error type for the tonepunker crate
#[derive(Debug)]
pub enum TonepunkerError {
    /// Error occurred while reading or decoding an image
    ImageDecode(image::ImageError),

    /// Error occurred while writing or encoding an image
    ImageEncode(image::ImageError),

    /// Error occurred during I/O operations (file read/write)
    Io(std::io::Error),

    /// Filter name outside of `sepia|grayscale|invert`
    UnknownFilter(String),

    /// Output format tag the encoder does not handle
    UnsupportedFormat(String),

    /// Invalid or incomplete processing config
    Config(String),

    /// Config file is not valid JSON
    Json(json::Error),

    /// The output texture could not be allocated
    Allocation { width: u32, height: u32 },
}

impl fmt::Display for TonepunkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TonepunkerError::ImageDecode(e) => write!(f, "Image decode error: {}", e),
            TonepunkerError::ImageEncode(e) => write!(f, "Image encode error: {}", e),
            TonepunkerError::Io(e) => write!(f, "I/O error: {}", e),
            TonepunkerError::UnknownFilter(name) => write!(
                f,
                "unknown filter type: '{}' (expected sepia|grayscale|invert)",
                name
            ),
            TonepunkerError::UnsupportedFormat(tag) => {
                write!(f, "unsupported file type: '{}' (expected jpeg|png)", tag)
            }
            TonepunkerError::Config(msg) => write!(f, "ConfigParseError {}", msg),
            TonepunkerError::Json(e) => write!(f, "ConfigParseError {}", e),
            TonepunkerError::Allocation { width, height } => {
                write!(f, "could not allocate a {}x{} texture", width, height)
            }
        }
    }
}

impl std::error::Error for TonepunkerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TonepunkerError::ImageDecode(e) | TonepunkerError::ImageEncode(e) => Some(e),
            TonepunkerError::Io(e) => Some(e),
            TonepunkerError::Json(e) => Some(e),
            _ => None,
        }
    }
}

// From implementations for automatic conversion from common error types

impl From<image::ImageError> for TonepunkerError {
    fn from(err: image::ImageError) -> Self {
        // Distinguish between decode and encode errors based on the error kind
        match &err {
            image::ImageError::Encoding(_) => TonepunkerError::ImageEncode(err),
            _ => TonepunkerError::ImageDecode(err),
        }
    }
}

impl From<std::io::Error> for TonepunkerError {
    fn from(err: std::io::Error) -> Self {
        TonepunkerError::Io(err)
    }
}

impl From<json::Error> for TonepunkerError {
    fn from(err: json::Error) -> Self {
        TonepunkerError::Json(err)
    }
}

// Convenience type alias for Results using TonepunkerError
pub type Result<T = ()> = std::result::Result<T, TonepunkerError>;
