//! Error type for the recoverable failure modes of the crate.
//!
//! Contract violations inside the rasterizer (out-of-bounds pixels, mismatched
//! buffer sizes) panic instead; these variants cover the checked entry points
//! and file I/O.

use std::fmt;

#[derive(Debug)]
pub enum RasterError {
    /// A pixel coordinate fell outside the target buffer.
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    /// Two buffers that must share dimensions do not.
    DimensionMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },
    Image(image::ImageError),
    Io(std::io::Error),
    Config(toml::de::Error),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "pixel ({x}, {y}) is outside the {width}x{height} buffer"
            ),
            RasterError::DimensionMismatch { expected, found } => write!(
                f,
                "buffer is {}x{}, expected {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            RasterError::Image(e) => write!(f, "image error: {e}"),
            RasterError::Io(e) => write!(f, "IO error: {e}"),
            RasterError::Config(e) => write!(f, "config error: {e}"),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RasterError::Image(e) => Some(e),
            RasterError::Io(e) => Some(e),
            RasterError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for RasterError {
    fn from(e: image::ImageError) -> Self {
        RasterError::Image(e)
    }
}

impl From<std::io::Error> for RasterError {
    fn from(e: std::io::Error) -> Self {
        RasterError::Io(e)
    }
}

impl From<toml::de::Error> for RasterError {
    fn from(e: toml::de::Error) -> Self {
        RasterError::Config(e)
    }
}
