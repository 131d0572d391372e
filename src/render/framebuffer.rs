//! Owned color buffer with bounds-checked 2D pixel access.
//!
//! Pixels are stored row-major: the pixel at column `x`, row `y` lives at
//! index `y * width + x`. [`DepthBuffer`](super::DepthBuffer) uses the same
//! layout so one index addresses both.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::colors::{self, Color};
use crate::error::RasterError;

/// A width × height grid of [`Color`] pixels.
///
/// Draw operations never allocate or resize it. Writing outside the grid is a
/// caller bug: [`set_pixel`](Self::set_pixel) panics, while
/// [`try_set_pixel`](Self::try_set_pixel) reports it as an error.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Create a buffer cleared to black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_color(width, height, colors::BLACK)
    }

    pub fn with_color(width: u32, height: u32, color: Color) -> Self {
        Self {
            pixels: vec![color; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Row-major index of an in-bounds pixel.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Write one pixel.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the buffer.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        assert!(
            self.contains(x, y),
            "pixel ({x}, {y}) is outside the {}x{} frame buffer",
            self.width,
            self.height
        );
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Write one pixel, reporting an out-of-bounds coordinate as an error.
    pub fn try_set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), RasterError> {
        if !self.contains(x, y) {
            return Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.pixels[idx] = color;
        Ok(())
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.contains(x, y) {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Copy the pixels into an `image` RGBA buffer, top row first.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(self.pixels[self.index(x as i32, y as i32)].to_rgba())
        })
    }

    /// Encode the buffer as PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), RasterError> {
        let path = path.as_ref();
        self.to_rgba_image().save(path)?;
        tracing::debug!(
            path = %path.display(),
            width = self.width,
            height = self.height,
            "saved frame buffer"
        );
        Ok(())
    }
}
