//! Per-pixel depth store for hidden surface removal.
//!
//! # Convention
//!
//! Larger depth values are closer to the viewer: a fragment passes the depth
//! test when the stored value is strictly less than its own depth. A fresh
//! buffer holds [`DepthBuffer::FAR`] (negative infinity) everywhere, meaning
//! "nothing drawn yet", so the first fragment at any pixel always passes.

use super::framebuffer::FrameBuffer;
use crate::error::RasterError;

/// Row-major `width * height` depth values, laid out like [`FrameBuffer`].
#[derive(Clone, Debug, PartialEq)]
pub struct DepthBuffer {
    depths: Vec<f32>,
    width: u32,
    height: u32,
}

impl DepthBuffer {
    /// Sentinel for a pixel nothing has been drawn to.
    pub const FAR: f32 = f32::NEG_INFINITY;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            depths: vec![Self::FAR; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Create a depth buffer sized to match `image`.
    pub fn for_image(image: &FrameBuffer) -> Self {
        Self::new(image.width(), image.height())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Stored depth at (x, y), or None if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<f32> {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            Some(self.depths[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Reset every pixel to [`DepthBuffer::FAR`].
    pub fn clear(&mut self) {
        self.depths.fill(Self::FAR);
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.depths
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.depths
    }

    /// Checked form of the size agreement the shaded fills require.
    pub fn check_matches(&self, image: &FrameBuffer) -> Result<(), RasterError> {
        if self.width == image.width() && self.height == image.height() {
            return Ok(());
        }
        Err(RasterError::DimensionMismatch {
            expected: (image.width(), image.height()),
            found: (self.width, self.height),
        })
    }

    /// Assert that this buffer and `image` share dimensions.
    ///
    /// # Panics
    /// Panics on mismatch; indexing both with one row-major index would
    /// otherwise address different pixels.
    pub(crate) fn assert_matches(&self, image: &FrameBuffer) {
        assert!(
            self.width == image.width() && self.height == image.height(),
            "depth buffer is {}x{} but frame buffer is {}x{}",
            self.width,
            self.height,
            image.width(),
            image.height()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_matches_reports_both_sizes() {
        let image = FrameBuffer::new(4, 3);
        assert!(DepthBuffer::for_image(&image).check_matches(&image).is_ok());

        let err = DepthBuffer::new(3, 4).check_matches(&image).unwrap_err();
        assert!(matches!(
            err,
            RasterError::DimensionMismatch {
                expected: (4, 3),
                found: (3, 4)
            }
        ));
    }

    #[test]
    fn new_buffer_is_far_everywhere() {
        let depth = DepthBuffer::new(3, 2);
        assert_eq!(depth.as_slice().len(), 6);
        assert!(depth.as_slice().iter().all(|&z| z == DepthBuffer::FAR));
    }

    #[test]
    fn clear_restores_sentinel() {
        let mut depth = DepthBuffer::new(2, 2);
        depth.as_mut_slice()[3] = 0.5;
        assert_eq!(depth.get(1, 1), Some(0.5));
        depth.clear();
        assert_eq!(depth.get(1, 1), Some(DepthBuffer::FAR));
        assert_eq!(depth.get(2, 0), None);
    }

    #[test]
    #[should_panic(expected = "depth buffer is 2x2")]
    fn mismatched_sizes_panic() {
        let image = FrameBuffer::new(3, 2);
        DepthBuffer::new(2, 2).assert_matches(&image);
    }
}
