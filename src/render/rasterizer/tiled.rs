//! Row-band parallel variant of the shaded fill.
//!
//! Each pixel's result depends only on the three vertices and its own depth
//! cell, so the bounding box can be split into disjoint bands of rows and
//! shaded on the rayon thread pool. The per-pixel kernel is the same one
//! [`fill_triangle_shaded`](super::fill_triangle_shaded) uses, so both produce
//! identical buffers.

use rayon::prelude::*;

use super::barycentric::TriangleSetup;
use crate::colors::Color;
use crate::math::vec3::IVec3;
use crate::render::depth::DepthBuffer;
use crate::render::framebuffer::FrameBuffer;

/// Default number of rows per band.
pub const DEFAULT_BAND_ROWS: usize = 16;

/// Parallel [`fill_triangle_shaded`](super::fill_triangle_shaded).
///
/// The bounding box rows are split into bands of `band_rows` rows (at least
/// one) and each band is shaded independently. Returns the number of pixels
/// written.
///
/// # Panics
/// Panics if `depth` and `image` differ in size.
pub fn fill_triangle_shaded_tiled(
    image: &mut FrameBuffer,
    depth: &mut DepthBuffer,
    points: [IVec3; 3],
    colors: [Color; 3],
    intensity: f32,
    band_rows: usize,
) -> usize {
    depth.assert_matches(image);
    let Some(setup) = TriangleSetup::new(points, colors, image.width(), image.height()) else {
        tracing::trace!(?points, "skipping triangle with no coverage");
        return 0;
    };

    let width = image.width() as usize;
    let band_len = band_rows.max(1) * width;
    let range = setup.row_range(width);
    let pixels = &mut image.pixels_mut()[range.clone()];
    let depths = &mut depth.as_mut_slice()[range];

    let written: usize = pixels
        .par_chunks_mut(band_len)
        .zip(depths.par_chunks_mut(band_len))
        .enumerate()
        .map(|(band, (pixels, depths))| {
            let first_row = setup.min_y + (band * band_rows.max(1)) as i32;
            setup.shade_rows(pixels, depths, width, first_row, intensity)
        })
        .sum();
    tracing::trace!(?points, written, band_rows, "filled shaded triangle in bands");
    written
}
