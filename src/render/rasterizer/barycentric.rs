//! Bounding-box triangle fill with barycentric interpolation and depth test.
//!
//! # Barycentric Coordinates
//!
//! Any point P in the plane of triangle ABC can be written as
//!
//! ```text
//! P = A + s * AB + t * AC
//!   = (1 - s - t) * A + s * B + t * C
//! ```
//!
//! Solving `AP = s * AB + t * AC` with 2D cross products gives
//!
//! ```text
//! denom = AB.x * AC.y - AB.y * AC.x
//! s     = (AC.y * AP.x - AC.x * AP.y) / denom
//! t     = (AB.x * AP.y - AB.y * AP.x) / denom
//! ```
//!
//! - `s < 0` or `t < 0`: P is on the wrong side of AC or AB
//! - `s + t > 1`: P has crossed edge BC
//!
//! so P is inside the closed triangle iff `s >= 0 && t >= 0 && s + t <= 1`.
//! `denom` is twice the signed area; zero means the triangle is degenerate and
//! covers nothing.
//!
//! The weights `(1 - s - t, s, t)` interpolate any per-vertex attribute.
//!
//! # Depth Test
//!
//! A covered pixel is written only if the stored depth is strictly less than
//! the interpolated one (larger is closer, see
//! [`DepthBuffer`](crate::render::DepthBuffer)). Equal depths keep whatever was
//! drawn first.

use crate::colors::{channel_to_byte, Color};
use crate::math::vec2::IVec2;
use crate::math::vec3::IVec3;
use crate::render::depth::DepthBuffer;
use crate::render::framebuffer::FrameBuffer;

/// Interpolated values at one covered pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Fragment {
    pub color: Color,
    pub depth: f32,
}

/// Per-triangle state shared by every pixel of one shaded fill.
///
/// Vertices are stored in a canonical order (by row, then column) with their
/// colors, so the same triangle given in any vertex order produces
/// bit-identical fragments.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TriangleSetup {
    points: [IVec3; 3],
    colors: [Color; 3],
    // i128: with i32 vertices each product reaches 2^64.
    ab: (i128, i128),
    ac: (i128, i128),
    /// Twice the triangle area, made positive.
    denom: i128,
    /// +1 or -1: the sign that turned the raw determinant positive.
    orientation: i128,
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl TriangleSetup {
    /// Prepares a triangle for filling into a `width` × `height` target.
    ///
    /// Returns `None` when nothing can be covered: a zero-area triangle or a
    /// bounding box entirely outside the target.
    pub fn new(points: [IVec3; 3], colors: [Color; 3], width: u32, height: u32) -> Option<Self> {
        let mut vertices = [(points[0], colors[0]), (points[1], colors[1]), (points[2], colors[2])];
        vertices.sort_by(|a, b| a.0.xy().cmp_yx(&b.0.xy()));
        let points = vertices.map(|(p, _)| p);
        let colors = vertices.map(|(_, c)| c);

        let [a, b, c] = points;
        let ab = (b.x as i128 - a.x as i128, b.y as i128 - a.y as i128);
        let ac = (c.x as i128 - a.x as i128, c.y as i128 - a.y as i128);
        let raw = ab.0 * ac.1 - ab.1 * ac.0;
        if raw == 0 {
            return None;
        }

        if width == 0 || height == 0 {
            return None;
        }
        let min_x = a.x.min(b.x).min(c.x).max(0);
        let max_x = a.x.max(b.x).max(c.x).min(width as i32 - 1);
        let min_y = a.y.min(b.y).min(c.y).max(0);
        let max_y = a.y.max(b.y).max(c.y).min(height as i32 - 1);
        if min_x > max_x || min_y > max_y {
            return None;
        }

        Some(Self {
            points,
            colors,
            ab,
            ac,
            denom: raw.abs(),
            orientation: raw.signum(),
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// Weights `(s, t)` of pixel `p` if it lies inside the closed triangle.
    ///
    /// The inside test runs on the exact integer numerators, so pixels on an
    /// edge are never lost to rounding.
    #[inline]
    fn weights(&self, p: IVec2) -> Option<(f64, f64)> {
        let a = self.points[0];
        let ap = (p.x as i128 - a.x as i128, p.y as i128 - a.y as i128);
        let s_num = (self.ac.1 * ap.0 - self.ac.0 * ap.1) * self.orientation;
        let t_num = (self.ab.0 * ap.1 - self.ab.1 * ap.0) * self.orientation;
        if s_num < 0 || t_num < 0 || s_num + t_num > self.denom {
            return None;
        }
        let denom = self.denom as f64;
        Some((s_num as f64 / denom, t_num as f64 / denom))
    }

    /// Interpolated color and depth at pixel `p`, or `None` if `p` is outside.
    ///
    /// Each channel is scaled by `intensity` and clamped to the byte range; a
    /// NaN or negative intensity yields black. Alpha is always opaque.
    #[inline]
    pub fn fragment(&self, p: IVec2, intensity: f32) -> Option<Fragment> {
        let (s, t) = self.weights(p)?;
        let r = 1.0 - s - t;
        let [p0, p1, p2] = self.points;
        let [c0, c1, c2] = self.colors;
        let intensity = intensity as f64;

        let depth = (r * p0.z as f64 + s * p1.z as f64 + t * p2.z as f64) as f32;
        let channel = |v0: u8, v1: u8, v2: u8| {
            channel_to_byte((r * v0 as f64 + s * v1 as f64 + t * v2 as f64) * intensity)
        };

        Some(Fragment {
            color: Color::new(
                channel(c0.r, c1.r, c2.r),
                channel(c0.g, c1.g, c2.g),
                channel(c0.b, c1.b, c2.b),
                255,
            ),
            depth,
        })
    }

    /// Shades the rows of the bounding box held in `pixels` / `depths`.
    ///
    /// Both slices hold whole rows of a `width`-wide buffer starting at row
    /// `first_row`. Returns the number of pixels that passed the depth test.
    pub fn shade_rows(
        &self,
        pixels: &mut [Color],
        depths: &mut [f32],
        width: usize,
        first_row: i32,
        intensity: f32,
    ) -> usize {
        debug_assert_eq!(pixels.len(), depths.len());
        let rows = pixels.len() / width;
        let mut written = 0;
        for row in 0..rows {
            let y = first_row + row as i32;
            if y < self.min_y || y > self.max_y {
                continue;
            }
            for x in self.min_x..=self.max_x {
                let Some(fragment) = self.fragment(IVec2::new(x, y), intensity) else {
                    continue;
                };
                let idx = row * width + x as usize;
                if depths[idx] < fragment.depth {
                    pixels[idx] = fragment.color;
                    depths[idx] = fragment.depth;
                    written += 1;
                }
            }
        }
        written
    }

    /// Row-major index range covering the bounding box rows.
    pub fn row_range(&self, width: usize) -> std::ops::Range<usize> {
        self.min_y as usize * width..(self.max_y as usize + 1) * width
    }
}

/// Fills a triangle with interpolated vertex colors, depth-tested against
/// `depth`.
///
/// `points` carry screen position and depth; `colors[i]` belongs to
/// `points[i]`. Every channel is multiplied by `intensity` (typically a
/// lighting term in `[0, 1]`). The bounding box is clamped to the buffer, so
/// partially off-screen triangles are safe. A zero-area triangle writes
/// nothing.
///
/// Returns the number of pixels written.
///
/// # Panics
/// Panics if `depth` and `image` differ in size.
pub fn fill_triangle_shaded(
    image: &mut FrameBuffer,
    depth: &mut DepthBuffer,
    points: [IVec3; 3],
    colors: [Color; 3],
    intensity: f32,
) -> usize {
    depth.assert_matches(image);
    let Some(setup) = TriangleSetup::new(points, colors, image.width(), image.height()) else {
        tracing::trace!(?points, "skipping triangle with no coverage");
        return 0;
    };

    let width = image.width() as usize;
    let range = setup.row_range(width);
    let written = setup.shade_rows(
        &mut image.pixels_mut()[range.clone()],
        &mut depth.as_mut_slice()[range],
        width,
        setup.min_y,
        intensity,
    );
    tracing::trace!(?points, written, "filled shaded triangle");
    written
}
