//! Triangle fill algorithms.
//!
//! Two independent entry points:
//! - [`fill_triangle_flat`]: scanline edge walking, one color, no depth
//! - [`fill_triangle_shaded`]: bounding box + barycentric test, per-vertex
//!   colors, depth tested
//!
//! [`fill_triangle_shaded_tiled`] is a parallel form of the shaded fill. The
//! [`Rasterizer`] trait lets a renderer pick between the serial and tiled
//! shaded fills at runtime.

mod barycentric;
mod scanline;
mod tiled;

pub use barycentric::fill_triangle_shaded;
pub use scanline::fill_triangle_flat;
pub use tiled::{fill_triangle_shaded_tiled, DEFAULT_BAND_ROWS};

use serde::Deserialize;

use super::depth::DepthBuffer;
use super::framebuffer::FrameBuffer;
use crate::colors::Color;
use crate::math::vec3::IVec3;

/// A triangle ready for shaded rasterization in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [IVec3; 3],
    pub vertex_colors: [Color; 3],
}

impl Triangle {
    pub fn new(points: [IVec3; 3], vertex_colors: [Color; 3]) -> Self {
        Self {
            points,
            vertex_colors,
        }
    }
}

/// Strategy for depth-tested triangle filling.
pub trait Rasterizer {
    /// Fill `triangle` into `image`, testing and updating `depth`.
    ///
    /// Returns the number of pixels written.
    fn fill_triangle(
        &self,
        triangle: &Triangle,
        image: &mut FrameBuffer,
        depth: &mut DepthBuffer,
        intensity: f32,
    ) -> usize;
}

/// Available shaded rasterization strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RasterizerType {
    /// Single-threaded bounding box scan.
    #[default]
    Barycentric,
    /// Bounding box split into row bands shaded in parallel.
    Tiled,
}

impl std::fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerType::Barycentric => write!(f, "Barycentric"),
            RasterizerType::Tiled => write!(f, "Tiled"),
        }
    }
}

/// Serial shaded fill.
#[derive(Debug, Default, Clone, Copy)]
pub struct BarycentricRasterizer;

impl Rasterizer for BarycentricRasterizer {
    #[inline]
    fn fill_triangle(
        &self,
        triangle: &Triangle,
        image: &mut FrameBuffer,
        depth: &mut DepthBuffer,
        intensity: f32,
    ) -> usize {
        fill_triangle_shaded(
            image,
            depth,
            triangle.points,
            triangle.vertex_colors,
            intensity,
        )
    }
}

/// Row-band parallel shaded fill.
#[derive(Debug, Clone, Copy)]
pub struct TiledRasterizer {
    band_rows: usize,
}

impl TiledRasterizer {
    pub fn new(band_rows: usize) -> Self {
        Self {
            band_rows: band_rows.max(1),
        }
    }

    pub fn band_rows(&self) -> usize {
        self.band_rows
    }
}

impl Default for TiledRasterizer {
    fn default() -> Self {
        Self::new(DEFAULT_BAND_ROWS)
    }
}

impl Rasterizer for TiledRasterizer {
    #[inline]
    fn fill_triangle(
        &self,
        triangle: &Triangle,
        image: &mut FrameBuffer,
        depth: &mut DepthBuffer,
        intensity: f32,
    ) -> usize {
        fill_triangle_shaded_tiled(
            image,
            depth,
            triangle.points,
            triangle.vertex_colors,
            intensity,
            self.band_rows,
        )
    }
}

/// Holds both shaded rasterizers and forwards to the active one.
#[derive(Debug, Clone, Copy)]
pub struct RasterizerDispatcher {
    barycentric: BarycentricRasterizer,
    tiled: TiledRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType, band_rows: usize) -> Self {
        Self {
            barycentric: BarycentricRasterizer,
            tiled: TiledRasterizer::new(band_rows),
            active: rasterizer_type,
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl Rasterizer for RasterizerDispatcher {
    #[inline]
    fn fill_triangle(
        &self,
        triangle: &Triangle,
        image: &mut FrameBuffer,
        depth: &mut DepthBuffer,
        intensity: f32,
    ) -> usize {
        match self.active {
            RasterizerType::Barycentric => {
                self.barycentric
                    .fill_triangle(triangle, image, depth, intensity)
            }
            RasterizerType::Tiled => self.tiled.fill_triangle(triangle, image, depth, intensity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    fn triangle() -> Triangle {
        Triangle::new(
            [
                IVec3::new(1, 1, 0.3),
                IVec3::new(30, 4, 0.6),
                IVec3::new(12, 22, 0.9),
            ],
            [colors::RED, colors::GREEN, colors::BLUE],
        )
    }

    #[test]
    fn dispatcher_switches_strategy() {
        let mut dispatcher = RasterizerDispatcher::new(RasterizerType::Barycentric, 4);
        assert_eq!(dispatcher.active_type(), RasterizerType::Barycentric);

        let mut serial = FrameBuffer::new(32, 24);
        let mut serial_depth = DepthBuffer::for_image(&serial);
        let a = dispatcher.fill_triangle(&triangle(), &mut serial, &mut serial_depth, 1.0);

        dispatcher.set_type(RasterizerType::Tiled);
        let mut tiled = FrameBuffer::new(32, 24);
        let mut tiled_depth = DepthBuffer::for_image(&tiled);
        let b = dispatcher.fill_triangle(&triangle(), &mut tiled, &mut tiled_depth, 1.0);

        assert!(a > 0);
        assert_eq!(a, b);
        assert_eq!(serial, tiled);
    }

    #[test]
    fn tiled_rasterizer_needs_at_least_one_row() {
        assert_eq!(TiledRasterizer::new(0).band_rows(), 1);
    }

    #[test]
    fn rasterizer_type_display() {
        assert_eq!(RasterizerType::Tiled.to_string(), "Tiled");
        assert_eq!(RasterizerType::default(), RasterizerType::Barycentric);
    }
}
