//! Mapping from normalized device coordinates to pixels.

use crate::math::mat4::Mat4;

/// Maps NDC `[-1, 1]` in x and y onto the pixel rectangle at `(x, y)` of size
/// `width` × `height`.
///
/// ```text
/// | w/2  0    0  x + w/2 |
/// | 0    h/2  0  y + h/2 |
/// | 0    0    0  1       |
/// | 0    0    0  1       |
/// ```
///
/// Depth is not remapped: the z row is flattened to the constant 1, so callers
/// keep the projected depth themselves (see
/// [`Pipeline::to_screen`](crate::pipeline::Pipeline::to_screen)).
pub fn viewport_matrix(x: i32, y: i32, width: i32, height: i32) -> Mat4 {
    let half_width = width as f32 / 2.0;
    let half_height = height as f32 / 2.0;

    let mut viewport = Mat4::identity();
    viewport.set(0, 0, half_width);
    viewport.set(0, 3, x as f32 + half_width);
    viewport.set(1, 1, half_height);
    viewport.set(1, 3, y as f32 + half_height);
    viewport.set(2, 2, 0.0);
    viewport.set(2, 3, 1.0);
    viewport
}

/// A pixel rectangle inside the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A viewport covering a whole `width` × `height` buffer.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    /// A square viewport centered in the buffer, inset by `margin` pixels.
    ///
    /// Keeps NDC x and y on the same pixel scale for non-square buffers.
    pub fn centered_square(width: u32, height: u32, margin: u32) -> Self {
        let side = width.min(height).saturating_sub(2 * margin) as i32;
        Self::new(
            (width as i32 - side) / 2,
            (height as i32 - side) / 2,
            side,
            side,
        )
    }

    pub fn matrix(&self) -> Mat4 {
        viewport_matrix(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;

    #[test]
    fn ndc_origin_maps_to_viewport_center() {
        let m = viewport_matrix(10, 20, 200, 100);
        for z in [-1.0, 0.0, 0.37] {
            let p = m * Vec4::point(0.0, 0.0, z);
            assert_eq!(p.x, 110.0);
            assert_eq!(p.y, 70.0);
            // Depth is flattened rather than remapped.
            assert_eq!(p.z, 1.0);
        }
    }

    #[test]
    fn ndc_corners_map_to_viewport_corners() {
        let m = Viewport::new(0, 0, 64, 32).matrix();
        let low = m * Vec4::point(-1.0, -1.0, 0.0);
        let high = m * Vec4::point(1.0, 1.0, 0.0);
        assert_eq!((low.x, low.y), (0.0, 0.0));
        assert_eq!((high.x, high.y), (64.0, 32.0));
    }

    #[test]
    fn centered_square_fits_inside_buffer() {
        let v = Viewport::centered_square(200, 100, 10);
        assert_eq!(v, Viewport::new(60, 10, 80, 80));
        assert_eq!(Viewport::full(4, 3), Viewport::new(0, 0, 4, 3));
    }
}
