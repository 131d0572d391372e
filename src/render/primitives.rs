//! Point, line and wireframe drawing.
//!
//! All functions write through [`FrameBuffer::set_pixel`] and therefore panic
//! on coordinates outside the buffer. Callers clip beforehand.

use super::framebuffer::FrameBuffer;
use crate::colors::Color;
use crate::math::vec2::IVec2;

/// Linear interpolation between two integer coordinates, rounded to nearest.
///
/// Rounds by adding one half and truncating toward zero, so `x.5` always
/// rounds up for the non-negative coordinates pixels use.
#[inline]
pub(crate) fn lerp_i32(v0: i32, v1: i32, d: f64) -> i32 {
    (v0 as f64 + (v1 - v0) as f64 * d + 0.5) as i32
}

/// Interpolates both coordinates of a point with [`lerp_i32`].
#[inline]
pub(crate) fn lerp_point(p0: IVec2, p1: IVec2, d: f64) -> IVec2 {
    IVec2::new(lerp_i32(p0.x, p1.x, d), lerp_i32(p0.y, p1.y, d))
}

/// Draws the horizontal span between two points on the same row, inclusive.
pub(crate) fn draw_scanline(image: &mut FrameBuffer, p0: IVec2, p1: IVec2, color: Color) {
    debug_assert_eq!(p0.y, p1.y, "scanline endpoints must share a row");
    let (left, right) = if p0.x <= p1.x { (p0.x, p1.x) } else { (p1.x, p0.x) };
    for x in left..=right {
        image.set_pixel(x, p0.y, color);
    }
}

/// Writes a single pixel.
///
/// # Panics
/// Panics if `point` lies outside `image`.
#[inline]
pub fn draw_point(image: &mut FrameBuffer, point: IVec2, color: Color) {
    image.set_pixel(point.x, point.y, color);
}

/// Draws a line between two points, both endpoints included.
///
/// Walks the axis with the larger extent one pixel at a time and interpolates
/// the other coordinate, so the line has no gaps at any slope. When both
/// extents are equal the walk runs along y. Endpoints are swapped so the walk
/// always moves toward larger coordinates, which makes the pixel set the same
/// regardless of argument order.
pub fn draw_line(image: &mut FrameBuffer, p0: IVec2, p1: IVec2, color: Color) {
    let x_distance = (p1.x - p0.x).abs();
    let y_distance = (p1.y - p0.y).abs();

    if x_distance == 0 && y_distance == 0 {
        draw_point(image, p0, color);
    } else if x_distance > y_distance {
        let (start, end) = if p0.x > p1.x { (p1, p0) } else { (p0, p1) };
        for x in start.x..=end.x {
            let d = (x - start.x) as f64 / x_distance as f64;
            let y = lerp_i32(start.y, end.y, d);
            draw_point(image, IVec2::new(x, y), color);
        }
    } else {
        let (start, end) = if p0.y > p1.y { (p1, p0) } else { (p0, p1) };
        for y in start.y..=end.y {
            let d = (y - start.y) as f64 / y_distance as f64;
            let x = lerp_i32(start.x, end.x, d);
            draw_point(image, IVec2::new(x, y), color);
        }
    }
}

/// Outlines a triangle with three line draws. The interior is left untouched.
pub fn draw_wireframe_triangle(
    image: &mut FrameBuffer,
    p0: IVec2,
    p1: IVec2,
    p2: IVec2,
    color: Color,
) {
    draw_line(image, p0, p1, color);
    draw_line(image, p1, p2, color);
    draw_line(image, p2, p0, color);
}
