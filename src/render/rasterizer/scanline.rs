//! Scanline-based flat-color triangle fill.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by Y coordinate (top to bottom in screen space)
//! 2. **Split** at the middle vertex into an upper and a lower part
//! 3. **Fill** each row of a part with the span between two edges
//!
//! ```text
//!        p0
//!        /\
//!       /  \          upper part: rows p0.y ..= p1.y
//!   p1 /----\         edges p0->p1 (short) and p0->p2 (long)
//!      \     \
//!        \    \       lower part: rows p1.y ..= p2.y
//!          \   \      edges p1->p2 (short) and p0->p2 (long)
//!            \  \
//!              \ \
//!                p2
//! ```
//!
//! Edge positions are interpolated with the same round-to-nearest lerp used
//! for lines, so an edge's pixels may sit up to half a pixel outside the exact
//! triangle. A part with no vertical extent collapses to the single span
//! between its two vertices instead of dividing by zero.

use crate::colors::Color;
use crate::math::vec2::IVec2;
use crate::render::framebuffer::FrameBuffer;
use crate::render::primitives::{draw_scanline, lerp_point};

/// Sorts three points by Y coordinate, ascending.
///
/// Three compare/swaps: after them `p0.y <= p1.y <= p2.y`. Points with equal Y
/// keep their relative order.
fn sort_by_y(p0: &mut IVec2, p1: &mut IVec2, p2: &mut IVec2) {
    if p0.y > p1.y {
        std::mem::swap(p0, p1);
    }
    if p0.y > p2.y {
        std::mem::swap(p0, p2);
    }
    if p1.y > p2.y {
        std::mem::swap(p1, p2);
    }
}

fn sort_by_x(p0: &mut IVec2, p1: &mut IVec2, p2: &mut IVec2) {
    if p0.x > p1.x {
        std::mem::swap(p0, p1);
    }
    if p0.x > p2.x {
        std::mem::swap(p0, p2);
    }
    if p1.x > p2.x {
        std::mem::swap(p1, p2);
    }
}

/// Fills a triangle with a single color using scanline edge walking.
///
/// Vertices may be given in any order and winding. A triangle whose vertices
/// all share one row draws the single span from the leftmost to the rightmost
/// vertex.
///
/// # Panics
/// Panics if any covered pixel lies outside `image`; callers clip first.
pub fn fill_triangle_flat(
    image: &mut FrameBuffer,
    p0: IVec2,
    p1: IVec2,
    p2: IVec2,
    color: Color,
) {
    let (mut p0, mut p1, mut p2) = (p0, p1, p2);
    sort_by_y(&mut p0, &mut p1, &mut p2);

    if p0.y == p2.y {
        sort_by_x(&mut p0, &mut p1, &mut p2);
        draw_scanline(image, p0, p2, color);
        return;
    }

    let total_height = (p2.y - p0.y) as f64;
    let upper_height = p1.y - p0.y;
    let lower_height = p2.y - p1.y;

    if upper_height == 0 {
        draw_scanline(image, p0, p1, color);
    } else {
        for y in p0.y..=p1.y {
            let d_short = (y - p0.y) as f64 / upper_height as f64;
            let d_long = (y - p0.y) as f64 / total_height;
            let short = IVec2::new(lerp_point(p0, p1, d_short).x, y);
            let long = IVec2::new(lerp_point(p0, p2, d_long).x, y);
            draw_scanline(image, short, long, color);
        }
    }

    if lower_height == 0 {
        draw_scanline(image, p1, p2, color);
    } else {
        for y in p1.y..=p2.y {
            let d_long = (y - p0.y) as f64 / total_height;
            let d_short = (y - p1.y) as f64 / lower_height as f64;
            let long = IVec2::new(lerp_point(p0, p2, d_long).x, y);
            let short = IVec2::new(lerp_point(p1, p2, d_short).x, y);
            draw_scanline(image, long, short, color);
        }
    }
}
