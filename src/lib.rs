//! A CPU software rasterizer.
//!
//! Screen-space drawing (points, lines, flat and shaded triangles) over
//! caller-owned [`FrameBuffer`] and [`DepthBuffer`] values, plus the
//! view → projection → viewport transforms that feed it.
//!
//! # Quick Start
//!
//! ```
//! use scanraster::prelude::*;
//!
//! let mut image = FrameBuffer::new(64, 64);
//! let mut depth = DepthBuffer::for_image(&image);
//!
//! let points = [
//!     IVec3::new(4, 4, 0.2),
//!     IVec3::new(60, 10, 0.5),
//!     IVec3::new(20, 58, 0.9),
//! ];
//! let colors = [colors::RED, colors::GREEN, colors::BLUE];
//! let written = fill_triangle_shaded(&mut image, &mut depth, points, colors, 1.0);
//! assert!(written > 0);
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod projection;
pub mod transform;
pub mod viewport;

pub mod render;

// Re-export commonly needed types at crate root for convenience
pub use camera::{look_at, Camera};
pub use config::RenderConfig;
pub use engine::{Engine, RenderMode, RenderStats};
pub use error::RasterError;
pub use pipeline::Pipeline;
pub use projection::{projection_matrix, Projection};
pub use render::{DepthBuffer, FrameBuffer, RasterizerType};
pub use transform::Transform;
pub use viewport::{viewport_matrix, Viewport};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use scanraster::prelude::*;
/// ```
pub mod prelude {
    // Camera and transforms
    pub use crate::camera::{look_at, Camera};
    pub use crate::pipeline::Pipeline;
    pub use crate::projection::{projection_matrix, Projection};
    pub use crate::viewport::{viewport_matrix, Viewport};

    // Engine
    pub use crate::engine::{Engine, RenderMode};

    // Colors
    pub use crate::colors::{self, Color};

    // Math
    pub use crate::math::{IVec2, IVec3, Mat4, Vec3, Vec4};

    // Rendering
    pub use crate::render::{
        draw_line, draw_point, draw_wireframe_triangle, fill_triangle_flat, fill_triangle_shaded,
        fill_triangle_shaded_tiled, DepthBuffer, FrameBuffer, RasterizerType,
    };
}
