//! Pixel and depth buffers plus everything that writes into them.

mod depth;
mod framebuffer;
mod primitives;
mod rasterizer;

pub use depth::DepthBuffer;
pub use framebuffer::FrameBuffer;
pub use primitives::{draw_line, draw_point, draw_wireframe_triangle};
pub use rasterizer::{
    fill_triangle_flat, fill_triangle_shaded, fill_triangle_shaded_tiled,
    BarycentricRasterizer, Rasterizer, RasterizerDispatcher, RasterizerType, TiledRasterizer,
    Triangle, DEFAULT_BAND_ROWS,
};
