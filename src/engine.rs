//! Core rendering engine.
//!
//! The [`Engine`] owns the frame and depth buffers and draws a [`Mesh`]
//! through the camera [`Pipeline`] with the configured rasterizer.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::camera::Camera;
use crate::colors::{self, Color};
use crate::config::RenderConfig;
use crate::error::RasterError;
use crate::light::DirectionalLight;
use crate::math::vec2::IVec2;
use crate::math::vec3::{IVec3, Vec3};
use crate::math::vec4::Vec4;
use crate::mesh::Mesh;
use crate::pipeline::Pipeline;
use crate::render::{
    draw_wireframe_triangle, fill_triangle_flat, DepthBuffer, FrameBuffer, Rasterizer,
    RasterizerDispatcher, RasterizerType, Triangle, DEFAULT_BAND_ROWS,
};
use crate::transform::Transform;
use crate::viewport::Viewport;

const WIREFRAME: Color = colors::WHITE;
const OVERLAY: Color = colors::YELLOW;
const OVERLAY_SIZE: i32 = 24;

pub const DEFAULT_MODEL_SCALE: f32 = 0.5;

/// Rendering mode presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Every triangle edge, no fill.
    Wireframe,
    /// Filled + wireframe on faces turned toward the camera.
    #[default]
    FilledWireframe,
    /// Filled only
    Filled,
}

impl RenderMode {
    fn draws_fill(self) -> bool {
        matches!(self, RenderMode::Filled | RenderMode::FilledWireframe)
    }
}

/// Counters from one [`Engine::render`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub faces: usize,
    /// Faces dropped because a vertex sat on the eye plane.
    pub skipped: usize,
    pub pixels_filled: usize,
    pub wireframes: usize,
}

pub struct Engine {
    image: FrameBuffer,
    depth: DepthBuffer,
    rasterizer: RasterizerDispatcher,
    camera: Camera,
    viewport: Viewport,
    light: DirectionalLight,
    mesh: Mesh,
    transform: Transform,
    render_mode: RenderMode,
    pub overlay: bool,
}

impl Engine {
    /// An engine rendering the cube with default camera and light.
    ///
    /// The cube is scaled by [`DEFAULT_MODEL_SCALE`] so every corner stays on
    /// screen at any rotation.
    pub fn new(width: u32, height: u32) -> Self {
        let image = FrameBuffer::with_color(width, height, colors::BACKGROUND);
        let depth = DepthBuffer::for_image(&image);
        let mut transform = Transform::default();
        transform.set_scale_uniform(DEFAULT_MODEL_SCALE);
        Self {
            image,
            depth,
            rasterizer: RasterizerDispatcher::new(RasterizerType::default(), DEFAULT_BAND_ROWS),
            camera: Camera::default(),
            viewport: Viewport::centered_square(width, height, 0),
            light: DirectionalLight::new(Vec3::new(0.0, 0.0, -1.0)),
            mesh: Mesh::cube(),
            transform,
            render_mode: RenderMode::default(),
            overlay: false,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        let mut engine = Self::new(config.width, config.height);
        engine.rasterizer = RasterizerDispatcher::new(config.rasterizer, config.band_rows);
        engine.camera = config.camera.to_camera();
        engine.light = config.light.to_light();
        engine.render_mode = config.render_mode;
        engine.overlay = config.overlay;
        engine
            .transform
            .set_scale_uniform(config.model_scale)
            .rotate_x(config.rotation_x_degrees.to_radians())
            .rotate_y(config.rotation_y_degrees.to_radians());
        engine
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.rasterizer.set_type(rasterizer_type);
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn set_mesh(&mut self, mesh: Mesh) {
        self.mesh = mesh;
    }

    pub fn set_light(&mut self, light: DirectionalLight) {
        self.light = light;
    }

    pub fn image(&self) -> &FrameBuffer {
        &self.image
    }

    pub fn depth(&self) -> &DepthBuffer {
        &self.depth
    }

    /// Clears both buffers and draws the mesh.
    pub fn render(&mut self) -> RenderStats {
        self.image.clear(colors::BACKGROUND);
        self.depth.clear();

        let mut stats = RenderStats::default();
        let Some(pipeline) = Pipeline::from_camera(&self.camera, &self.viewport) else {
            warn!(
                eye = ?self.camera.eye(),
                target = ?self.camera.target(),
                "camera basis is degenerate, nothing drawn"
            );
            return stats;
        };

        let model = self.transform.to_matrix();
        let world: Vec<Vec3> = self
            .mesh
            .vertices()
            .iter()
            .map(|v| (model * Vec4::from(*v)).to_vec3())
            .collect();

        for face in self.mesh.faces() {
            stats.faces += 1;
            let indices = [face.a, face.b, face.c].map(|i| i as usize);
            let corners = indices.map(|i| world[i]);

            let Some(points) = project_face(&pipeline, corners) else {
                stats.skipped += 1;
                continue;
            };

            let normal = (corners[1] - corners[0]).cross(corners[2] - corners[0]);
            let front_facing = normal.dot(self.camera.eye() - corners[0]) > 0.0;

            if self.render_mode.draws_fill() {
                let triangle = Triangle::new(points, indices.map(|i| self.mesh.colors()[i]));
                stats.pixels_filled += self.rasterizer.fill_triangle(
                    &triangle,
                    &mut self.image,
                    &mut self.depth,
                    self.light.intensity(normal),
                );
            }

            let wireframe = match self.render_mode {
                RenderMode::Wireframe => true,
                RenderMode::FilledWireframe => front_facing,
                RenderMode::Filled => false,
            };
            if wireframe && points.iter().all(|p| self.image.contains(p.x, p.y)) {
                let [p0, p1, p2] = points.map(|p| p.xy());
                draw_wireframe_triangle(&mut self.image, p0, p1, p2, WIREFRAME);
                stats.wireframes += 1;
            }
        }

        if self.overlay {
            self.draw_overlay();
        }

        debug!(
            faces = stats.faces,
            skipped = stats.skipped,
            pixels = stats.pixels_filled,
            rasterizer = %self.rasterizer.active_type(),
            "frame rendered"
        );
        stats
    }

    /// Flat marker in the image corner that ignores depth.
    fn draw_overlay(&mut self) {
        let size = OVERLAY_SIZE
            .min(self.image.width() as i32 - 1)
            .min(self.image.height() as i32 - 1);
        if size < 0 {
            return;
        }
        fill_triangle_flat(
            &mut self.image,
            IVec2::new(0, 0),
            IVec2::new(size, 0),
            IVec2::new(0, size),
            OVERLAY,
        );
    }

    /// Writes the frame as PNG with row 0 at the bottom, so +y points up.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        let path = path.as_ref();
        let flipped = image::imageops::flip_vertical(&self.image.to_rgba_image());
        flipped.save(path)?;
        info!(path = %path.display(), "frame saved");
        Ok(())
    }
}

fn project_face(pipeline: &Pipeline, corners: [Vec3; 3]) -> Option<[IVec3; 3]> {
    let [a, b, c] = corners.map(|v| pipeline.to_screen(v));
    Some([a?, b?, c?])
}
