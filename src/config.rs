//! Render settings read from TOML.
//!
//! Every field has a default, so an empty document (or no file at all) renders
//! the stock cube scene:
//!
//! ```toml
//! width = 800
//! height = 600
//! output = "cube.png"
//! rasterizer = "tiled"
//! render_mode = "filled_wireframe"
//!
//! [camera]
//! eye = [1.0, 1.0, 3.0]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::camera::Camera;
use crate::engine::{RenderMode, DEFAULT_MODEL_SCALE};
use crate::error::RasterError;
use crate::light::DirectionalLight;
use crate::math::vec3::Vec3;
use crate::render::{RasterizerType, DEFAULT_BAND_ROWS};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub rasterizer: RasterizerType,
    /// Rows per band for the tiled rasterizer.
    pub band_rows: usize,
    pub render_mode: RenderMode,
    /// Uniform scale applied to the model.
    pub model_scale: f32,
    /// Yaw applied to the model, in degrees.
    pub rotation_y_degrees: f32,
    /// Pitch applied to the model, in degrees.
    pub rotation_x_degrees: f32,
    /// Draws a flat-filled marker triangle in the top-left corner.
    pub overlay: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            output: PathBuf::from("output.png"),
            camera: CameraConfig::default(),
            light: LightConfig::default(),
            rasterizer: RasterizerType::default(),
            band_rows: DEFAULT_BAND_ROWS,
            render_mode: RenderMode::default(),
            model_scale: DEFAULT_MODEL_SCALE,
            rotation_y_degrees: 30.0,
            rotation_x_degrees: 20.0,
            overlay: false,
        }
    }
}

impl RenderConfig {
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self, RasterError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, RasterError> {
        Ok(toml::from_str(contents)?)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [1.0, 1.0, 3.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
        }
    }
}

impl CameraConfig {
    pub fn to_camera(&self) -> Camera {
        Camera::new(vec3(self.eye), vec3(self.target), vec3(self.up))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// Direction the light travels in.
    pub direction: [f32; 3],
    pub ambient: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            direction: [-0.3, -0.5, -1.0],
            ambient: 0.15,
        }
    }
}

impl LightConfig {
    pub fn to_light(&self) -> DirectionalLight {
        DirectionalLight::new(vec3(self.direction)).with_ambient(self.ambient)
    }
}

fn vec3([x, y, z]: [f32; 3]) -> Vec3 {
    Vec3::new(x, y, z)
}
