//! World-to-screen vertex transform.
//!
//! Chains view → projection → perspective divide → viewport and rounds the
//! result to a pixel, keeping the projected depth for the depth test.

use crate::camera::Camera;
use crate::math::mat4::Mat4;
use crate::math::vec3::{IVec3, Vec3};
use crate::math::vec4::Vec4;
use crate::viewport::Viewport;

/// Composed camera transforms, ready to project vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipeline {
    clip_from_world: Mat4,
    viewport: Mat4,
}

impl Pipeline {
    pub fn new(view: Mat4, projection: Mat4, viewport: Mat4) -> Self {
        Self {
            clip_from_world: projection * view,
            viewport,
        }
    }

    /// Pipeline for `camera` rendering into `viewport`.
    ///
    /// Returns `None` if the camera basis is degenerate.
    pub fn from_camera(camera: &Camera, viewport: &Viewport) -> Option<Self> {
        let view = camera.view_matrix()?;
        Some(Self::new(
            view,
            camera.projection().matrix(),
            viewport.matrix(),
        ))
    }

    /// Projects a world-space point to a screen vertex.
    ///
    /// x and y are rounded to the nearest pixel. z is the depth after the
    /// perspective divide, larger meaning closer to the eye. Returns `None`
    /// when the point lies on the eye plane (w = 0).
    pub fn to_screen(&self, world: Vec3) -> Option<IVec3> {
        let ndc = (self.clip_from_world * Vec4::from(world)).to_vec3_perspective()?;
        let screen = self.viewport * Vec4::point(ndc.x, ndc.y, ndc.z);
        Some(IVec3::new(
            (screen.x + 0.5).floor() as i32,
            (screen.y + 0.5).floor() as i32,
            ndc.z,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pipeline() -> Pipeline {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::UP);
        Pipeline::from_camera(&camera, &Viewport::full(100, 100)).unwrap()
    }

    #[test]
    fn target_lands_on_viewport_center() {
        let p = pipeline().to_screen(Vec3::ZERO).unwrap();
        assert_eq!((p.x, p.y), (50, 50));
        assert_relative_eq!(p.z, 0.0);
    }

    #[test]
    fn nearer_points_have_larger_depth() {
        let pipeline = pipeline();
        let near = pipeline.to_screen(Vec3::new(0.0, 0.0, 1.0)).unwrap();
        let far = pipeline.to_screen(Vec3::new(0.0, 0.0, -1.0)).unwrap();
        assert!(near.z > far.z);
    }

    #[test]
    fn perspective_enlarges_near_geometry() {
        let pipeline = pipeline();
        let near = pipeline.to_screen(Vec3::new(0.5, 0.0, 1.0)).unwrap();
        let far = pipeline.to_screen(Vec3::new(0.5, 0.0, -1.0)).unwrap();
        assert!(near.x - 50 > far.x - 50);
        assert!(far.x > 50);
    }

    #[test]
    fn eye_plane_has_no_projection() {
        assert_eq!(pipeline().to_screen(Vec3::new(0.0, 0.0, 3.0)), None);
    }

    #[test]
    fn degenerate_camera_has_no_pipeline() {
        let camera = Camera::new(Vec3::new(0.0, 3.0, 0.0), Vec3::ZERO, Vec3::UP);
        assert!(Pipeline::from_camera(&camera, &Viewport::full(10, 10)).is_none());
    }
}
