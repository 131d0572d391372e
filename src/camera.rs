//! Look-at camera and view matrix construction.
//!
//! # Coordinate System
//!
//! The view matrix maps the camera target to the origin and the eye onto the
//! positive Z axis:
//! - X: camera right
//! - Y: camera up
//! - Z: from target toward the eye
//!
//! Larger view-space Z is therefore closer to the eye, which matches the
//! "greater wins" depth test.

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::projection::Projection;

/// Builds a view matrix looking from `eye` toward `center`.
///
/// The camera basis is
///
/// ```text
/// z = normalize(eye - center)
/// x = normalize(cross(up, z))
/// y = normalize(cross(z, x))
/// ```
///
/// and the result is `rotation * translation(-center)`, with the basis vectors
/// as the rows of the rotation.
///
/// Returns `None` when the basis is degenerate: `eye == center`, or `up` is
/// zero or parallel to the viewing direction.
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Option<Mat4> {
    let z_axis = (eye - center).try_normalize()?;
    let x_axis = up.cross(z_axis).try_normalize()?;
    let y_axis = z_axis.cross(x_axis).try_normalize()?;

    let mut rotation = Mat4::identity();
    for (row, axis) in [x_axis, y_axis, z_axis].into_iter().enumerate() {
        rotation.set(row, 0, axis.x);
        rotation.set(row, 1, axis.y);
        rotation.set(row, 2, axis.z);
    }
    let translation = Mat4::translation(-center.x, -center.y, -center.z);

    Some(rotation * translation)
}

/// A camera orbiting a target point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    eye: Vec3,
    target: Vec3,
    up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::UP)
    }
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self { eye, target, up }
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn set_eye(&mut self, eye: Vec3) -> &mut Self {
        self.eye = eye;
        self
    }

    pub fn set_target(&mut self, target: Vec3) -> &mut Self {
        self.target = target;
        self
    }

    /// Distance from the eye to the target.
    pub fn distance(&self) -> f32 {
        (self.eye - self.target).magnitude()
    }

    /// View matrix, or `None` if the camera basis is degenerate.
    pub fn view_matrix(&self) -> Option<Mat4> {
        look_at(self.eye, self.target, self.up)
    }

    /// Perspective projection matching the eye-to-target distance.
    pub fn projection(&self) -> Projection {
        Projection::from_distance(self.distance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;
    use approx::assert_relative_eq;

    fn assert_orthonormal(view: &Mat4) {
        let rows = [view.row3(0), view.row3(1), view.row3(2)];
        for (i, a) in rows.iter().enumerate() {
            assert_relative_eq!(a.magnitude(), 1.0, epsilon = 1e-5);
            for b in rows.iter().skip(i + 1) {
                assert_relative_eq!(a.dot(*b), 0.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn view_rotation_block_is_orthonormal() {
        let cases = [
            (Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::UP),
            (Vec3::new(1.0, 1.0, 3.0), Vec3::ZERO, Vec3::UP),
            (Vec3::new(-4.0, 2.5, 0.5), Vec3::new(1.0, -1.0, 2.0), Vec3::UP),
            (Vec3::new(2.0, 7.0, -3.0), Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.3, 1.0, 0.2)),
            (Vec3::new(0.0, 0.0, -9.0), Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)),
        ];
        for (eye, center, up) in cases {
            let view = look_at(eye, center, up).expect("non-degenerate camera");
            assert_orthonormal(&view);
        }
    }

    #[test]
    fn target_maps_to_origin_and_eye_to_positive_z() {
        let eye = Vec3::new(1.0, 2.0, 5.0);
        let center = Vec3::new(0.5, -0.5, 1.0);
        let view = look_at(eye, center, Vec3::UP).unwrap();

        let target = (view * Vec4::from(center)).to_vec3();
        assert_relative_eq!(target.magnitude(), 0.0, epsilon = 1e-5);

        let eye_view = (view * Vec4::from(eye)).to_vec3();
        assert_relative_eq!(eye_view.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(eye_view.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(eye_view.z, (eye - center).magnitude(), epsilon = 1e-5);
    }

    #[test]
    fn axis_aligned_camera_is_pure_translation() {
        let view = look_at(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 0.0), Vec3::UP).unwrap();
        assert_eq!(view, Mat4::translation(-1.0, -2.0, 0.0));
    }

    #[test]
    fn degenerate_cameras_are_rejected() {
        // Eye on top of the target.
        assert_eq!(look_at(Vec3::ONE, Vec3::ONE, Vec3::UP), None);
        // Up parallel to the viewing direction.
        assert_eq!(look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::UP), None);
        // Zero up vector.
        assert_eq!(look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::ZERO), None);
    }

    #[test]
    fn camera_projection_uses_target_distance() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 4.0), Vec3::ZERO, Vec3::UP);
        assert_relative_eq!(camera.distance(), 4.0);
        assert_relative_eq!(camera.projection().coefficient(), -0.25);
        assert!(camera.view_matrix().is_some());
    }
}
