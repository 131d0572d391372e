//! Model orientation and size in the world.

use crate::math::mat4::Mat4;

/// Uniform scale followed by yaw then pitch, in radians.
///
/// ```
/// use scanraster::Transform;
///
/// let mut transform = Transform::new();
/// transform.set_scale_uniform(0.5).rotate_y(0.1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pitch: f32,
    yaw: f32,
    scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = s;
        self
    }

    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        self.pitch += angle;
        self
    }

    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.yaw += angle;
        self
    }

    /// Model-to-world matrix: `RotationX * RotationY * Scale`.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::rotation_x(self.pitch)
            * Mat4::rotation_y(self.yaw)
            * Mat4::scaling(self.scale, self.scale, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{vec3::Vec3, vec4::Vec4};
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn default_is_identity() {
        assert_eq!(Transform::default().to_matrix(), Mat4::identity());
    }

    #[test]
    fn scale_applies_before_rotation() {
        let mut t = Transform::new();
        t.set_scale_uniform(2.0).rotate_y(FRAC_PI_2);
        // (1,0,0) -> scaled (2,0,0) -> yaw 90° (0,0,-2)
        let p = (t.to_matrix() * Vec4::from(Vec3::new(1.0, 0.0, 0.0))).to_vec3();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, -2.0, epsilon = 1e-5);
    }

    #[test]
    fn pitch_applies_after_yaw() {
        let mut t = Transform::new();
        t.rotate_y(FRAC_PI_2).rotate_x(FRAC_PI_2);
        // (1,0,0) -> yaw (0,0,-1) -> pitch (0,1,0)
        let p = (t.to_matrix() * Vec4::from(Vec3::new(1.0, 0.0, 0.0))).to_vec3();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-5);
    }
}
