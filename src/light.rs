//! Lighting types for the renderer.

use crate::math::vec3::Vec3;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Produces the scalar intensity the shaded fill multiplies vertex colors by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// The normalized direction the light is pointing (not where it comes from).
    pub direction: Vec3,
    pub ambient_intensity: f32,
    /// Multiplier for the diffuse lighting contribution (default: 1.0)
    pub diffuse_strength: f32,
}

impl DirectionalLight {
    /// Create a new directional light pointing in the given direction.
    /// The direction will be normalized automatically; a zero direction
    /// leaves only the ambient term.
    pub fn new(direction: Vec3) -> Self {
        DirectionalLight {
            direction: direction.try_normalize().unwrap_or(Vec3::ZERO),
            ambient_intensity: 0.1,
            diffuse_strength: 1.0,
        }
    }

    pub fn with_ambient(mut self, ambient_intensity: f32) -> Self {
        self.ambient_intensity = ambient_intensity;
        self
    }

    /// Lambert term in [0.0, 1.0]: cosine of the angle between the surface
    /// normal and the direction toward the light.
    pub fn lambert(&self, normal: Vec3) -> f32 {
        let Some(normal) = normal.try_normalize() else {
            return 0.0;
        };
        // Negate direction: light pointing at surface = positive dot product
        (-self.direction).dot(normal).max(0.0)
    }

    /// Total intensity for flat shading a face, clamped to [0.0, 1.0].
    pub fn intensity(&self, normal: Vec3) -> f32 {
        (self.ambient_intensity + self.diffuse_strength * self.lambert(normal)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_illumination() {
        // Light pointing toward -Z, normal facing +Z (toward the light)
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, -1.0));
        let normal = Vec3::new(0.0, 0.0, 1.0);
        assert!((light.lambert(normal) - 1.0).abs() < 0.001);
        assert_eq!(light.intensity(normal), 1.0);
    }

    #[test]
    fn test_no_illumination() {
        // Light pointing toward -Z, normal facing -Z (away from light)
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, -1.0));
        let normal = Vec3::new(0.0, 0.0, -1.0);
        assert!(light.lambert(normal) == 0.0);
        assert!((light.intensity(normal) - 0.1).abs() < 0.001);
    }

    #[test]
    fn test_angled_illumination() {
        // Light pointing straight down (-Y), normal at 45 degrees
        let light = DirectionalLight::new(Vec3::new(0.0, -1.0, 0.0)).with_ambient(0.0);
        let normal = Vec3::new(0.0, 1.0, 1.0);
        // cos(45) ≈ 0.707
        let intensity = light.intensity(normal);
        assert!((intensity - 0.707).abs() < 0.01);
    }

    #[test]
    fn test_degenerate_normal_is_unlit() {
        let light = DirectionalLight::new(Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(light.lambert(Vec3::ZERO), 0.0);
    }
}
