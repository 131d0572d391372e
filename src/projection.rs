//! Single-coefficient perspective projection.
//!
//! The projection matrix is the identity with entry `[3][2]` set to a
//! coefficient `c`. A view-space point `(x, y, z, 1)` becomes
//! `(x, y, z, 1 + c * z)`; the later divide by w shrinks points far from the
//! eye and enlarges points near it. With `c = -1 / d`, where `d` is the
//! eye-to-target distance, the target plane (z = 0) keeps its size and the eye
//! plane (z = d) maps to infinity.

use crate::math::mat4::Mat4;

/// Identity matrix with `[3][2] = coeff`.
pub fn projection_matrix(coeff: f32) -> Mat4 {
    let mut projection = Mat4::identity();
    projection.set(3, 2, coeff);
    projection
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    coeff: f32,
}

impl Projection {
    pub fn new(coeff: f32) -> Self {
        Self { coeff }
    }

    /// Projection for a camera `distance` units from its target.
    ///
    /// A zero or non-finite distance gives the orthographic coefficient 0.
    pub fn from_distance(distance: f32) -> Self {
        if distance == 0.0 || !distance.is_finite() {
            return Self::new(0.0);
        }
        Self::new(-1.0 / distance)
    }

    pub fn coefficient(&self) -> f32 {
        self.coeff
    }

    pub fn matrix(&self) -> Mat4 {
        projection_matrix(self.coeff)
    }
}
