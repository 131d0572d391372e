//! Indexed triangle meshes and the built-in cube.

use crate::colors::Color;
use crate::math::vec3::Vec3;

/// A triangle defined by three indices into a mesh's vertex array.
///
/// Vertices are wound so that `(b - a) x (c - a)` points out of the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }
}

pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

/// One color per cube corner: each channel is bright on the positive side of
/// its axis.
pub const CUBE_COLORS: [Color; 8] = [
    Color::rgb(64, 64, 64),
    Color::rgb(64, 255, 64),
    Color::rgb(255, 255, 64),
    Color::rgb(255, 64, 64),
    Color::rgb(255, 255, 255),
    Color::rgb(255, 64, 255),
    Color::rgb(64, 255, 255),
    Color::rgb(64, 64, 255),
];

pub const CUBE_FACES: [Face; 12] = [
    // -Z
    Face::new(0, 1, 2),
    Face::new(0, 2, 3),
    // +X
    Face::new(3, 2, 4),
    Face::new(3, 4, 5),
    // +Z
    Face::new(5, 4, 6),
    Face::new(5, 6, 7),
    // -X
    Face::new(7, 6, 1),
    Face::new(7, 1, 0),
    // +Y
    Face::new(1, 6, 4),
    Face::new(1, 4, 2),
    // -Y
    Face::new(5, 7, 0),
    Face::new(5, 0, 3),
];

/// Vertex positions, per-vertex colors and triangle faces.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    colors: Vec<Color>,
    faces: Vec<Face>,
}

impl Mesh {
    /// # Panics
    /// Panics if `colors` and `vertices` differ in length or a face indexes
    /// past the vertex array.
    pub fn new(vertices: Vec<Vec3>, colors: Vec<Color>, faces: Vec<Face>) -> Self {
        assert_eq!(
            vertices.len(),
            colors.len(),
            "every vertex needs exactly one color"
        );
        let count = vertices.len() as u32;
        assert!(
            faces.iter().all(|f| f.a < count && f.b < count && f.c < count),
            "face index out of range"
        );
        Self {
            vertices,
            colors,
            faces,
        }
    }

    /// The 2×2×2 cube centered on the origin.
    pub fn cube() -> Self {
        Self::new(
            CUBE_VERTICES.to_vec(),
            CUBE_COLORS.to_vec(),
            CUBE_FACES.to_vec(),
        )
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_faces_wind_outward() {
        let mesh = Mesh::cube();
        for face in mesh.faces() {
            let [a, b, c] = [face.a, face.b, face.c].map(|i| mesh.vertices()[i as usize]);
            let normal = (b - a).cross(c - a);
            let centroid = a + b + c;
            assert!(normal.dot(centroid) > 0.0, "{face:?} faces inward");
        }
    }

    #[test]
    #[should_panic(expected = "face index out of range")]
    fn out_of_range_face_panics() {
        Mesh::new(
            vec![Vec3::ZERO; 3],
            vec![Color::default(); 3],
            vec![Face::new(0, 1, 3)],
        );
    }
}
