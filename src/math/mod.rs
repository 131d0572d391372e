//! Vector and matrix value types.
//!
//! Float vectors ([`Vec3`], [`Vec4`]) carry camera-space math. Integer points
//! ([`IVec2`], [`IVec3`]) address pixels.

pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use mat4::Mat4;
pub use vec2::IVec2;
pub use vec3::{IVec3, Vec3};
pub use vec4::Vec4;
