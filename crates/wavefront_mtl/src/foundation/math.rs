//! Math utilities and types
//!
//! Vector aliases used when handing material colors to a renderer.

pub use nalgebra::{Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;
