//! Point types and related functionality
//!
//! Volume comparisons drive every solver in this workspace, so the primary
//! scalar type is `f64`; single-precision aliases are provided for callers
//! interfacing with f32 geometry pipelines.

use nalgebra::{Point3, Vector3};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A 3D point with single precision coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with single precision components
pub type Vector3f = Vector3<f32>;

/// Widen a single-precision point to the working precision
pub fn point_to_f64(p: &Point3f) -> Point3d {
    Point3d::new(p.x as f64, p.y as f64, p.z as f64)
}

/// Narrow a working-precision point to single precision
pub fn point_to_f32(p: &Point3d) -> Point3f {
    Point3f::new(p.x as f32, p.y as f32, p.z as f32)
}
