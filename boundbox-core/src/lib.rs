//! Core data structures and traits for boundbox
//!
//! This crate provides the fundamental types for bounding-volume decomposition,
//! including points, point clouds, boxes, quad meshes, and the collaborator
//! traits (convex hull provider, mesh sink, diagnostics channel) the
//! algorithms bind against.

pub mod point;
pub mod point_cloud;
pub mod bbox;
pub mod mesh;
pub mod traits;
pub mod transform;
pub mod diagnostics;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use bbox::*;
pub use mesh::*;
pub use traits::*;
pub use transform::*;
pub use diagnostics::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

/// Common result type for boundbox operations
pub type Result<T> = std::result::Result<T, Error>;

// Type alias for easier imports
pub type Point = Point3d;
