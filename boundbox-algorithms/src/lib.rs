//! # boundbox algorithms
//!
//! Geometric decomposition algorithms for building physics-collision proxies:
//! minimum-volume oriented bounding boxes over a discrete candidate set,
//! axis-aligned slab decomposition with optional collapse, quad-mesh assembly
//! for box chains, and grid placement of objects by their bounding extents.

pub mod obb;
pub mod segmentation;
pub mod collapse;
pub mod box_mesh;
pub mod grid;
pub mod pipeline;

// Re-export commonly used items
pub use obb::*;
pub use segmentation::*;
pub use collapse::*;
pub use box_mesh::*;
pub use grid::*;
pub use pipeline::*;
