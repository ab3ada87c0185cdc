//! Mesh payload types
//!
//! Two mesh shapes cross the crate boundary: the triangulated convex hull
//! delivered by a [`crate::traits::HullProvider`], and the quad-faced proxy
//! mesh handed to a [`crate::traits::MeshSink`].

use crate::point::{Point3d, Vector3d};
use serde::{Deserialize, Serialize};

/// A quad-faced mesh with a flat vertex list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuadMesh {
    pub vertices: Vec<Point3d>,
    pub faces: Vec<[usize; 4]>,
}

impl QuadMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3d>, faces: Vec<[usize; 4]>) -> Self {
        Self { vertices, faces }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh carries no geometry
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }
}

/// A triangulated convex hull with per-face outward normals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HullMesh {
    pub vertices: Vec<Point3d>,
    pub faces: Vec<[usize; 3]>,
    /// One outward normal per face, parallel to `faces`
    pub normals: Vec<Vector3d>,
}

impl HullMesh {
    /// Create a hull mesh from vertices, faces and face normals
    pub fn new(vertices: Vec<Point3d>, faces: Vec<[usize; 3]>, normals: Vec<Vector3d>) -> Self {
        Self {
            vertices,
            faces,
            normals,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// The three vertices of face `i`
    pub fn face_vertices(&self, i: usize) -> [Point3d; 3] {
        let [a, b, c] = self.faces[i];
        [self.vertices[a], self.vertices[b], self.vertices[c]]
    }

    /// Recompute face normals from the winding order
    pub fn calculate_face_normals(&self) -> Vec<Vector3d> {
        self.faces
            .iter()
            .map(|face| {
                let v0 = self.vertices[face[0]];
                let v1 = self.vertices[face[1]];
                let v2 = self.vertices[face[2]];
                (v1 - v0).cross(&(v2 - v0)).normalize()
            })
            .collect()
    }
}
