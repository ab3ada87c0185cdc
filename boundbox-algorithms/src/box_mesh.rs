//! Quad-mesh assembly for boxes and box chains
//!
//! Two fixed index patterns live here. `CUBE_QUADS` closes a single box whose
//! corners follow the signed unit-cube order used by the OBB path. The chain
//! builder stitches a sequence of per-segment boxes into one connected
//! surface by walking overlapping groups of 4 vertices: for 8L flattened
//! corners it emits 4 side-wall quads at every offset `4*i` for
//! `i in 0..2L-1`, then caps the first and last group. The overlapping walk
//! is intentional and is what downstream consumers expect of the quad layout;
//! do not "repair" it into a strict box-to-box stitch.

use boundbox_core::{BoxCorners, QuadMesh};

/// Quad faces of a single box in signed unit-cube corner order
pub const CUBE_QUADS: [[usize; 4]; 6] = [
    [0, 1, 3, 2],
    [2, 3, 7, 6],
    [6, 7, 5, 4],
    [4, 5, 1, 0],
    [2, 6, 4, 0],
    [7, 3, 1, 5],
];

/// Stitch an ordered chain of boxes into a single quad mesh
///
/// Boxes must use the axis-dependent corner winding of
/// [`boundbox_core::Aabb::corners`], with corners 0-3 on the near face along
/// the segmentation axis. An empty chain yields an empty mesh.
pub fn chain_mesh(boxes: &[BoxCorners]) -> QuadMesh {
    if boxes.is_empty() {
        return QuadMesh::new();
    }

    let vertices: Vec<_> = boxes.iter().flatten().copied().collect();
    let mut faces = Vec::with_capacity(4 * (2 * boxes.len() - 1) + 2);

    for i in 0..(2 * boxes.len() - 1) {
        let o = 4 * i;
        faces.push([o, o + 4, o + 7, o + 3]);
        faces.push([o + 3, o + 7, o + 6, o + 2]);
        faces.push([o + 2, o + 6, o + 5, o + 1]);
        faces.push([o + 1, o + 5, o + 4, o]);
    }

    // end caps over the first and last groups of 4
    let top = vertices.len() - 1;
    faces.push([0, 3, 2, 1]);
    faces.push([top - 3, top - 2, top - 1, top]);

    QuadMesh::from_vertices_and_faces(vertices, faces)
}
