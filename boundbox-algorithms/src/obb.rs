//! Minimum-volume oriented bounding box search
//!
//! The search is a discretized rotating-calipers pass: every triangular hull
//! face contributes up to three orthonormal candidate bases (one per edge),
//! the point cloud is projected into each basis, and the basis whose
//! axis-aligned extents enclose the smallest volume wins. Ties keep the
//! first-encountered basis, which makes the result deterministic for a fixed
//! hull; the parallel variant preserves that by reducing in candidate order.

use boundbox_core::{Error, HullMesh, Matrix3, Point3d, QuadMesh, Result, Vector3d};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::box_mesh::CUBE_QUADS;

/// Faces whose normal has no component larger than this are degenerate and
/// contribute no candidate bases.
const DEGENERATE_NORMAL_EPS: f64 = 1.0e-5;

/// An orthonormal frame derived from a hull face: in-face edge tangent, its
/// co-tangent, and the face normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Basis {
    pub tangent: Vector3d,
    pub cotangent: Vector3d,
    pub normal: Vector3d,
}

impl Basis {
    /// Rotation matrix whose rows are the basis vectors
    pub fn to_matrix(&self) -> Matrix3<f64> {
        Matrix3::from_rows(&[
            self.tangent.transpose(),
            self.cotangent.transpose(),
            self.normal.transpose(),
        ])
    }

    /// Project a point into this frame.
    ///
    /// The basis matrix is orthonormal, so its inverse is its transpose and
    /// each projected coordinate is a plain dot product. No matrix inversion.
    pub fn project(&self, point: &Point3d) -> Vector3d {
        let p = point.coords;
        Vector3d::new(p.dot(&self.tangent), p.dot(&self.cotangent), p.dot(&self.normal))
    }

    /// Map frame-local coordinates back to world space
    pub fn unproject(&self, local: &Vector3d) -> Vector3d {
        self.tangent * local.x + self.cotangent * local.y + self.normal * local.z
    }
}

/// Derive candidate bases from the faces of a triangulated convex hull
///
/// Each non-degenerate face yields one basis per edge: the normalized edge
/// vector, the normal-cross-edge co-tangent, and the face normal. Candidates
/// are not deduplicated; evaluating a duplicate costs time but never changes
/// the result.
pub fn candidate_bases(hull: &HullMesh) -> Vec<Basis> {
    let mut bases = Vec::with_capacity(hull.face_count() * 3);
    for (face_idx, face) in hull.faces.iter().enumerate() {
        let normal = hull.normals[face_idx];
        // a zero-area face normalizes to NaN, so non-finite counts as degenerate
        if !normal.amax().is_finite() || normal.amax() <= DEGENERATE_NORMAL_EPS {
            continue;
        }

        for (a, b) in [(face[0], face[1]), (face[1], face[2]), (face[2], face[0])] {
            let v0 = hull.vertices[a];
            let v1 = hull.vertices[b];
            let Some(tangent) = (v0 - v1).try_normalize(1.0e-12) else {
                continue;
            };
            let cotangent = normal.cross(&tangent);
            bases.push(Basis {
                tangent,
                cotangent,
                normal,
            });
        }
    }
    bases
}

/// A minimum-volume oriented bounding box: the winning basis plus the
/// projected extents of the cloud in that basis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obb {
    pub basis: Basis,
    /// Per-axis minimum of the cloud projected into the basis
    pub min: Vector3d,
    /// Per-axis maximum of the cloud projected into the basis
    pub max: Vector3d,
}

/// Unit cube corner signs matching [`CUBE_QUADS`]
const UNIT_CUBE: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
];

impl Obb {
    /// Per-axis extents in the basis frame
    pub fn extents(&self) -> Vector3d {
        self.max - self.min
    }

    /// Half extents in the basis frame
    pub fn half_extents(&self) -> Vector3d {
        self.extents() / 2.0
    }

    /// Enclosed volume
    pub fn volume(&self) -> f64 {
        let e = self.extents();
        e.x * e.y * e.z
    }

    /// Box center in world space
    pub fn center(&self) -> Point3d {
        let local = (self.max + self.min) / 2.0;
        Point3d::from(self.basis.unproject(&local))
    }

    /// The 8 world-space corners, in the fixed unit-cube order the quad
    /// pattern [`CUBE_QUADS`] indexes into
    pub fn corners(&self) -> [Point3d; 8] {
        let center = self.center();
        let half = self.half_extents();
        UNIT_CUBE.map(|signs| {
            let local = Vector3d::new(signs[0] * half.x, signs[1] * half.y, signs[2] * half.z);
            center + self.basis.unproject(&local)
        })
    }

    /// Build the quad-faced box mesh for this OBB
    pub fn to_mesh(&self) -> QuadMesh {
        QuadMesh::from_vertices_and_faces(self.corners().to_vec(), CUBE_QUADS.to_vec())
    }
}

/// Find the candidate basis enclosing the cloud with minimum volume
///
/// The first basis seen initializes the best volume and only a strictly
/// smaller volume replaces it, so ties keep the first-found basis.
///
/// # Errors
/// Returns [`Error::DegenerateHull`] when no candidate bases exist (all hull
/// faces degenerate) and [`Error::InvalidData`] for an empty cloud.
pub fn minimum_volume_obb(points: &[Point3d], bases: &[Basis]) -> Result<Obb> {
    if points.is_empty() {
        return Err(Error::InvalidData(
            "cannot fit an oriented box around an empty point cloud".to_string(),
        ));
    }
    if bases.is_empty() {
        return Err(Error::DegenerateHull(
            "no valid candidate bases, all hull faces are degenerate".to_string(),
        ));
    }

    let mut best: Option<Obb> = None;
    let mut best_volume = f64::INFINITY;
    for basis in bases {
        let (min, max, volume) = measure_basis(points, basis);
        if volume < best_volume {
            best_volume = volume;
            best = Some(Obb {
                basis: *basis,
                min,
                max,
            });
        }
    }

    // non-finite coordinates can leave every candidate volume NaN
    best.ok_or_else(|| {
        Error::DegenerateHull("every candidate basis produced a non-finite volume".to_string())
    })
}

/// Parallel variant of [`minimum_volume_obb`]
///
/// Candidate evaluation is embarrassingly parallel; the reduction walks the
/// measured volumes in candidate order so the first-minimum tie-break is
/// identical to the sequential solver.
pub fn minimum_volume_obb_parallel(points: &[Point3d], bases: &[Basis]) -> Result<Obb> {
    if points.is_empty() {
        return Err(Error::InvalidData(
            "cannot fit an oriented box around an empty point cloud".to_string(),
        ));
    }
    if bases.is_empty() {
        return Err(Error::DegenerateHull(
            "no valid candidate bases, all hull faces are degenerate".to_string(),
        ));
    }

    let measured: Vec<(Vector3d, Vector3d, f64)> = bases
        .par_iter()
        .map(|basis| measure_basis(points, basis))
        .collect();

    let mut best: Option<Obb> = None;
    let mut best_volume = f64::INFINITY;
    for (basis, (min, max, volume)) in bases.iter().zip(measured) {
        if volume < best_volume {
            best_volume = volume;
            best = Some(Obb {
                basis: *basis,
                min,
                max,
            });
        }
    }

    best.ok_or_else(|| {
        Error::DegenerateHull("every candidate basis produced a non-finite volume".to_string())
    })
}

/// Solve the minimum-volume OBB directly from a hull: candidates from its
/// faces, extents measured over its vertices.
pub fn minimum_volume_obb_from_hull(hull: &HullMesh) -> Result<Obb> {
    let bases = candidate_bases(hull);
    minimum_volume_obb(&hull.vertices, &bases)
}

fn measure_basis(points: &[Point3d], basis: &Basis) -> (Vector3d, Vector3d, f64) {
    let first = basis.project(&points[0]);
    let mut min = first;
    let mut max = first;
    for point in &points[1..] {
        let p = basis.project(point);
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        min.z = min.z.min(p.z);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
        max.z = max.z.max(p.z);
    }
    let e = max - min;
    (min, max, e.x * e.y * e.z)
}
