//! Collaborator traits for boundbox
//!
//! The core is a pure computation library; convex hull construction and mesh
//! persistence belong to the host. These traits are the seams it binds
//! against.

use crate::bbox::Aabb;
use crate::error::Result;
use crate::mesh::{HullMesh, QuadMesh};
use crate::point::{Point3d, Vector3d};
use crate::point_cloud::PointCloud;

/// Supplies the triangulated convex hull of an arbitrary point set
///
/// Implementations typically delegate to a computational-geometry library or
/// the host application's own hull operator. Faces must be triangles with
/// outward normals; the solvers skip degenerate faces themselves.
pub trait HullProvider {
    fn convex_hull(&self, points: &[Point3d]) -> Result<HullMesh>;
}

/// Accepts a finished proxy mesh and persists it in the host scene
///
/// `parent` optionally names the source object the new mesh should be linked
/// under.
pub trait MeshSink {
    fn write_mesh(&mut self, name: &str, mesh: &QuadMesh, parent: Option<&str>) -> Result<()>;
}

/// Objects with a measurable axis-aligned extent
pub trait Bounded {
    /// Tight axis-aligned bounding box, `None` for empty geometry
    fn aabb(&self) -> Option<Aabb>;

    /// Per-axis extents, zero for empty geometry
    fn extents(&self) -> Vector3d {
        self.aabb()
            .map(|b| b.extents())
            .unwrap_or_else(Vector3d::zeros)
    }

    /// Center of the bounding box, origin for empty geometry
    fn center(&self) -> Point3d {
        self.aabb()
            .map(|b| b.center())
            .unwrap_or_else(Point3d::origin)
    }
}

impl Bounded for PointCloud<Point3d> {
    fn aabb(&self) -> Option<Aabb> {
        Aabb::from_points(&self.points)
    }
}

impl Bounded for QuadMesh {
    fn aabb(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }
}

impl Bounded for HullMesh {
    fn aabb(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_cloud_bounds() {
        let cloud = PointCloud::from_points(vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(2.0, 4.0, 6.0),
        ]);
        let extents = cloud.extents();
        assert_relative_eq!(extents.x, 2.0);
        assert_relative_eq!(extents.y, 4.0);
        assert_relative_eq!(extents.z, 6.0);
        let center = cloud.center();
        assert_relative_eq!(center.x, 1.0);
        assert_relative_eq!(center.y, 2.0);
        assert_relative_eq!(center.z, 3.0);
    }

    #[test]
    fn test_empty_cloud_bounds() {
        let cloud: PointCloud<Point3d> = PointCloud::new();
        assert!(cloud.aabb().is_none());
        assert_relative_eq!(cloud.extents().norm(), 0.0);
    }
}
