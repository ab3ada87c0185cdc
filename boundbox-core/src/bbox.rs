//! Axis-aligned bounding boxes and their 8-corner representation
//!
//! Segmented decomposition works on explicit corner tuples rather than
//! min/max pairs, because the downstream chain stitching and collapse steps
//! address individual corner slots. The corner winding depends on the
//! segmentation axis: slots 0-3 always form the near face along that axis and
//! slots 4-7 the far face, with slot `i` and slot `i + 4` being
//! axis-corresponding pairs. Collapse and stitching rely on this layout.

use crate::point::{Point3d, Vector3d};
use serde::{Deserialize, Serialize};

/// A world coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Coordinate index of this axis (0, 1 or 2)
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Coordinate of a point along this axis
    pub fn coord(&self, point: &Point3d) -> f64 {
        point[self.index()]
    }
}

/// The 8 corners of a box, in the axis-dependent winding described above
pub type BoxCorners = [Point3d; 8];

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Point3d,
    pub max: Point3d,
}

impl Aabb {
    /// Create an AABB from explicit bounds
    pub fn new(min: Point3d, max: Point3d) -> Self {
        Self { min, max }
    }

    /// Tight AABB of a point set, `None` if the set is empty
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3d>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut min = first;
        let mut max = first;
        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }
        Some(Self { min, max })
    }

    /// Per-axis extents (max - min)
    pub fn extents(&self) -> Vector3d {
        self.max - self.min
    }

    /// Center point
    pub fn center(&self) -> Point3d {
        Point3d::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Enclosed volume
    pub fn volume(&self) -> f64 {
        let e = self.extents();
        e.x * e.y * e.z
    }

    /// The 8 corners of this box, wound for the given segmentation axis so
    /// that corners 0-3 sit on the near face and 4-7 on the far face.
    pub fn corners(&self, axis: Axis) -> BoxCorners {
        let (min, max) = (self.min, self.max);
        match axis {
            Axis::X => [
                Point3d::new(min.x, min.y, min.z),
                Point3d::new(min.x, max.y, min.z),
                Point3d::new(min.x, max.y, max.z),
                Point3d::new(min.x, min.y, max.z),
                Point3d::new(max.x, min.y, min.z),
                Point3d::new(max.x, max.y, min.z),
                Point3d::new(max.x, max.y, max.z),
                Point3d::new(max.x, min.y, max.z),
            ],
            Axis::Y => [
                Point3d::new(min.x, min.y, min.z),
                Point3d::new(min.x, min.y, max.z),
                Point3d::new(max.x, min.y, max.z),
                Point3d::new(max.x, min.y, min.z),
                Point3d::new(min.x, max.y, min.z),
                Point3d::new(min.x, max.y, max.z),
                Point3d::new(max.x, max.y, max.z),
                Point3d::new(max.x, max.y, min.z),
            ],
            Axis::Z => [
                Point3d::new(min.x, min.y, min.z),
                Point3d::new(max.x, min.y, min.z),
                Point3d::new(max.x, max.y, min.z),
                Point3d::new(min.x, max.y, min.z),
                Point3d::new(min.x, min.y, max.z),
                Point3d::new(max.x, min.y, max.z),
                Point3d::new(max.x, max.y, max.z),
                Point3d::new(min.x, max.y, max.z),
            ],
        }
    }
}
