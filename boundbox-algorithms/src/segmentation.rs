//! Axis-aligned slab segmentation
//!
//! Partitions a point cloud into ordered buckets along one world axis, either
//! by a fixed bucket count or a fixed bucket width, and boxes each bucket.
//! Buckets are lower-inclusive and upper-exclusive; a point on an interior
//! boundary belongs to exactly one bucket. With `force_volume` the first
//! bucket loses its lower bound and the last its upper bound, so the whole
//! axis extent stays covered even when the offset shifts the grid outside the
//! point range.

use boundbox_core::{
    Aabb, Axis, BoxCorners, Error, Point3d, PointCloud, Reporter, Result,
};
use serde::{Deserialize, Serialize};

/// How the axis is carved into buckets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SegmentMode {
    /// Fixed number of buckets spanning the axis extent
    ByCount(usize),
    /// Fixed bucket width; the bucket count falls out of the extent
    ByWidth(f64),
}

/// Parameters for one segmentation pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentParams {
    pub axis: Axis,
    pub mode: SegmentMode,
    /// Shift applied to the bucket grid along the axis
    pub offset: f64,
    /// Widen the first and last buckets to cover the full extent
    pub force_volume: bool,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            mode: SegmentMode::ByCount(1),
            offset: 0.0,
            force_volume: true,
        }
    }
}

/// Segment a cloud along one axis into a chain of boxed buckets
///
/// Returns one 8-corner box per bucket that holds at least 2 points, in
/// bucket order along the axis. Degenerate buckets contribute nothing and
/// emit a warning. Width mode falls back to a single full-extent bucket (with
/// a warning) when the width spans the whole extent.
///
/// # Errors
/// [`Error::InvalidData`] for an empty cloud, a zero bucket count, or a
/// non-positive bucket width.
pub fn segment_axis(
    cloud: &PointCloud<Point3d>,
    params: &SegmentParams,
    reporter: &mut dyn Reporter,
) -> Result<Vec<BoxCorners>> {
    if cloud.is_empty() {
        return Err(Error::InvalidData(
            "cannot segment an empty point cloud".to_string(),
        ));
    }

    let axis = params.axis;
    let (axis_min, axis_max) = axis_bounds(cloud, axis);

    match params.mode {
        SegmentMode::ByCount(0) => Err(Error::InvalidData(
            "bucket count must be at least 1".to_string(),
        )),
        SegmentMode::ByCount(1) => {
            // single bucket spans everything, offset does not apply
            Ok(bucket_box(cloud.iter(), axis, reporter).into_iter().collect())
        }
        SegmentMode::ByCount(count) => {
            let width = (axis_max - axis_min) / count as f64;
            let grid_min = axis_min + params.offset;
            Ok(carve_buckets(cloud, params, grid_min, width, count, reporter))
        }
        SegmentMode::ByWidth(width) if width <= 0.0 => Err(Error::InvalidData(
            "bucket width must be positive".to_string(),
        )),
        SegmentMode::ByWidth(width) => {
            let count = ((axis_max - axis_min) / width) as usize;
            let grid_min = axis_min + params.offset;
            match count {
                0 => {
                    reporter.warn("bucket width exceeds the axis extent, falling back to a single bounding box");
                    Ok(bucket_box(cloud.iter(), axis, reporter).into_iter().collect())
                }
                1 => {
                    reporter.warn("bucket width spans the axis extent, falling back to a single bounding box");
                    if params.force_volume {
                        Ok(bucket_box(cloud.iter(), axis, reporter).into_iter().collect())
                    } else {
                        let selected = cloud
                            .iter()
                            .filter(|p| {
                                let c = axis.coord(p);
                                c >= grid_min && c < grid_min + width
                            });
                        Ok(bucket_box(selected, axis, reporter).into_iter().collect())
                    }
                }
                _ => Ok(carve_buckets(cloud, params, grid_min, width, count, reporter)),
            }
        }
    }
}

fn carve_buckets(
    cloud: &PointCloud<Point3d>,
    params: &SegmentParams,
    grid_min: f64,
    width: f64,
    count: usize,
    reporter: &mut dyn Reporter,
) -> Vec<BoxCorners> {
    let axis = params.axis;
    let mut boxes = Vec::with_capacity(count);
    for i in 0..count {
        let lower = grid_min + width * i as f64;
        let upper = grid_min + width * (i + 1) as f64;
        let in_bucket = |p: &&Point3d| -> bool {
            let c = axis.coord(p);
            if params.force_volume && i == count - 1 {
                c >= lower
            } else if params.force_volume && i == 0 {
                c < upper
            } else {
                c >= lower && c < upper
            }
        };
        boxes.extend(bucket_box(cloud.iter().filter(in_bucket), axis, reporter));
    }
    boxes
}

/// Box a bucket of points, or warn and yield nothing when the bucket holds
/// fewer than 2 points.
fn bucket_box<'a, I>(points: I, axis: Axis, reporter: &mut dyn Reporter) -> Option<BoxCorners>
where
    I: IntoIterator<Item = &'a Point3d>,
{
    let points: Vec<&Point3d> = points.into_iter().collect();
    if points.len() < 2 {
        reporter.warn("bucket holds fewer than 2 points, skipping its bounding box");
        return None;
    }
    Aabb::from_points(points).map(|aabb| aabb.corners(axis))
}

fn axis_bounds(cloud: &PointCloud<Point3d>, axis: Axis) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in cloud {
        let c = axis.coord(p);
        min = min.min(c);
        max = max.max(c);
    }
    (min, max)
}
