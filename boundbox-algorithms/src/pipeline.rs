//! Proxy generation pipeline
//!
//! Ties the solvers together the way a host batch runs them: per object,
//! either the segmented path (axis segmentation, optional collapse, chain
//! stitching) or the minimal path (convex hull, candidate bases,
//! minimum-volume OBB). Fatal errors stop only the current object; the batch
//! reports them and moves on. When every selected object should share one
//! proxy, the segmented result is computed once from a reference object and
//! reused, an explicit cache instead of loop-carried state.

use boundbox_core::{
    Axis, HullProvider, MeshSink, Point3d, PointCloud, QuadMesh, Reporter, Result,
};
use serde::{Deserialize, Serialize};

use crate::box_mesh::chain_mesh;
use crate::collapse::{collapse_boxes, CollapseMode};
use crate::obb::minimum_volume_obb_from_hull;
use crate::segmentation::{segment_axis, SegmentMode, SegmentParams};

/// Decomposition axis, or the minimal-OBB search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProxyAxis {
    X,
    Y,
    Z,
    /// No fixed axis: search the minimum-volume oriented box instead
    Minimal,
}

impl ProxyAxis {
    fn segmentation_axis(&self) -> Option<Axis> {
        match self {
            ProxyAxis::X => Some(Axis::X),
            ProxyAxis::Y => Some(Axis::Y),
            ProxyAxis::Z => Some(Axis::Z),
            ProxyAxis::Minimal => None,
        }
    }
}

/// Configuration for proxy generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub axis: ProxyAxis,
    pub mode: SegmentMode,
    /// Shift of the segmentation grid along the axis
    pub offset: f64,
    /// Collapse the segment chain into a single box
    pub collapse: Option<CollapseMode>,
    /// Widen edge buckets / re-stretch the collapsed box to full extent
    pub force_volume: bool,
    /// Compute the segmented proxy once from the reference object and reuse
    /// it for every object in the batch
    pub shared_mesh: bool,
    /// Name suffix for generated proxy objects
    pub suffix: String,
    /// Link each proxy under its source object
    pub parent: bool,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            axis: ProxyAxis::X,
            mode: SegmentMode::ByCount(1),
            offset: 0.0,
            collapse: None,
            force_volume: true,
            shared_mesh: false,
            suffix: "-colonly".to_string(),
            parent: true,
        }
    }
}

/// Build the collision proxy mesh for one object
///
/// The segmented path may legitimately produce an empty mesh when every
/// bucket degenerates; the warnings have already been reported by then.
pub fn build_proxy<H: HullProvider>(
    cloud: &PointCloud<Point3d>,
    hull_provider: &H,
    config: &ProxyConfig,
    reporter: &mut dyn Reporter,
) -> Result<QuadMesh> {
    match config.axis.segmentation_axis() {
        None => {
            let hull = hull_provider.convex_hull(&cloud.points)?;
            let obb = minimum_volume_obb_from_hull(&hull)?;
            Ok(obb.to_mesh())
        }
        Some(axis) => {
            let params = SegmentParams {
                axis,
                mode: config.mode,
                offset: config.offset,
                force_volume: config.force_volume,
            };
            let mut boxes = segment_axis(cloud, &params, reporter)?;
            if let Some(mode) = config.collapse {
                boxes = collapse_boxes(&boxes, mode, axis, config.force_volume)
                    .map(|b| vec![b])
                    .unwrap_or_default();
            }
            Ok(chain_mesh(&boxes))
        }
    }
}

/// Generate and persist proxies for a batch of named objects
///
/// The first object acts as the reference for `shared_mesh` reuse; the
/// minimal-OBB path is always computed per object. Returns the number of
/// meshes written. Per-object failures are reported and skipped without
/// stopping the batch.
pub fn build_proxy_batch<H: HullProvider, S: MeshSink>(
    objects: &[(String, PointCloud<Point3d>)],
    hull_provider: &H,
    sink: &mut S,
    config: &ProxyConfig,
    reporter: &mut dyn Reporter,
) -> Result<usize> {
    let mut shared: Option<QuadMesh> = None;
    if config.shared_mesh && config.axis != ProxyAxis::Minimal {
        if let Some((name, cloud)) = objects.first() {
            match build_proxy(cloud, hull_provider, config, reporter) {
                Ok(mesh) => shared = Some(mesh),
                Err(err) => {
                    reporter.warn(&format!("shared proxy from '{}' failed: {}", name, err));
                }
            }
        }
    }

    let mut written = 0;
    for (name, cloud) in objects {
        let mesh = match &shared {
            Some(mesh) => mesh.clone(),
            None => match build_proxy(cloud, hull_provider, config, reporter) {
                Ok(mesh) => mesh,
                Err(err) => {
                    reporter.warn(&format!("skipping '{}': {}", name, err));
                    continue;
                }
            },
        };
        if mesh.is_empty() {
            reporter.warn(&format!("'{}' produced no proxy geometry", name));
            continue;
        }
        let proxy_name = format!("{}{}", name, config.suffix);
        let parent = config.parent.then_some(name.as_str());
        sink.write_mesh(&proxy_name, &mesh, parent)?;
        written += 1;
    }
    Ok(written)
}
