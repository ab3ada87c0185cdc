//! Grid placement of objects by their bounding extents
//!
//! Lays N objects out on a 2D grid inside a chosen working plane, the third
//! axis pinned to the origin corner. Three layout policies: compact packs
//! rows and columns tightly from accumulated half-extents, even spacing uses
//! one global pitch per plane axis, and fixed distance uses user-supplied
//! pitches. Placement is written back into the caller's position slice; a
//! rejected layout writes nothing.

use boundbox_core::{Bounded, Error, Point3d, Reporter, Result, Vector3d};
use serde::{Deserialize, Serialize};

/// Layout policy for the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridMode {
    /// Minimum space without overlap
    Compact,
    /// Even spacing from the largest extents
    EvenSpacing,
    /// User-defined pitch per plane axis
    FixedDistance,
}

/// Working plane: primary axis, secondary axis, pinned axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridPlane {
    Xy,
    Yx,
    Xz,
    Zx,
    Yz,
    Zy,
}

impl GridPlane {
    /// Coordinate indices (primary, secondary, pinned)
    pub fn axes(&self) -> (usize, usize, usize) {
        match self {
            GridPlane::Xy => (0, 1, 2),
            GridPlane::Yx => (1, 0, 2),
            GridPlane::Xz => (0, 2, 1),
            GridPlane::Zx => (2, 0, 1),
            GridPlane::Yz => (1, 2, 0),
            GridPlane::Zy => (2, 1, 0),
        }
    }
}

/// Ordering of objects before placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeSort {
    /// Smallest projected-plane area first
    SmallestFirst,
    /// Biggest projected-plane area first
    BiggestFirst,
    /// Keep the input order
    Unsorted,
}

/// Parameters for one grid layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    pub mode: GridMode,
    pub plane: GridPlane,
    /// Requested row count, clamped to the object count
    pub rows: usize,
    /// Extra separation accumulated per column / per row
    pub padding: f64,
    /// Fixed-distance pitch along the primary and secondary plane axes
    pub distance: (f64, f64),
    pub sort: SizeSort,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            mode: GridMode::Compact,
            plane: GridPlane::Xy,
            rows: 1,
            padding: 0.1,
            distance: (1.0, 1.0),
            sort: SizeSort::SmallestFirst,
        }
    }
}

/// Place objects on a grid, writing each object's new position back into
/// `positions` (indexed like `extents`, in input order).
///
/// Fewer than 2 objects is a silent no-op. A layout whose row count yields
/// zero columns or guarantees empty rows is rejected with a warning before
/// any position is written.
///
/// # Errors
/// [`Error::InvalidData`] for mismatched slice lengths, a zero row count, or
/// a rejected layout.
pub fn distribute_grid(
    extents: &[Vector3d],
    positions: &mut [Point3d],
    corner: &Point3d,
    params: &GridParams,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    if extents.len() != positions.len() {
        return Err(Error::InvalidData(
            "extents and positions must have the same length".to_string(),
        ));
    }
    if params.rows == 0 {
        return Err(Error::InvalidData("row count must be at least 1".to_string()));
    }

    let count = extents.len();
    if count < 2 {
        // nothing to distribute, leave placements untouched by design
        return Ok(());
    }

    let rows = params.rows.min(count);
    let (d1, d2, d3) = params.plane.axes();

    let areas: Vec<f64> = extents.iter().map(|e| e[d1] * e[d2]).collect();
    let mut sorting: Vec<usize> = (0..count).collect();
    match params.sort {
        SizeSort::SmallestFirst => {
            sorting.sort_by(|&a, &b| areas[a].total_cmp(&areas[b]));
        }
        SizeSort::BiggestFirst => {
            sorting.sort_by(|&a, &b| areas[a].total_cmp(&areas[b]));
            sorting.reverse();
        }
        SizeSort::Unsorted => {}
    }

    let mut cols = count / rows;
    if cols == 0 {
        reporter.warn("too many rows for the selected objects");
        return Err(Error::InvalidData("too many rows".to_string()));
    }
    if count % rows != 0 {
        cols += 1;
    }
    if cols * (rows - 1) >= count {
        reporter.warn("number of rows chosen generates empty rows");
        return Err(Error::InvalidData(
            "row count would generate empty rows".to_string(),
        ));
    }

    let padding1: Vec<f64> = (0..count).map(|i| params.padding * (i % cols) as f64).collect();
    let padding2: Vec<f64> = (0..rows).map(|i| params.padding * i as f64).collect();

    if params.mode == GridMode::Compact {
        let halfdist1: Vec<f64> = sorting.iter().map(|&i| extents[i][d1] * 0.5).collect();
        let mut centerdist = vec![0.0f64; count];
        for i in 1..count {
            if i % cols == 0 {
                continue;
            }
            centerdist[i] = halfdist1[i] + halfdist1[i - 1] + centerdist[i - 1];
        }

        // each row advances by the max half-extent of itself and its
        // predecessor, so rows never overlap
        let halfdist2: Vec<f64> = (0..rows)
            .map(|r| {
                sorting[r * cols..count.min((r + 1) * cols)]
                    .iter()
                    .map(|&i| extents[i][d2] * 0.5)
                    .fold(f64::NEG_INFINITY, f64::max)
            })
            .collect();
        let mut d2pads = vec![0.0f64; rows];
        for r in 1..rows {
            d2pads[r] = halfdist2[r] + halfdist2[r - 1] + d2pads[r - 1];
        }

        for (ip, &iob) in sorting.iter().enumerate() {
            positions[iob][d1] = centerdist[ip] + padding1[ip] + corner[d1];
            positions[iob][d2] = d2pads[ip / cols] + padding2[ip / cols] + corner[d2];
            positions[iob][d3] = corner[d3];
        }
        return Ok(());
    }

    let (dist1, dist2) = match params.mode {
        GridMode::EvenSpacing => (
            extents.iter().map(|e| e[d1]).fold(f64::NEG_INFINITY, f64::max),
            extents.iter().map(|e| e[d2]).fold(f64::NEG_INFINITY, f64::max),
        ),
        GridMode::FixedDistance => params.distance,
        GridMode::Compact => unreachable!(),
    };

    for (ip, &iob) in sorting.iter().enumerate() {
        let i_pos = ip % cols;
        let j_pos = ip / cols;
        positions[iob][d1] = i_pos as f64 * dist1 + corner[d1] + padding1[i_pos];
        positions[iob][d2] = j_pos as f64 * dist2 + corner[d2] + padding2[j_pos];
        positions[iob][d3] = corner[d3];
    }
    Ok(())
}

/// Place [`Bounded`] objects on a grid, measuring each one's extents itself.
///
/// Convenience over [`distribute_grid`] for callers holding geometry rather
/// than precomputed extent vectors. Empty geometry measures as zero extent
/// and occupies a cell like any other object.
pub fn distribute_bounded<B: Bounded>(
    objects: &[B],
    positions: &mut [Point3d],
    corner: &Point3d,
    params: &GridParams,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let extents: Vec<Vector3d> = objects.iter().map(Bounded::extents).collect();
    distribute_grid(&extents, positions, corner, params, reporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use boundbox_core::{MemoryReporter, PointCloud};

    fn unit_extents(n: usize) -> Vec<Vector3d> {
        vec![Vector3d::new(1.0, 1.0, 1.0); n]
    }

    fn origin_positions(n: usize) -> Vec<Point3d> {
        vec![Point3d::origin(); n]
    }

    #[test]
    fn test_compact_four_unit_cubes() {
        let extents = unit_extents(4);
        let mut positions = origin_positions(4);
        let params = GridParams {
            mode: GridMode::Compact,
            plane: GridPlane::Xy,
            rows: 2,
            padding: 0.0,
            distance: (1.0, 1.0),
            sort: SizeSort::Unsorted,
        };
        let mut reporter = MemoryReporter::new();
        distribute_grid(
            &extents,
            &mut positions,
            &Point3d::origin(),
            &params,
            &mut reporter,
        )
        .unwrap();

        let expected = [
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
            (1.0, 1.0),
        ];
        for (pos, (x, y)) in positions.iter().zip(expected) {
            assert_relative_eq!(pos.x, x);
            assert_relative_eq!(pos.y, y);
            assert_relative_eq!(pos.z, 0.0);
        }
        assert_eq!(reporter.warning_count(), 0);
    }

    #[test]
    fn test_compact_padding_accumulates() {
        let extents = unit_extents(4);
        let mut positions = origin_positions(4);
        let params = GridParams {
            mode: GridMode::Compact,
            plane: GridPlane::Xy,
            rows: 2,
            padding: 0.5,
            distance: (1.0, 1.0),
            sort: SizeSort::Unsorted,
        };
        let mut reporter = MemoryReporter::new();
        distribute_grid(
            &extents,
            &mut positions,
            &Point3d::origin(),
            &params,
            &mut reporter,
        )
        .unwrap();
        assert_relative_eq!(positions[1].x, 1.5);
        assert_relative_eq!(positions[2].y, 1.5);
        assert_relative_eq!(positions[3].x, 1.5);
        assert_relative_eq!(positions[3].y, 1.5);
    }

    #[test]
    fn test_five_objects_three_rows_accepted() {
        let extents = unit_extents(5);
        let mut positions = origin_positions(5);
        let params = GridParams {
            rows: 3,
            padding: 0.0,
            sort: SizeSort::Unsorted,
            ..Default::default()
        };
        let mut reporter = MemoryReporter::new();
        // cols = ceil(5/3) = 2 and 2 * (3-1) = 4 < 5, so the layout stands
        distribute_grid(
            &extents,
            &mut positions,
            &Point3d::origin(),
            &params,
            &mut reporter,
        )
        .unwrap();
        assert_eq!(reporter.warning_count(), 0);
    }

    #[test]
    fn test_five_objects_four_rows_rejected() {
        let extents = unit_extents(5);
        let mut positions = origin_positions(5);
        let params = GridParams {
            rows: 4,
            padding: 0.0,
            sort: SizeSort::Unsorted,
            ..Default::default()
        };
        let mut reporter = MemoryReporter::new();
        // cols = 2 and 2 * (4-1) = 6 >= 5, a row would stay empty
        let result = distribute_grid(
            &extents,
            &mut positions,
            &Point3d::origin(),
            &params,
            &mut reporter,
        );
        assert!(matches!(result, Err(Error::InvalidData(_))));
        assert!(reporter.contains("empty rows"));
        // no partial layout applied
        for pos in &positions {
            assert_relative_eq!(pos.coords.norm(), 0.0);
        }
    }

    #[test]
    fn test_row_count_clamped_to_object_count() {
        let extents = unit_extents(3);
        let mut positions = origin_positions(3);
        let params = GridParams {
            rows: 100,
            padding: 0.0,
            sort: SizeSort::Unsorted,
            ..Default::default()
        };
        let mut reporter = MemoryReporter::new();
        // clamped to 3 rows of one column each
        distribute_grid(
            &extents,
            &mut positions,
            &Point3d::origin(),
            &params,
            &mut reporter,
        )
        .unwrap();
        assert_relative_eq!(positions[0].y, 0.0);
        assert_relative_eq!(positions[1].y, 1.0);
        assert_relative_eq!(positions[2].y, 2.0);
    }

    #[test]
    fn test_sort_orders() {
        let extents = vec![
            Vector3d::new(2.0, 2.0, 1.0),
            Vector3d::new(1.0, 1.0, 1.0),
        ];
        let params = GridParams {
            mode: GridMode::FixedDistance,
            distance: (10.0, 10.0),
            rows: 1,
            padding: 0.0,
            sort: SizeSort::SmallestFirst,
            ..Default::default()
        };
        let mut reporter = MemoryReporter::new();

        let mut positions = origin_positions(2);
        distribute_grid(
            &extents,
            &mut positions,
            &Point3d::origin(),
            &params,
            &mut reporter,
        )
        .unwrap();
        // smaller object takes the first cell
        assert_relative_eq!(positions[1].x, 0.0);
        assert_relative_eq!(positions[0].x, 10.0);

        let params = GridParams {
            sort: SizeSort::BiggestFirst,
            ..params
        };
        let mut positions = origin_positions(2);
        distribute_grid(
            &extents,
            &mut positions,
            &Point3d::origin(),
            &params,
            &mut reporter,
        )
        .unwrap();
        assert_relative_eq!(positions[0].x, 0.0);
        assert_relative_eq!(positions[1].x, 10.0);
    }

    #[test]
    fn test_even_spacing_uses_global_max_pitch() {
        let extents = vec![
            Vector3d::new(1.0, 1.0, 1.0),
            Vector3d::new(3.0, 2.0, 1.0),
            Vector3d::new(2.0, 1.0, 1.0),
        ];
        let mut positions = origin_positions(3);
        let params = GridParams {
            mode: GridMode::EvenSpacing,
            rows: 1,
            padding: 0.0,
            sort: SizeSort::Unsorted,
            ..Default::default()
        };
        let mut reporter = MemoryReporter::new();
        distribute_grid(
            &extents,
            &mut positions,
            &Point3d::origin(),
            &params,
            &mut reporter,
        )
        .unwrap();
        assert_relative_eq!(positions[0].x, 0.0);
        assert_relative_eq!(positions[1].x, 3.0);
        assert_relative_eq!(positions[2].x, 6.0);
    }

    #[test]
    fn test_plane_pins_third_axis_to_corner() {
        let extents = unit_extents(2);
        let mut positions = origin_positions(2);
        let corner = Point3d::new(5.0, 6.0, 7.0);
        let params = GridParams {
            mode: GridMode::FixedDistance,
            plane: GridPlane::Yz,
            distance: (2.0, 2.0),
            rows: 1,
            padding: 0.0,
            sort: SizeSort::Unsorted,
            ..Default::default()
        };
        let mut reporter = MemoryReporter::new();
        distribute_grid(&extents, &mut positions, &corner, &params, &mut reporter).unwrap();
        // x is the pinned axis for the YZ plane
        assert_relative_eq!(positions[0].x, 5.0);
        assert_relative_eq!(positions[1].x, 5.0);
        assert_relative_eq!(positions[1].y, 8.0);
    }

    #[test]
    fn test_bounded_objects_measured_in_place() {
        let wide = PointCloud::from_points(vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(2.0, 1.0, 1.0),
        ]);
        let cube = PointCloud::from_points(vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(1.0, 1.0, 1.0),
        ]);
        let objects = vec![wide, cube];
        let mut positions = origin_positions(2);
        let params = GridParams {
            mode: GridMode::Compact,
            rows: 1,
            padding: 0.0,
            sort: SizeSort::Unsorted,
            ..Default::default()
        };
        let mut reporter = MemoryReporter::new();
        distribute_bounded(
            &objects,
            &mut positions,
            &Point3d::origin(),
            &params,
            &mut reporter,
        )
        .unwrap();
        // centers sit half an extent apart: 2/2 + 1/2
        assert_relative_eq!(positions[0].x, 0.0);
        assert_relative_eq!(positions[1].x, 1.5);
    }

    #[test]
    fn test_single_object_is_silent_noop() {
        let extents = unit_extents(1);
        let mut positions = vec![Point3d::new(9.0, 9.0, 9.0)];
        let mut reporter = MemoryReporter::new();
        distribute_grid(
            &extents,
            &mut positions,
            &Point3d::origin(),
            &GridParams::default(),
            &mut reporter,
        )
        .unwrap();
        assert_relative_eq!(positions[0].x, 9.0);
        assert!(reporter.reports.is_empty());
    }
}
