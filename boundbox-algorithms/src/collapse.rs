//! Collapsing a chain of segment boxes into one representative box
//!
//! Average mode treats the 8 corner slots independently: slot `i` of the
//! result is the arithmetic mean of slot `i` across all input boxes. Minimum
//! mode keeps the box with the smallest proxy volume, measured as the product
//! of the three edge lengths leaving corner 0 (to corners 1, 3 and 4). The
//! proxy equals the true volume only for rectangular boxes; it is kept as the
//! selection metric regardless, because consumers depend on which segment
//! wins, not on a volume estimate.

use boundbox_core::{Axis, BoxCorners, Point3d};
use serde::{Deserialize, Serialize};

/// How a chain of boxes is reduced to one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollapseMode {
    /// Per-corner-slot average of all boxes
    Average,
    /// The single box with the smallest proxy volume
    MinimumVolume,
}

/// Collapse segment boxes into a single 8-corner box
///
/// With `force_volume` the collapsed box is re-stretched along the
/// segmentation axis: corners 0-3 move to the global minimum and corners 4-7
/// to the global maximum across all input boxes, restoring the coverage the
/// collapse gave up. An empty chain is a legitimate "nothing to collapse"
/// case and yields `None`.
pub fn collapse_boxes(
    boxes: &[BoxCorners],
    mode: CollapseMode,
    axis: Axis,
    force_volume: bool,
) -> Option<BoxCorners> {
    if boxes.is_empty() {
        return None;
    }

    let mut collapsed = match mode {
        CollapseMode::Average => average_box(boxes),
        CollapseMode::MinimumVolume => boxes[min_proxy_volume_index(boxes)],
    };

    if force_volume {
        let k = axis.index();
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for corner in boxes.iter().flatten() {
            lo = lo.min(corner[k]);
            hi = hi.max(corner[k]);
        }
        for corner in collapsed.iter_mut().take(4) {
            corner[k] = lo;
        }
        for corner in collapsed.iter_mut().skip(4) {
            corner[k] = hi;
        }
    }

    Some(collapsed)
}

fn average_box(boxes: &[BoxCorners]) -> BoxCorners {
    let n = boxes.len() as f64;
    std::array::from_fn(|slot| {
        let mut sum = [0.0f64; 3];
        for corners in boxes {
            for (acc, c) in sum.iter_mut().zip(corners[slot].coords.iter()) {
                *acc += c;
            }
        }
        Point3d::new(sum[0] / n, sum[1] / n, sum[2] / n)
    })
}

/// Index of the box with the smallest proxy volume, first minimum wins
fn min_proxy_volume_index(boxes: &[BoxCorners]) -> usize {
    let mut best = 0;
    let mut best_volume = f64::INFINITY;
    for (i, corners) in boxes.iter().enumerate() {
        let volume = (corners[1] - corners[0]).norm()
            * (corners[3] - corners[0]).norm()
            * (corners[4] - corners[0]).norm();
        if volume < best_volume {
            best_volume = volume;
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use boundbox_core::Aabb;

    fn box_from(min: [f64; 3], max: [f64; 3], axis: Axis) -> BoxCorners {
        Aabb::new(
            Point3d::new(min[0], min[1], min[2]),
            Point3d::new(max[0], max[1], max[2]),
        )
        .corners(axis)
    }

    #[test]
    fn test_average_is_per_slot_mean() {
        let boxes = [
            box_from([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], Axis::X),
            box_from([2.0, 0.0, 0.0], [4.0, 3.0, 5.0], Axis::X),
        ];
        let collapsed = collapse_boxes(&boxes, CollapseMode::Average, Axis::X, false).unwrap();
        for slot in 0..8 {
            for k in 0..3 {
                let mean = (boxes[0][slot][k] + boxes[1][slot][k]) / 2.0;
                assert_relative_eq!(collapsed[slot][k], mean);
            }
        }
    }

    #[test]
    fn test_minimum_volume_picks_smallest() {
        let boxes = [
            box_from([0.0, 0.0, 0.0], [2.0, 2.0, 2.0], Axis::X),
            box_from([2.0, 0.0, 0.0], [3.0, 1.0, 1.0], Axis::X),
            box_from([3.0, 0.0, 0.0], [6.0, 3.0, 3.0], Axis::X),
        ];
        let collapsed =
            collapse_boxes(&boxes, CollapseMode::MinimumVolume, Axis::X, false).unwrap();
        assert_eq!(collapsed, boxes[1]);
    }

    #[test]
    fn test_minimum_volume_tie_keeps_first() {
        let boxes = [
            box_from([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], Axis::X),
            box_from([5.0, 0.0, 0.0], [6.0, 1.0, 1.0], Axis::X),
        ];
        let collapsed =
            collapse_boxes(&boxes, CollapseMode::MinimumVolume, Axis::X, false).unwrap();
        assert_eq!(collapsed, boxes[0]);
    }

    #[test]
    fn test_force_volume_restretches_along_axis() {
        let boxes = [
            box_from([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], Axis::X),
            box_from([1.0, 0.0, 0.0], [5.0, 1.0, 1.0], Axis::X),
        ];
        let collapsed =
            collapse_boxes(&boxes, CollapseMode::MinimumVolume, Axis::X, true).unwrap();
        for i in 0..4 {
            assert_relative_eq!(collapsed[i].x, 0.0);
            assert_relative_eq!(collapsed[i + 4].x, 5.0);
        }
        // other axes keep the winning box's geometry
        assert_relative_eq!(collapsed[1].y, 1.0);
    }

    #[test]
    fn test_average_force_volume_other_axis() {
        let boxes = [
            box_from([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], Axis::Z),
            box_from([0.0, 0.0, 1.0], [1.0, 1.0, 4.0], Axis::Z),
        ];
        let collapsed = collapse_boxes(&boxes, CollapseMode::Average, Axis::Z, true).unwrap();
        for i in 0..4 {
            assert_relative_eq!(collapsed[i].z, 0.0);
            assert_relative_eq!(collapsed[i + 4].z, 4.0);
        }
    }

    #[test]
    fn test_empty_chain_collapses_to_nothing() {
        assert!(collapse_boxes(&[], CollapseMode::Average, Axis::X, true).is_none());
    }
}
