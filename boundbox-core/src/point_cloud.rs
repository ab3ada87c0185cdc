//! Point cloud container
//!
//! Algorithms in this workspace never mutate a cloud in place; they take a
//! snapshot by reference and return fresh values. The one exception is
//! [`PointCloud::transform`], which hosts use to bake an object's world
//! transform into the cloud once, before any decomposition runs.

use crate::point::Point3d;
use crate::transform::Transform3D;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A generic point cloud container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointCloud<T> {
    pub points: Vec<T>,
}

/// A point cloud with double precision 3D points
pub type PointCloud3d = PointCloud<Point3d>;

impl<T> PointCloud<T> {
    /// Create a new empty point cloud
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a point cloud from a vector of points
    pub fn from_points(points: Vec<T>) -> Self {
        Self { points }
    }

    /// Get the number of points in the cloud
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the cloud
    pub fn push(&mut self, point: T) {
        self.points.push(point);
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.points.iter()
    }
}

impl<T> Index<usize> for PointCloud<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> IntoIterator for PointCloud<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PointCloud<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T> FromIterator<T> for PointCloud<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for PointCloud<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl PointCloud<Point3d> {
    /// Apply a transformation to all points in the cloud
    pub fn transform(&mut self, transform: &Transform3D) {
        for point in &mut self.points {
            *point = transform.transform_point(point);
        }
    }

    /// Return a transformed copy, leaving the original untouched
    pub fn transformed(&self, transform: &Transform3D) -> Self {
        self.iter()
            .map(|p| transform.transform_point(p))
            .collect()
    }
}
