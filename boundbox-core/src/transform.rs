//! 3D transformation utilities
//!
//! Hosts apply an object's world transform to its vertices once, up front,
//! so the decomposition algorithms always work in world space.

use nalgebra::{Isometry3, Matrix4, Point3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D transformation that can be applied to points and point clouds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub matrix: Matrix4<f64>,
}

impl Transform3D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation
    pub fn translation(translation: Vector3<f64>) -> Self {
        Self {
            matrix: Matrix4::new_translation(&translation),
        }
    }

    /// Create a rotation transformation from a quaternion
    pub fn rotation(rotation: UnitQuaternion<f64>) -> Self {
        Self {
            matrix: rotation.to_homogeneous(),
        }
    }

    /// Create a scaling transformation
    pub fn scaling(scale: Vector3<f64>) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&scale),
        }
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        let homogeneous = self.matrix * point.to_homogeneous();
        Point3::from_homogeneous(homogeneous).unwrap_or(*point)
    }

    /// Apply the transformation to a vector (ignores translation)
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0) * vector
    }

    /// Compose this transformation with another
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Get the inverse transformation
    pub fn inverse(self) -> Option<Self> {
        self.matrix
            .try_inverse()
            .map(|inv_matrix| Self { matrix: inv_matrix })
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Matrix4<f64>> for Transform3D {
    fn from(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }
}

impl From<Isometry3<f64>> for Transform3D {
    fn from(isometry: Isometry3<f64>) -> Self {
        Self {
            matrix: isometry.to_homogeneous(),
        }
    }
}
