//! Cutting planes.
//!
//! A plane is stored as a unit normal and a signed distance from the world origin,
//! so that `normal.dot(point) == distance` for every point on the plane. Points with
//! a positive signed distance lie "above" the plane.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlicerError};

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneSide {
    /// Signed distance greater than the tolerance.
    Above,
    /// Signed distance lower than the negated tolerance.
    Below,
    /// Within the tolerance of the plane.
    On,
}

/// An oriented plane used to cut meshes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    normal: Vec3,
    distance: f32,
}

impl Plane {
    /// Creates a plane from a normal and a signed distance along it.
    ///
    /// The normal does not need to be unit length; it is normalized and the distance
    /// rescaled so that the plane stays the same.
    pub fn new(normal: Vec3, distance: f32) -> Result<Self> {
        let length = normal.length();
        if !length.is_finite() || length <= f32::EPSILON || !distance.is_finite() {
            return Err(SlicerError::DegeneratePlane);
        }
        Ok(Self {
            normal: normal / length,
            distance: distance / length,
        })
    }

    /// Creates a plane passing through `point` with the given normal.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Result<Self> {
        let normal = normal.try_normalize().ok_or(SlicerError::DegeneratePlane)?;
        Self::new(normal, normal.dot(point))
    }

    /// Creates a plane through three points.
    ///
    /// The normal follows the counter-clockwise winding of `a`, `b`, `c`.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Result<Self> {
        Self::from_point_normal(a, (b - a).cross(c - a))
    }

    /// Returns the unit normal of the plane.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Returns the signed distance of the plane from the world origin.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Returns the point of the plane closest to the world origin.
    pub fn origin(&self) -> Vec3 {
        self.normal * self.distance
    }

    /// Returns the same plane with its orientation reversed.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            distance: -self.distance,
        }
    }

    /// Returns the signed distance from a point to the plane.
    ///
    /// Positive values are above the plane (along the normal), negative below.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// Classifies a point against the plane with the given tolerance.
    pub fn classify(&self, point: Vec3, epsilon: f32) -> PlaneSide {
        side_of(self.signed_distance(point), epsilon)
    }

    /// Projects a point onto the plane.
    pub fn project(&self, point: Vec3) -> Vec3 {
        point - self.signed_distance(point) * self.normal
    }
}

/// Classifies a signed distance with the given tolerance.
pub(crate) fn side_of(distance: f32, epsilon: f32) -> PlaneSide {
    if distance > epsilon {
        PlaneSide::Above
    } else if distance < -epsilon {
        PlaneSide::Below
    } else {
        PlaneSide::On
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_normalizes() {
        let plane = Plane::new(Vec3::new(0.0, 0.0, 2.0), 4.0).unwrap();
        assert_eq!(plane.normal(), Vec3::Z);
        assert!((plane.distance() - 2.0).abs() < 1e-6);
        assert!((plane.origin() - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-6);
    }

    #[test]
    fn test_zero_normal_rejected() {
        assert!(matches!(
            Plane::new(Vec3::ZERO, 1.0),
            Err(SlicerError::DegeneratePlane)
        ));
        assert!(matches!(
            Plane::from_point_normal(Vec3::ONE, Vec3::ZERO),
            Err(SlicerError::DegeneratePlane)
        ));
        assert!(Plane::new(Vec3::new(f32::NAN, 0.0, 1.0), 0.0).is_err());
    }

    #[test]
    fn test_from_point_normal() {
        let plane = Plane::from_point_normal(Vec3::new(3.0, 1.0, -2.0), Vec3::Y).unwrap();
        assert!((plane.distance() - 1.0).abs() < 1e-6);
        assert!(plane.signed_distance(Vec3::new(100.0, 1.0, 7.0)).abs() < 1e-6);
    }

    #[test]
    fn test_from_points_follows_winding() {
        let plane = Plane::from_points(Vec3::ZERO, Vec3::X, Vec3::Y).unwrap();
        assert!((plane.normal() - Vec3::Z).length() < 1e-6);

        let reversed = Plane::from_points(Vec3::ZERO, Vec3::Y, Vec3::X).unwrap();
        assert!((reversed.normal() + Vec3::Z).length() < 1e-6);

        assert!(Plane::from_points(Vec3::ZERO, Vec3::X, Vec3::X * 2.0).is_err());
    }

    #[test]
    fn test_signed_distance() {
        let plane = Plane::new(Vec3::Y, 0.0).unwrap();

        // Point above the plane (positive Y)
        assert!(plane.signed_distance(Vec3::new(0.0, 1.0, 0.0)) > 0.0);

        // Point below the plane (negative Y)
        assert!(plane.signed_distance(Vec3::new(0.0, -1.0, 0.0)) < 0.0);

        // Point on the plane
        assert!((plane.signed_distance(Vec3::new(1.0, 0.0, 1.0))).abs() < 1e-6);
    }

    #[test]
    fn test_classify() {
        let plane = Plane::new(Vec3::Z, 1.0).unwrap();
        assert_eq!(plane.classify(Vec3::new(0.0, 0.0, 2.0), 1e-6), PlaneSide::Above);
        assert_eq!(plane.classify(Vec3::new(0.0, 0.0, 0.0), 1e-6), PlaneSide::Below);
        assert_eq!(plane.classify(Vec3::new(5.0, 5.0, 1.0), 1e-6), PlaneSide::On);
        assert_eq!(plane.classify(Vec3::new(0.0, 0.0, 1.05), 0.1), PlaneSide::On);
    }

    #[test]
    fn test_flipped() {
        let plane = Plane::new(Vec3::X, 2.0).unwrap();
        let flipped = plane.flipped();
        let p = Vec3::new(5.0, 0.0, 0.0);
        assert!((plane.signed_distance(p) + flipped.signed_distance(p)).abs() < 1e-6);
    }

    #[test]
    fn test_project() {
        let plane = Plane::new(Vec3::Y, 0.0).unwrap();

        // Project point above plane onto plane
        let projected = plane.project(Vec3::new(1.0, 5.0, 2.0));
        assert!((projected - Vec3::new(1.0, 0.0, 2.0)).length() < 1e-6);
    }
}
