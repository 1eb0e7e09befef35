// src/physics/operations/rotation.rs

use crate::model::{Dimension, Point3, PointSet};
use nalgebra::{Point3 as NaPoint3, Rotation2, Rotation3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Rotation angles in degrees about the x, y and z axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EulerAngles {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_identity(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// `Rz(z) * Ry(y) * Rx(x)`: x is applied first, z last.
    pub fn matrix(&self) -> Rotation3<f64> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), self.x.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), self.y.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), self.z.to_radians());
        rz * ry * rx
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum RotationCenter {
    #[default]
    Origin,
    Centroid,
}

/// Rotates a planar point set by `theta` degrees about the origin.
pub fn rotate_planar(points: &PointSet, theta: f64) -> PointSet {
    let rot = Rotation2::new(theta.to_radians());
    points.map_points(|p| {
        let v = rot * Vector2::new(p[0], p[1]);
        [v.x, v.y, p[2]]
    })
}

/// Rotates every sublattice by `angles` about the origin.
pub fn rotate_spatial(points: &PointSet, angles: &EulerAngles) -> PointSet {
    let rot = angles.matrix();
    points.map_points(|p| apply(&rot, p))
}

/// Rotates `points` about `center`. Planar sets turn by the z angle only.
///
/// Returns a new set; the input is left untouched.
pub fn rotate(points: &PointSet, angles: &EulerAngles, center: RotationCenter) -> PointSet {
    if angles.is_identity() {
        return points.clone();
    }

    let pivot = match center {
        RotationCenter::Origin => [0.0; 3],
        RotationCenter::Centroid => points.centroid(),
    };

    let shifted = shift(points, [-pivot[0], -pivot[1], -pivot[2]]);
    let rotated = match points.dimension {
        Dimension::Two => rotate_planar(&shifted, angles.z),
        Dimension::Three => rotate_spatial(&shifted, angles),
    };
    shift(&rotated, pivot)
}

fn apply(rot: &Rotation3<f64>, p: Point3) -> Point3 {
    let r = rot * NaPoint3::new(p[0], p[1], p[2]);
    [r.x, r.y, r.z]
}

fn shift(points: &PointSet, offset: Point3) -> PointSet {
    points.map_points(|p| [p[0] + offset[0], p[1] + offset[1], p[2] + offset[2]])
}
