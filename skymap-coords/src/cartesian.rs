//! Plane Cartesian coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A point of the projection plane.
///
/// Unvalidated: any finite pair is meaningful. Like the spherical types, no
/// equality or hashing — distances are compared, not points.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CartesianCoordinates {
    x: f64,
    y: f64,
}

impl CartesianCoordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Kept squared on purpose: the only consumer compares distances against
    /// each other and against a squared threshold, so the square root never
    /// needs to be taken.
    pub fn distance_squared_to(&self, other: &CartesianCoordinates) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

impl fmt::Display for CartesianCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x={:.4}, y={:.4})", self.x, self.y)
    }
}
