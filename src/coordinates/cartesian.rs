//! # Plane Coordinates
//!
//! The 2D Cartesian endpoint of the projection pipeline: a point on the
//! stereographic plane that a renderer consumes directly. Unlike the angular
//! coordinate types, plane points have no legal-domain restriction — any
//! finite `(x, y)` is a valid projection output.
//!
//! Interop with nalgebra vectors mirrors how the rest of the crate's linear
//! algebra is expressed, and distance queries (used by the nearest-object
//! pick in [`crate::sky`]) go through `Vector2` norms.

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A point on the projection plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianCoordinates {
    /// Abscissa (grows toward the west edge of the view)
    pub x: f64,
    /// Ordinate (grows toward the top edge of the view)
    pub y: f64,
}

impl CartesianCoordinates {
    /// Creates a plane point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin of the plane, i.e. the projection center's image.
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Converts to a nalgebra vector.
    pub fn to_vector2(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Creates a plane point from a nalgebra vector.
    pub fn from_vector2(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }

    /// Squared Euclidean distance to another plane point.
    ///
    /// Preferred for comparisons: avoids the square root.
    pub fn distance_squared_to(&self, other: &Self) -> f64 {
        (self.to_vector2() - other.to_vector2()).norm_squared()
    }

    /// Euclidean distance to another plane point.
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.to_vector2() - other.to_vector2()).norm()
    }
}

impl fmt::Display for CartesianCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a = CartesianCoordinates::new(1.0, 2.0);
        let b = CartesianCoordinates::new(4.0, 6.0);
        assert_relative_eq!(a.distance_to(&b), 5.0, epsilon = 1e-12);
        assert_relative_eq!(a.distance_squared_to(&b), 25.0, epsilon = 1e-12);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn test_vector_round_trip() {
        let p = CartesianCoordinates::new(-0.25, 0.75);
        let back = CartesianCoordinates::from_vector2(p.to_vector2());
        assert_eq!(p, back);
    }
}
