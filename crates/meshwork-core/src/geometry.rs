//! Geometric primitives for force simulation and edge routing.
//!
//! This module provides the vector type and angle helpers used throughout
//! Meshwork to describe node positions, velocities, forces and the points
//! edges are drawn through.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate that doubles as a 2D vector
//! - [`normalize_angle`] - Wraps an angle into `[0, 2π)`
//!
//! # Coordinate System
//!
//! Meshwork uses the same coordinate system as SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Angles are measured in radians with `atan2(dy, dx)`, so with Y growing
//! downward a positive angle turns clockwise on screen.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

/// A 2D point in layout space, also used as a 2D vector.
///
/// Points use `f32` coordinates and provide the vector operations the
/// simulator and router need. Every operation is total: normalising the zero
/// vector yields the zero vector rather than `NaN`.
///
/// # Examples
///
/// ```
/// # use meshwork_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// // Vector addition
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// // Midpoint calculation
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates the point at `length` from the origin in direction `angle` (radians).
    ///
    /// # Examples
    ///
    /// ```
    /// # use meshwork_core::geometry::Point;
    /// let p = Point::from_polar(0.0, 3.0);
    /// assert_eq!(p, Point::new(3.0, 0.0));
    /// ```
    pub fn from_polar(angle: f32, length: f32) -> Self {
        Self {
            x: length * angle.cos(),
            y: length * angle.sin(),
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Checks that neither coordinate is `NaN` or infinite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Returns the point mirrored through the origin
    pub fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Squared magnitude, cheaper than [`Point::hypot`] when only comparisons are needed
    pub fn hypot_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Distance between this point and another point
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// The zero vector has no direction and normalises to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// # use meshwork_core::geometry::Point;
    /// assert_eq!(Point::new(3.0, 4.0).normalize(), Point::new(0.6, 0.8));
    /// assert_eq!(Point::ZERO.normalize(), Point::ZERO);
    /// ```
    pub fn normalize(self) -> Self {
        let length = self.hypot();
        if length == 0.0 {
            return Self::ZERO;
        }
        Self {
            x: self.x / length,
            y: self.y / length,
        }
    }

    /// Rescales the vector so its magnitude does not exceed `max_length`
    pub fn clamp_length(self, max_length: f32) -> Self {
        let length = self.hypot();
        if length > max_length {
            self.scale(max_length / length)
        } else {
            self
        }
    }

    /// Bearing of the vector from the origin, `atan2(y, x)`, in `(-π, π]`
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Bearing of `other` as seen from this point
    pub fn angle_to(self, other: Point) -> f32 {
        other.sub_point(self).angle()
    }
}

/// Wraps an angle in radians into `[0, 2π)`.
///
/// # Examples
///
/// ```
/// # use std::f32::consts::PI;
/// # use meshwork_core::geometry::normalize_angle;
/// assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-6);
/// assert_eq!(normalize_angle(0.0), 0.0);
/// ```
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert_eq!(point, Point::ZERO);
        assert!(point.is_zero());
    }

    #[test]
    fn test_point_is_zero() {
        assert!(Point::new(0.0, 0.0).is_zero());
        assert!(!Point::new(1.0, 0.0).is_zero());
        assert!(!Point::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        assert_eq!(p1.add_point(p2), Point::new(7.0, 11.0));
        assert_eq!(p1.sub_point(p2), Point::new(3.0, 5.0));
        assert_eq!(p1.neg(), Point::new(-5.0, -8.0));
    }

    #[test]
    fn test_point_midpoint() {
        let midpoint = Point::new(0.0, 0.0).midpoint(Point::new(4.0, 6.0));
        assert_eq!(midpoint, Point::new(2.0, 3.0));
    }

    #[test]
    fn test_point_hypot() {
        let point = Point::new(3.0, 4.0);
        assert_eq!(point.hypot(), 5.0);
        assert_eq!(point.hypot_squared(), 25.0);
        assert_eq!(Point::ZERO.hypot(), 0.0);
        assert_eq!(point.distance(Point::new(0.0, 8.0)), 5.0);
    }

    #[test]
    fn test_point_scale() {
        let scaled = Point::new(2.0, 3.0).scale(2.5);
        assert_eq!(scaled, Point::new(5.0, 7.5));
    }

    #[test]
    fn test_normalize_zero_vector() {
        let normalized = Point::ZERO.normalize();
        assert!(normalized.is_zero());
        assert!(normalized.is_finite());
    }

    #[test]
    fn test_normalize_unit_length() {
        let normalized = Point::new(-7.0, 24.0).normalize();
        assert_approx_eq!(f32, normalized.hypot(), 1.0, epsilon = 1e-6);
        assert_approx_eq!(f32, normalized.x(), -0.28, epsilon = 1e-6);
        assert_approx_eq!(f32, normalized.y(), 0.96, epsilon = 1e-6);
    }

    #[test]
    fn test_clamp_length() {
        let clamped = Point::new(30.0, 40.0).clamp_length(10.0);
        assert_approx_eq!(f32, clamped.hypot(), 10.0, epsilon = 1e-5);
        assert_approx_eq!(f32, clamped.x(), 6.0, epsilon = 1e-5);

        let untouched = Point::new(3.0, 4.0).clamp_length(10.0);
        assert_eq!(untouched, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_from_polar() {
        let p = Point::from_polar(FRAC_PI_2, 2.0);
        assert_approx_eq!(f32, p.x(), 0.0, epsilon = 1e-6);
        assert_approx_eq!(f32, p.y(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_angles() {
        assert_eq!(Point::new(1.0, 0.0).angle(), 0.0);
        assert_eq!(Point::new(-1.0, 0.0).angle(), PI);
        assert_approx_eq!(
            f32,
            Point::new(1.0, 1.0).angle_to(Point::new(1.0, 5.0)),
            FRAC_PI_2
        );
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_approx_eq!(f32, normalize_angle(-FRAC_PI_2), 3.0 * FRAC_PI_2, epsilon = 1e-6);
        assert_approx_eq!(f32, normalize_angle(TAU + 1.0), 1.0, epsilon = 1e-6);
        assert!(normalize_angle(-1e-9) < TAU);
    }
}
