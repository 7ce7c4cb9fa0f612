//! 2D point / vector type used throughout the engine.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A location in device pixel space. Also used as a free 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle` (radians).
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(&self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (*self - *other).length()
    }

    /// Returns the unit vector in the same direction, or `None` for a zero vector.
    pub fn normalized(&self) -> Option<Point> {
        let len = self.length();
        if len > f64::EPSILON {
            Some(*self / len)
        } else {
            None
        }
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    pub fn perp(&self) -> Point {
        Point::new(-self.y, self.x)
    }

    /// Angle of this vector in radians, via `atan2`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Rounds each component to the nearest multiple of `step`.
    /// A zero step component leaves that axis untouched.
    pub fn snap(&self, step: Point) -> Point {
        let snap_axis = |v: f64, s: f64| {
            if s.abs() > f64::EPSILON {
                (v / s).round() * s
            } else {
                v
            }
        };
        Point::new(snap_axis(self.x, step.x), snap_axis(self.y, step.y))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Point::new(p[0], p[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);
        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(a - b, Point::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert_eq!(a.dot(b), 1.0);
        assert_eq!(a.cross(b), -7.0);
    }

    #[test]
    fn test_normalized_zero_vector() {
        assert!(Point::ZERO.normalized().is_none());
        let n = Point::new(3.0, 4.0).normalized().unwrap();
        assert!((n.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_snap_rounds_to_nearest_step() {
        let p = Point::new(26.0, 149.0);
        assert_eq!(p.snap(Point::new(50.0, 100.0)), Point::new(50.0, 100.0));
        assert_eq!(p.snap(Point::new(0.0, 100.0)), Point::new(26.0, 100.0));
    }
}
