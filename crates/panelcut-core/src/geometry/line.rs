//! Infinite 2D lines and the two primitive queries the engine is built on.

use super::Point;

/// An infinite line through `a` and `b`.
///
/// The direction `b - a` matters for [`side_of_line`]: it fixes which
/// half-plane is positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    pub fn from_points(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Line through `origin` pointing along `angle` (radians).
    pub fn from_angle(origin: Point, angle: f64) -> Self {
        Self {
            a: origin,
            b: origin + Point::from_angle(angle),
        }
    }

    pub fn origin(&self) -> Point {
        self.a
    }

    pub fn direction(&self) -> Point {
        self.b - self.a
    }

    /// Direction angle in radians.
    pub fn angle(&self) -> f64 {
        self.direction().angle()
    }

    /// Same line, opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

/// Orthogonal projection of `query` onto the infinite line.
///
/// A degenerate line (coincident points) projects everything onto its origin.
pub fn point_on_line(line: &Line, query: Point) -> Point {
    let d = line.direction();
    let len_sq = d.dot(d);
    if len_sq <= f64::EPSILON {
        return line.a;
    }
    let t = (query - line.a).dot(d) / len_sq;
    line.a + d * t
}

/// Signed perpendicular distance from `line` to `point`.
///
/// Positive to the left of the line direction (counter-clockwise normal),
/// negative to the right, zero on the line. Returns 0 for a degenerate line.
pub fn side_of_line(line: &Line, point: Point) -> f64 {
    match line.direction().normalized() {
        Some(d) => d.cross(point - line.a),
        None => 0.0,
    }
}
