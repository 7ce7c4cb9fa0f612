//! Closed polygons made of straight edges.

use serde::{Deserialize, Serialize};

use super::line::{point_on_line, Line};
use super::Point;
use crate::error::GeometryError;

/// Distance under which a point counts as lying on an edge.
pub const EDGE_TOLERANCE: f64 = 1e-9;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Point,
    pub max: Point,
}

impl Aabb {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> Point {
        self.max - self.min
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Nearest corner of a `divisions` x `divisions` grid laid over the box.
    pub fn snap_to_grid(&self, point: Point, divisions: u32) -> Point {
        let step = self.size() / divisions.max(1) as f64;
        (point - self.min).snap(step) + self.min
    }
}

/// A simple closed polygon: vertex `i` connects to vertex `(i + 1) % n`.
///
/// Vertex order is significant. The cut executor walks it to assign vertices
/// to either side of a cut, and intersection indices refer to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Builds a polygon, rejecting fewer than three or non-finite points.
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints {
                count: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(GeometryError::NonFinite { index });
        }
        Ok(Self { points })
    }

    /// Rectangle spanning `min`..`max`, listed `min, (max.x, min.y), max, (min.x, max.y)`.
    pub fn from_aabb(min: Point, max: Point) -> Self {
        Self {
            points: vec![
                min,
                Point::new(max.x, min.y),
                max,
                Point::new(min.x, max.y),
            ],
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Iterates edges as `(index, start, end)`; the last edge closes the loop.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (i, self.points[i], self.points[(i + 1) % n]))
    }

    pub fn bounding_box(&self) -> Aabb {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &self.points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Aabb::new(min, max)
    }

    /// Arithmetic mean of the vertices (not the area centroid).
    pub fn centroid(&self) -> Point {
        let sum = self.points.iter().fold(Point::ZERO, |acc, p| acc + *p);
        sum / self.points.len() as f64
    }

    /// Shoelace area; positive for counter-clockwise order in a y-up frame.
    pub fn signed_area(&self) -> f64 {
        self.edges().map(|(_, a, b)| a.cross(b)).sum::<f64>() / 2.0
    }

    /// Even-odd point-in-polygon test. Points on an edge count as inside.
    pub fn contains_point(&self, point: Point) -> bool {
        if self
            .edges()
            .any(|(_, a, b)| distance_to_segment(point, a, b) <= EDGE_TOLERANCE)
        {
            return true;
        }

        let mut inside = false;
        let n = self.points.len();
        let mut j = n - 1;
        for i in 0..n {
            let pi = self.points[i];
            let pj = self.points[j];
            if ((pi.y > point.y) != (pj.y > point.y))
                && (point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x)
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Boundary location closest to `query` together with its distance.
    ///
    /// Each edge contributes one candidate: its start vertex when
    /// `vertices_only`, otherwise the projection of `query` onto the edge's
    /// infinite line. The first minimum wins on ties.
    pub fn nearest_boundary_point(&self, query: Point, vertices_only: bool) -> (Point, f64) {
        let mut best = (self.points[0], f64::INFINITY);
        for (_, a, b) in self.edges() {
            let candidate = if vertices_only {
                a
            } else {
                point_on_line(&Line::from_points(a, b), query)
            };
            let distance = candidate.distance_to(&query);
            if distance < best.1 {
                best = (candidate, distance);
            }
        }
        best
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = GeometryError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Polygon::new(points)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}

/// Distance from `p` to the closed segment `a`..`b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.dot(ab);
    if len_sq <= f64::EPSILON {
        return p.distance_to(&a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&(a + ab * t))
}
