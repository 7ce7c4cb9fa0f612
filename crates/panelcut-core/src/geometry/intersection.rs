//! Crossings between an offset cutting line and a polygon boundary.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::line::{side_of_line, Line};
use super::{Point, Polygon};

/// A boundary crossing: `point` lies on edge `index -> index + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    pub point: Point,
    pub index: usize,
}

/// Crossings of one line; a clean cut has exactly two.
pub type Intersections = SmallVec<[Intersection; 2]>;

/// The cutting line through `origin` along `angle` (radians), shifted by
/// `perpendicular_offset` along the counter-clockwise normal of the angle.
pub fn offset_line(origin: Point, angle: f64, perpendicular_offset: f64) -> Line {
    let normal = Point::from_angle(angle).perp();
    Line::from_angle(origin + normal * perpendicular_offset, angle)
}

/// Finds where the offset cutting line crosses the polygon's edges.
///
/// An edge counts as crossed when its endpoints lie strictly on opposite
/// sides of the line, or when its start vertex lies exactly on the line. A
/// vertex on the line is therefore reported once, by the edge it starts.
/// Results come in increasing edge order and are not deduplicated; any count
/// other than two means no clean cut is available.
pub fn find_offset_intersections(
    polygon: &Polygon,
    origin: Point,
    angle: f64,
    perpendicular_offset: f64,
) -> Intersections {
    let line = offset_line(origin, angle, perpendicular_offset);
    let mut found = Intersections::new();

    for (index, a, b) in polygon.edges() {
        let sa = side_of_line(&line, a);
        let sb = side_of_line(&line, b);

        if sa == 0.0 {
            found.push(Intersection { point: a, index });
        } else if sa * sb < 0.0 {
            // Weighted form of a + (b - a) * sa / (sa - sb)
            found.push(Intersection {
                point: (a * sb - b * sa) / (sb - sa),
                index,
            });
        }
    }

    found
}

/// The pair of guide lines bounding the margin strip of a prospective cut.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffsetGuides {
    /// Crossings of the line offset by `-margin / 2`.
    pub left: Intersections,
    /// Crossings of the line offset by `+margin / 2`.
    pub right: Intersections,
}

impl OffsetGuides {
    pub fn compute(polygon: &Polygon, origin: Point, angle: f64, margin: f64) -> Self {
        let half = margin / 2.0;
        Self {
            left: find_offset_intersections(polygon, origin, angle, -half),
            right: find_offset_intersections(polygon, origin, angle, half),
        }
    }

    /// Both guide lines cross the polygon exactly twice.
    pub fn is_cuttable(&self) -> bool {
        self.left.len() == 2 && self.right.len() == 2
    }

    /// Segment endpoints of both guides, for preview rendering.
    pub fn segments(&self) -> Option<[(Point, Point); 2]> {
        if !self.is_cuttable() {
            return None;
        }
        Some([
            (self.left[0].point, self.left[1].point),
            (self.right[0].point, self.right[1].point),
        ])
    }

    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Polygon {
        Polygon::from_aabb(Point::new(0.0, 0.0), Point::new(100.0, 200.0))
    }

    #[test]
    fn test_horizontal_line_crosses_vertical_edges() {
        let hits = find_offset_intersections(&rect(), Point::new(30.0, 100.0), 0.0, 0.0);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0], Intersection { point: Point::new(100.0, 100.0), index: 1 });
        assert_eq!(hits[1], Intersection { point: Point::new(0.0, 100.0), index: 3 });
    }

    #[test]
    fn test_offset_moves_along_normal() {
        // Normal of angle 0 is +y
        let hits = find_offset_intersections(&rect(), Point::new(30.0, 100.0), 0.0, 10.0);
        assert_eq!(hits[0].point, Point::new(100.0, 110.0));
        assert_eq!(hits[1].point, Point::new(0.0, 110.0));
    }

    #[test]
    fn test_line_missing_polygon_is_empty() {
        let hits = find_offset_intersections(&rect(), Point::new(30.0, 500.0), 0.0, 0.0);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_line_touching_vertex_reported_once() {
        let tri = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 10.0),
        ])
        .unwrap();
        let hits = find_offset_intersections(&tri, Point::new(-3.0, 10.0), 0.0, 0.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0], Intersection { point: Point::new(5.0, 10.0), index: 2 });
    }

    #[test]
    fn test_line_through_opposite_vertices() {
        let diamond = Polygon::new(vec![
            Point::new(5.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(5.0, 10.0),
            Point::new(0.0, 5.0),
        ])
        .unwrap();
        let hits = find_offset_intersections(&diamond, Point::new(5.0, 5.0), 0.0, 0.0);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0], Intersection { point: Point::new(10.0, 5.0), index: 1 });
        assert_eq!(hits[1], Intersection { point: Point::new(0.0, 5.0), index: 3 });
    }

    #[test]
    fn test_guides_cuttable() {
        let guides = OffsetGuides::compute(&rect(), Point::new(50.0, 100.0), 0.0, 20.0);
        assert!(guides.is_cuttable());
        let [left, right] = guides.segments().unwrap();
        assert_eq!(left.0.y, 90.0);
        assert_eq!(right.0.y, 110.0);

        let miss = OffsetGuides::compute(&rect(), Point::new(50.0, 195.0), 0.0, 20.0);
        assert!(!miss.is_cuttable());
        assert!(miss.segments().is_none());
    }
}
