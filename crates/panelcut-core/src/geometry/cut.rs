//! Splitting a polygon along the margin strip between two guide lines.

use tracing::debug;

use super::intersection::Intersection;
use super::line::{side_of_line, Line};
use super::{Point, Polygon};

/// Slack when deciding whether a vertex lies strictly outside the strip.
pub const STRIP_TOLERANCE: f64 = 1e-6;

/// Minimum absolute area for a cut result to be kept.
pub const MIN_PIECE_AREA: f64 = 1e-6;

/// Splits `polygon` into a left and a right piece, discarding the strip
/// between the left guide line (through `left`) and the right guide line
/// (through `right`).
///
/// Returns `None` unless both guides have exactly two crossings, and also
/// when either piece would be degenerate (fewer than three points or no
/// area). Nothing is mutated in either case.
///
/// Sign convention: both guides are measured along the same direction and
/// the side values are flipped as needed so the right guide lies on the
/// positive side of the left guide. With `l1`, `l2` the signed distances of
/// a vertex to the left and right guide, the vertex is outside the strip when
/// `|l1| + |l2|` exceeds the strip width, and belongs to the left piece when
/// `l1 + l2 < 0`.
pub fn cut(
    polygon: &Polygon,
    left: &[Intersection],
    right: &[Intersection],
) -> Option<(Polygon, Polygon)> {
    if left.len() != 2 || right.len() != 2 {
        return None;
    }

    let left_line = Line::from_points(left[0].point, left[1].point);
    let mut right_line = Line::from_points(right[0].point, right[1].point);
    if left_line.direction().dot(right_line.direction()) < 0.0 {
        right_line = right_line.reversed();
    }

    let offset = side_of_line(&left_line, right_line.origin());
    let sign = if offset < 0.0 { -1.0 } else { 1.0 };
    let strip_width = offset.abs();

    let mut left_points = Vec::with_capacity(polygon.len() + 2);
    let mut right_points = Vec::with_capacity(polygon.len() + 2);

    for (index, &point) in polygon.points().iter().enumerate() {
        let l1 = sign * side_of_line(&left_line, point);
        let l2 = sign * side_of_line(&right_line, point);

        if l1.abs() + l2.abs() > strip_width + STRIP_TOLERANCE {
            if l1 + l2 < 0.0 {
                left_points.push(point);
            } else {
                right_points.push(point);
            }
        }

        // Edge `index` starts at this vertex, so its crossings follow it
        left_points.extend(crossings_on_edge(left, index));
        right_points.extend(crossings_on_edge(right, index));
    }

    let (Some(left_piece), Some(right_piece)) = (piece(left_points), piece(right_points)) else {
        debug!("Cut rejected: degenerate piece");
        return None;
    };

    Some((left_piece, right_piece))
}

fn crossings_on_edge(hits: &[Intersection], index: usize) -> impl Iterator<Item = Point> + '_ {
    hits.iter()
        .filter(move |hit| hit.index == index)
        .map(|hit| hit.point)
}

fn piece(points: Vec<Point>) -> Option<Polygon> {
    let polygon = Polygon::new(points).ok()?;
    (polygon.signed_area().abs() > MIN_PIECE_AREA).then_some(polygon)
}

#[cfg(test)]
mod tests {
    use super::super::intersection::OffsetGuides;
    use super::*;

    fn rect() -> Polygon {
        Polygon::from_aabb(Point::new(0.0, 0.0), Point::new(100.0, 200.0))
    }

    fn cut_with(
        polygon: &Polygon,
        origin: Point,
        angle: f64,
        margin: f64,
    ) -> Option<(Polygon, Polygon)> {
        let guides = OffsetGuides::compute(polygon, origin, angle, margin);
        cut(polygon, &guides.left, &guides.right)
    }

    #[test]
    fn test_cut_zero_margin_splits_in_half() {
        let (left, right) = cut_with(&rect(), Point::new(30.0, 100.0), 0.0, 0.0).unwrap();

        let mut halves = [left, right];
        halves.sort_by(|a, b| a.bounding_box().min.y.total_cmp(&b.bounding_box().min.y));
        let [top, bottom] = halves;

        assert_eq!(top.bounding_box().min, Point::new(0.0, 0.0));
        assert_eq!(top.bounding_box().max, Point::new(100.0, 100.0));
        assert_eq!(bottom.bounding_box().min, Point::new(0.0, 100.0));
        assert_eq!(bottom.bounding_box().max, Point::new(100.0, 200.0));
        assert_eq!(top.signed_area().abs(), 10000.0);
        assert_eq!(bottom.signed_area().abs(), 10000.0);
    }

    #[test]
    fn test_cut_with_margin_discards_strip() {
        let (left, right) = cut_with(&rect(), Point::new(50.0, 100.0), 0.0, 10.0).unwrap();

        // Left guide sits at y = 95 (offset -5 along +y normal)
        assert_eq!(
            left.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 95.0),
                Point::new(0.0, 95.0),
            ]
        );
        assert_eq!(
            right.points(),
            &[
                Point::new(100.0, 105.0),
                Point::new(100.0, 200.0),
                Point::new(0.0, 200.0),
                Point::new(0.0, 105.0),
            ]
        );
    }

    #[test]
    fn test_cut_diagonal_through_vertices() {
        let square = Polygon::from_aabb(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let (left, right) = cut_with(
            &square,
            Point::new(0.0, 0.0),
            std::f64::consts::FRAC_PI_4,
            0.0,
        )
        .unwrap();
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 3);
        let total = left.signed_area().abs() + right.signed_area().abs();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_cut_requires_two_crossings_each() {
        let polygon = rect();
        let guides = OffsetGuides::compute(&polygon, Point::new(50.0, 100.0), 0.0, 10.0);
        assert!(cut(&polygon, &guides.left[..1], &guides.right).is_none());
        assert!(cut(&polygon, &[], &[]).is_none());
    }

    #[test]
    fn test_cut_along_edge_is_degenerate() {
        let square = Polygon::from_aabb(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(cut_with(&square, Point::new(3.0, 0.0), 0.0, 0.0).is_none());
    }
}
