//! Planar geometry: points, lines, polygons, offset-line crossings and cuts.

pub mod cut;
pub mod intersection;
pub mod line;
pub mod point;
pub mod polygon;

pub use cut::cut;
pub use intersection::{
    find_offset_intersections, offset_line, Intersection, Intersections, OffsetGuides,
};
pub use line::{point_on_line, side_of_line, Line};
pub use point::Point;
pub use polygon::{distance_to_segment, Aabb, Polygon};
