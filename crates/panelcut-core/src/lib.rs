//! # Panelcut Core
//!
//! Geometry engine for the panel cutting editor. A page is represented as a
//! set of polygons ("panels"); a cut runs two parallel guide lines through a
//! panel and replaces it with the two pieces outside the margin strip.
//!
//! ## Layers
//!
//! ```text
//! geometry::point / geometry::line   (vector math, projection, side test)
//!   └── geometry::polygon            (containment, bbox, centroid)
//!         └── geometry::intersection (offset-line crossings)
//!               └── geometry::cut    (margin-strip split)
//! ```
//!
//! Nothing in this crate performs I/O or keeps state between calls.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{Error, GeometryError, Result};
pub use geometry::{
    cut, find_offset_intersections, point_on_line, side_of_line, Aabb, Intersection,
    Intersections, Line, OffsetGuides, Point, Polygon,
};
pub use units::{mm_to_px, px_to_mm, INCH_MM};
