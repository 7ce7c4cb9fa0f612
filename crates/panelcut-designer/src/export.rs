//! Plain coordinate lists for handing panels to other tools.
//!
//! Each panel becomes a list of `[x, y]` pairs, in draw order, e.g.
//! `[[[47.0, 47.0], [2433.0, 47.0], ...], ...]`.

use anyhow::{Context, Result};
use panelcut_core::{GeometryError, Polygon};
use std::path::Path;

/// Panels as nested coordinate lists.
pub type Coordinates = Vec<Vec<[f64; 2]>>;

pub fn to_coordinates<'a>(panels: impl IntoIterator<Item = &'a Polygon>) -> Coordinates {
    panels
        .into_iter()
        .map(|polygon| polygon.points().iter().map(|&p| p.into()).collect())
        .collect()
}

/// Rebuilds panels, failing on the first list that is not a valid polygon.
pub fn from_coordinates(coordinates: &[Vec<[f64; 2]>]) -> Result<Vec<Polygon>, GeometryError> {
    coordinates
        .iter()
        .map(|points| Polygon::new(points.iter().map(|&p| p.into()).collect()))
        .collect()
}

pub fn to_json<'a>(panels: impl IntoIterator<Item = &'a Polygon>) -> Result<String> {
    serde_json::to_string_pretty(&to_coordinates(panels)).context("Failed to serialize panels")
}

pub fn from_json(json: &str) -> Result<Vec<Polygon>> {
    let coordinates: Coordinates =
        serde_json::from_str(json).context("Failed to parse panel coordinates")?;
    from_coordinates(&coordinates).context("Invalid panel in coordinate list")
}

pub fn save_to_file<'a>(
    panels: impl IntoIterator<Item = &'a Polygon>,
    path: impl AsRef<Path>,
) -> Result<()> {
    let json = to_json(panels)?;
    std::fs::write(path.as_ref(), json).context("Failed to write coordinate file")?;
    Ok(())
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<Polygon>> {
    let content =
        std::fs::read_to_string(path.as_ref()).context("Failed to read coordinate file")?;
    from_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelcut_core::Point;

    #[test]
    fn test_coordinates_preserve_order() {
        let a = Polygon::from_aabb(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let b = Polygon::new(vec![
            Point::new(0.1, 0.2),
            Point::new(5.5, 1.0 / 3.0),
            Point::new(2.0, 9.75),
        ])
        .unwrap();

        let coordinates = to_coordinates([&a, &b]);
        assert_eq!(coordinates[0][1], [10.0, 0.0]);
        assert_eq!(coordinates[1][1], [5.5, 1.0 / 3.0]);

        let restored = from_json(&to_json([&a, &b]).unwrap()).unwrap();
        assert_eq!(restored, vec![a, b]);
    }

    #[test]
    fn test_from_coordinates_rejects_short_list() {
        let err = from_coordinates(&[vec![[0.0, 0.0], [1.0, 1.0]]]).unwrap_err();
        assert_eq!(err, GeometryError::TooFewPoints { count: 2 });
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(from_json("{\"panels\": 3}").is_err());
    }
}
