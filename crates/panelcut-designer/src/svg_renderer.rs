//! SVG export of the panel outlines.
//!
//! Produces a printable template: one unfilled black `<polygon>` per panel
//! on a canvas the size of the page.

use anyhow::{Context, Result};
use panelcut_core::Polygon;
use std::fmt::Write;
use std::path::Path;

/// Renders panels as an SVG document sized `width` x `height` pixels.
pub fn render_svg<'a>(
    panels: impl IntoIterator<Item = &'a Polygon>,
    width: f64,
    height: f64,
    line_width: f64,
) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        out,
        "<style>polygon {{ fill: none; stroke: black; stroke-width: {line_width}; }}</style>"
    );
    for polygon in panels {
        let _ = writeln!(out, r#"<polygon points="{}" />"#, points_attribute(polygon));
    }
    out.push_str("</svg>\n");
    out
}

/// `x,y` pairs separated by spaces.
fn points_attribute(polygon: &Polygon) -> String {
    polygon
        .points()
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn save_svg<'a>(
    panels: impl IntoIterator<Item = &'a Polygon>,
    width: f64,
    height: f64,
    line_width: f64,
    path: impl AsRef<Path>,
) -> Result<()> {
    let svg = render_svg(panels, width, height, line_width);
    std::fs::write(path.as_ref(), svg).context("Failed to write SVG file")?;
    Ok(())
}
