//! PNG rendering of the page using tiny-skia.
//!
//! Draws the panels the way the editor shows them: dark outlines on a light
//! background, plus an optional editing overlay (selected panel, knife
//! guides, helper lines and the frozen grid box).

use anyhow::{anyhow, Context, Result};
use panelcut_core::{Aabb, Point, Polygon};
use std::path::Path;
use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::session::{EditorSession, Preview};

fn clear_color() -> Color {
    Color::from_rgba8(238, 238, 238, 255)
}
fn panel_color() -> Color {
    Color::from_rgba8(34, 34, 34, 255)
}
fn selected_color() -> Color {
    Color::from_rgba8(125, 177, 255, 255)
}
fn knife_color() -> Color {
    Color::from_rgba8(255, 197, 82, 255)
}
fn line_color() -> Color {
    Color::from_rgba8(0, 255, 255, 255)
}
fn aabb_color() -> Color {
    Color::from_rgba8(255, 0, 255, 255)
}

struct Painter {
    pixmap: Pixmap,
    stroke: Stroke,
}

impl Painter {
    fn new(width: f64, height: f64, line_width: f64) -> Result<Self> {
        let (w, h) = (width.round() as u32, height.round() as u32);
        let mut pixmap =
            Pixmap::new(w, h).ok_or_else(|| anyhow!("Invalid image size {}x{}", w, h))?;
        pixmap.fill(clear_color());
        let stroke = Stroke {
            width: line_width.max(1.0) as f32,
            ..Stroke::default()
        };
        Ok(Self { pixmap, stroke })
    }

    fn stroke_points(&mut self, points: &[Point], close: bool, color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for p in rest {
            pb.line_to(p.x as f32, p.y as f32);
        }
        if close {
            pb.close();
        }
        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            paint.set_color(color);
            paint.anti_alias = true;
            self.pixmap
                .stroke_path(&path, &paint, &self.stroke, Transform::identity(), None);
        }
    }

    fn polygon(&mut self, polygon: &Polygon, color: Color) {
        self.stroke_points(polygon.points(), true, color);
    }

    fn segment(&mut self, (a, b): (Point, Point), color: Color) {
        self.stroke_points(&[a, b], false, color);
    }

    fn aabb(&mut self, aabb: &Aabb, color: Color) {
        let rect = Polygon::from_aabb(aabb.min, aabb.max);
        self.polygon(&rect, color);
    }

    fn overlay(&mut self, session: &EditorSession, preview: &Preview) {
        if let Some(selected) = session.selected_polygon() {
            self.polygon(selected, selected_color());
        }
        if let Some(line) = preview.anchor_line {
            self.segment(line, line_color());
        }
        if let Some(line) = preview.snap_line {
            self.segment(line, line_color());
        }
        if let Some(guides) = preview.guides {
            for guide in guides {
                self.segment(guide, knife_color());
            }
        }
        if let Some(aabb) = &preview.frozen_aabb {
            self.aabb(aabb, aabb_color());
        }
    }
}

/// Renders bare panel outlines, as used for the printable template.
pub fn render_panels<'a>(
    panels: impl IntoIterator<Item = &'a Polygon>,
    width: f64,
    height: f64,
    line_width: f64,
) -> Result<Pixmap> {
    let mut painter = Painter::new(width, height, line_width)?;
    for polygon in panels {
        painter.polygon(polygon, panel_color());
    }
    Ok(painter.pixmap)
}

/// Renders the session's page, optionally with the editing overlay.
pub fn render_session(session: &EditorSession, with_overlay: bool) -> Result<Pixmap> {
    let layout = session.config().layout();
    let mut painter = Painter::new(layout.width_px, layout.height_px, layout.line_width_px)?;
    for polygon in session.panels() {
        painter.polygon(polygon, panel_color());
    }
    if with_overlay {
        painter.overlay(session, &session.preview());
    }
    Ok(painter.pixmap)
}

pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>> {
    pixmap.encode_png().context("Failed to encode PNG")
}

pub fn save_png(pixmap: &Pixmap, path: impl AsRef<Path>) -> Result<()> {
    let bytes = encode_png(pixmap)?;
    std::fs::write(path.as_ref(), bytes).context("Failed to write PNG file")?;
    Ok(())
}
