//! Unit conversion utilities
//!
//! The page is configured in millimetres, the engine works in device pixels
//! at a given resolution (dots per inch).

/// Millimetres per inch.
pub const INCH_MM: f64 = 25.4;

/// Millimetres to whole device pixels at `dpi`.
pub fn mm_to_px(mm: f64, dpi: f64) -> f64 {
    (mm / INCH_MM * dpi).round()
}

pub fn px_to_mm(px: f64, dpi: f64) -> f64 {
    px / dpi * INCH_MM
}
