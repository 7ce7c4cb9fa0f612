//! Editor configuration for Panelcut
//!
//! Holds the page setup (in millimetres), the knife settings and the active
//! mode. Supports JSON and TOML files; the default location is
//! `<config dir>/panelcut/config.toml`.

use panelcut_core::units::mm_to_px;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Lowest and highest knife angle in degrees.
pub const ANGLE_LIMIT_DEG: f64 = 180.0;

/// Allowed grid divider range for the grid snapper.
pub const MIN_GRID_DIVISIONS: u32 = 2;
pub const MAX_GRID_DIVISIONS: u32 = 9;

/// Upper bound for page sizes, margins, line width (mm) and resolution (dpi).
pub const MAX_INPUT_VALUE: f64 = 1000.0;

/// Degrees the knife turns per wheel notch.
pub const WHEEL_ANGLE_STEP_DEG: f64 = 5.0;

/// How the cut origin and angle are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    /// Hover selection only, no cutting
    #[default]
    Select,
    /// Cut through the cursor at the configured angle
    Knife,
    /// Cut from a boundary anchor towards the cursor
    Anchor,
    /// Cut through the panel centroid at the configured angle
    HalfSplitter,
    /// Cut through the nearest grid corner at the configured angle
    GridSnapper,
}

impl ModeKind {
    pub const ALL: [ModeKind; 5] = [
        ModeKind::Select,
        ModeKind::Knife,
        ModeKind::Anchor,
        ModeKind::HalfSplitter,
        ModeKind::GridSnapper,
    ];

    /// Mode by its position in the mode selector.
    pub fn from_index(index: usize) -> ConfigResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| ConfigError::UnknownMode(index.to_string()))
    }
}

impl std::fmt::Display for ModeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Select => write!(f, "Select"),
            Self::Knife => write!(f, "Knife"),
            Self::Anchor => write!(f, "Anchor"),
            Self::HalfSplitter => write!(f, "Half Splitter"),
            Self::GridSnapper => write!(f, "Grid Snapper"),
        }
    }
}

impl FromStr for ModeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "select" => Ok(Self::Select),
            "knife" => Ok(Self::Knife),
            "anchor" => Ok(Self::Anchor),
            "half_splitter" => Ok(Self::HalfSplitter),
            "grid_snapper" => Ok(Self::GridSnapper),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Page width in mm
    pub width_mm: f64,
    /// Page height in mm
    pub height_mm: f64,
    /// Output resolution in dots per inch
    pub res_dpi: f64,
    /// Blank border around the page in mm
    pub page_margin_mm: f64,
    /// Width of the strip removed by each cut in mm
    pub panel_margin_mm: f64,
    /// Stroke width of exported outlines in mm
    pub line_width_mm: f64,
    /// Knife angle in degrees
    pub angle: f64,
    /// Active mode
    pub mode: ModeKind,
    /// Grid divider for the grid snapper
    pub grid_div: u32,
    /// Anchor snaps to vertices instead of the nearest edge point
    pub snap_to_points: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            res_dpi: 300.0,
            page_margin_mm: 4.0,
            panel_margin_mm: 2.0,
            line_width_mm: 0.5,
            angle: 45.0,
            mode: ModeKind::Select,
            grid_div: 3,
            snap_to_points: false,
        }
    }
}

/// Page setup converted to device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width_px: f64,
    pub height_px: f64,
    pub page_margin_px: f64,
    pub panel_margin_px: f64,
    pub line_width_px: f64,
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Pixel dimensions at the configured resolution.
    pub fn layout(&self) -> PageLayout {
        PageLayout {
            width_px: mm_to_px(self.width_mm, self.res_dpi),
            height_px: mm_to_px(self.height_mm, self.res_dpi),
            page_margin_px: mm_to_px(self.page_margin_mm, self.res_dpi),
            panel_margin_px: mm_to_px(self.panel_margin_mm, self.res_dpi),
            line_width_px: mm_to_px(self.line_width_mm, self.res_dpi),
        }
    }

    /// Knife angle in radians.
    pub fn angle_radians(&self) -> f64 {
        self.angle.to_radians()
    }

    /// Sets the knife angle, clamped to [-180, 180] degrees.
    pub fn set_angle(&mut self, degrees: f64) -> ConfigResult<()> {
        if !degrees.is_finite() {
            return Err(ConfigError::out_of_range("angle", degrees));
        }
        self.angle = degrees.clamp(-ANGLE_LIMIT_DEG, ANGLE_LIMIT_DEG);
        Ok(())
    }

    /// Turns the knife by `notches` wheel steps.
    pub fn rotate_by_wheel(&mut self, notches: f64) -> ConfigResult<()> {
        self.set_angle(self.angle + notches * WHEEL_ANGLE_STEP_DEG)
    }

    pub fn set_grid_divisions(&mut self, divisions: u32) -> ConfigResult<()> {
        validate_grid_divisions(divisions)?;
        self.grid_div = divisions;
        Ok(())
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        positive("width_mm", self.width_mm)?;
        positive("height_mm", self.height_mm)?;
        positive("res_dpi", self.res_dpi)?;
        non_negative("page_margin_mm", self.page_margin_mm)?;
        non_negative("line_width_mm", self.line_width_mm)?;

        let layout = self.layout();
        if 2.0 * layout.page_margin_px >= layout.width_px.min(layout.height_px) {
            return Err(ConfigError::out_of_range("page_margin_mm", self.page_margin_mm));
        }

        // A zero-pixel margin would make both guide lines coincide
        positive("panel_margin_mm", self.panel_margin_mm)?;
        if layout.panel_margin_px <= 0.0 {
            return Err(ConfigError::out_of_range("panel_margin_mm", self.panel_margin_mm));
        }

        if !self.angle.is_finite() || self.angle.abs() > ANGLE_LIMIT_DEG {
            return Err(ConfigError::out_of_range("angle", self.angle));
        }

        validate_grid_divisions(self.grid_div)
    }
}

/// Grid divider must stay within 2..=9.
pub fn validate_grid_divisions(divisions: u32) -> ConfigResult<()> {
    if (MIN_GRID_DIVISIONS..=MAX_GRID_DIVISIONS).contains(&divisions) {
        Ok(())
    } else {
        Err(ConfigError::out_of_range("grid_div", divisions))
    }
}

fn positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 && value <= MAX_INPUT_VALUE {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

fn non_negative(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && (0.0..=MAX_INPUT_VALUE).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Platform config directory for Panelcut.
pub fn config_dir() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("panelcut"))
        .ok_or_else(|| SettingsError::ConfigDirectory("no config directory on this platform".into()))
}

/// `<config dir>/panelcut/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
