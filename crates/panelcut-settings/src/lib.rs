//! Panelcut Settings Crate
//!
//! Editor configuration, validation and persistence.

pub mod config;
pub mod error;

pub use config::{
    config_dir, default_config_path, validate_grid_divisions, EditorConfig, ModeKind, PageLayout,
    ANGLE_LIMIT_DEG, MAX_GRID_DIVISIONS, MAX_INPUT_VALUE, MIN_GRID_DIVISIONS, WHEEL_ANGLE_STEP_DEG,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
