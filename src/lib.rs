//! # Panelcut
//!
//! An editor for cutting a page into polygonal panels, e.g. for comic page
//! templates. Each cut runs two parallel guide lines through a panel and
//! replaces it by the two pieces outside the margin strip between them.
//!
//! ## Architecture
//!
//! Panelcut is organized as a workspace with multiple crates:
//!
//! 1. **panelcut-core** - Points, lines, polygons, intersections and cuts
//! 2. **panelcut-settings** - Page and tool configuration, persistence
//! 3. **panelcut-designer** - Editor session, cut modes, undo/redo, export
//! 4. **panelcut** - This crate: logging setup, event script replay and the CLI
//!
//! ## Features
//!
//! - **Cut Modes**: Knife, Anchor, Half Splitter and Grid Snapper
//! - **Page Setup**: Sizes and margins in millimetres at any resolution
//! - **Export**: SVG and PNG templates, coordinate lists, design files

pub mod script;

pub use panelcut_core::{Aabb, GeometryError, Point, Polygon};
pub use panelcut_designer as designer;
pub use panelcut_designer::{
    CutOutcome, DesignFile, EditorKey, EditorSession, InputEvent, Mode, Preview,
};
pub use panelcut_settings as settings;
pub use panelcut_settings::{ConfigError, EditorConfig, ModeKind, SettingsError};
pub use script::{load_script, replay, ReplaySummary, ScriptStep};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Version string printed by `panelcut --version`
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, keeping stdout for command results
/// - RUST_LOG environment variable support
/// - INFO level unless overridden
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
