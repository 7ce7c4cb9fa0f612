//! Serialization and deserialization for design files.
//!
//! A design file is JSON holding the editor configuration and the panels of
//! a page, so a session can be picked up later or inspected by the CLI.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use panelcut_settings::EditorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::export::{from_coordinates, to_coordinates, Coordinates};
use crate::session::EditorSession;

/// Design file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete design file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    pub metadata: DesignMetadata,
    #[serde(default)]
    pub config: EditorConfig,
    pub panels: Coordinates,
}

/// Design metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

impl DesignFile {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DesignMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            config: EditorConfig::default(),
            panels: Vec::new(),
        }
    }

    /// Snapshot of a session's configuration and panels.
    pub fn from_session(name: impl Into<String>, session: &EditorSession) -> Self {
        Self {
            config: session.config().clone(),
            panels: to_coordinates(session.panels()),
            ..Self::new(name)
        }
    }

    /// Rebuilds an editor session from the stored configuration and panels.
    pub fn to_session(&self) -> Result<EditorSession> {
        let panels = from_coordinates(&self.panels).context("Invalid panel in design file")?;
        EditorSession::with_panels(self.config.clone(), panels)
            .context("Invalid configuration in design file")
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize design")?;

        std::fs::write(path.as_ref(), json).context("Failed to write design file")?;

        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read design file")?;

        let design: DesignFile =
            serde_json::from_str(&content).context("Failed to parse design file")?;

        Ok(design)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelcut_core::Point;

    #[test]
    fn test_new_design_is_empty() {
        let design = DesignFile::new("Template");
        assert_eq!(design.version, FILE_FORMAT_VERSION);
        assert_eq!(design.metadata.name, "Template");
        assert!(design.panels.is_empty());
    }

    #[test]
    fn test_session_snapshot_round_trip() {
        let session = EditorSession::new(EditorConfig::default()).unwrap();
        let design = DesignFile::from_session("Page", &session);
        assert_eq!(design.panels.len(), 1);
        assert_eq!(design.panels[0][0], [47.0, 47.0]);

        let restored = design.to_session().unwrap();
        assert_eq!(restored.store().len(), 1);
        assert_eq!(
            restored.panels().next().unwrap().points()[2],
            Point::new(2433.0, 3461.0)
        );
    }

    #[test]
    fn test_loading_keeps_timestamps() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("page.json");

        let mut design = DesignFile::new("Page");
        let stamp: DateTime<Utc> = "2024-05-01T12:00:00Z".parse().unwrap();
        design.metadata.created = stamp;
        design.metadata.modified = stamp;
        design.save_to_file(&path).unwrap();

        let loaded = DesignFile::load_from_file(&path).unwrap();
        assert_eq!(loaded.metadata.created, stamp);
        assert_eq!(loaded.metadata.modified, stamp);
    }

    #[test]
    fn test_invalid_panels_rejected() {
        let mut design = DesignFile::new("Broken");
        design.panels.push(vec![[0.0, 0.0]]);
        assert!(design.to_session().is_err());
    }
}
