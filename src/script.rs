//! Replaying recorded input events against an editor session.
//!
//! A script is a JSON array. Each entry is either an [`InputEvent`] with a
//! `type` tag or a raw key code:
//!
//! ```json
//! [
//!   {"type": "set_mode", "mode": "knife"},
//!   {"type": "pointer_move", "x": 1240.0, "y": 1754.0},
//!   {"code": "KeyF"}
//! ]
//! ```

use anyhow::{Context, Result};
use panelcut_designer::{CutOutcome, EditorKey, EditorSession, InputEvent};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// One entry of an event script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Event(InputEvent),
    KeyCode { code: String },
}

/// Counts gathered while replaying a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Steps read from the script.
    pub steps: usize,
    /// Cuts that replaced a panel.
    pub cuts: usize,
    /// Cut requests that did not change anything.
    pub refused: usize,
    /// Steps skipped because of invalid values or unknown key codes.
    pub skipped: usize,
}

pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<ScriptStep>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event script {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse event script {}", path.display()))
}

/// Feeds every step to the session in order.
///
/// Invalid settings and unknown key codes are logged and skipped; the rest of
/// the script still runs.
pub fn replay(
    session: &mut EditorSession,
    steps: impl IntoIterator<Item = ScriptStep>,
) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for step in steps {
        summary.steps += 1;
        let event = match step {
            ScriptStep::Event(event) => event,
            ScriptStep::KeyCode { code } => match EditorKey::from_code(&code) {
                Some(key) => InputEvent::Key { key },
                None => {
                    warn!("Ignoring unknown key code {:?}", code);
                    summary.skipped += 1;
                    continue;
                }
            },
        };

        match session.handle_event(event.clone()) {
            Ok(CutOutcome::Applied) => summary.cuts += 1,
            Ok(outcome @ (CutOutcome::NotCuttable
            | CutOutcome::NoSelection
            | CutOutcome::Degenerate)) => {
                debug!("{:?} refused: {:?}", event, outcome);
                summary.refused += 1;
            }
            Ok(_) => {}
            Err(err) => {
                warn!("Skipping {:?}: {}", event, err);
                summary.skipped += 1;
            }
        }
    }

    summary
}
