//! Input events delivered to an editor session.

use panelcut_settings::ModeKind;
use serde::{Deserialize, Serialize};

/// Editor keyboard commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorKey {
    /// Confirm an anchor or perform the cut (F)
    Apply,
    /// Unfreeze the grid box and cancel an anchor (R)
    Clear,
    /// Remove the selected panel in Select mode (Delete)
    Delete,
    Undo,
    Redo,
}

impl EditorKey {
    /// Maps a DOM-style key code such as `"KeyF"`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyF" => Some(Self::Apply),
            "KeyR" => Some(Self::Clear),
            "Delete" => Some(Self::Delete),
            "KeyZ" => Some(Self::Undo),
            "KeyY" => Some(Self::Redo),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Apply => "KeyF",
            Self::Clear => "KeyR",
            Self::Delete => "Delete",
            Self::Undo => "KeyZ",
            Self::Redo => "KeyY",
        }
    }
}

/// A single input to the editor.
///
/// Serialized with an internal `type` tag so recorded sessions read as
/// `{"type": "pointer_move", "x": 10.0, "y": 20.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerMove { x: f64, y: f64 },
    /// Pointer left the drawing surface.
    PointerLeave,
    PointerDown,
    Wheel { delta_y: f64 },
    Key { key: EditorKey },
    SetMode { mode: ModeKind },
    SetAngle { degrees: f64 },
    SetGridDivisions { divisions: u32 },
    SetSnapToPoints { enabled: bool },
    Reset,
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutOutcome {
    /// The selected panel was replaced by two pieces.
    Applied,
    /// The guide lines do not cross the panel exactly twice each.
    NotCuttable,
    /// A cut was requested with no panel selected.
    NoSelection,
    /// The cut would leave a piece without area.
    Degenerate,
    /// The anchor start point was fixed.
    AnchorConfirmed,
    /// The event changed editor state without cutting.
    Handled,
    /// The event has no effect in the current state.
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        for key in [
            EditorKey::Apply,
            EditorKey::Clear,
            EditorKey::Delete,
            EditorKey::Undo,
            EditorKey::Redo,
        ] {
            assert_eq!(EditorKey::from_code(key.code()), Some(key));
        }
        assert_eq!(EditorKey::from_code("KeyQ"), None);
    }

    #[test]
    fn test_event_json_shape() {
        let event: InputEvent =
            serde_json::from_str(r#"{"type": "pointer_move", "x": 10.0, "y": 20.5}"#).unwrap();
        assert_eq!(event, InputEvent::PointerMove { x: 10.0, y: 20.5 });

        let event: InputEvent =
            serde_json::from_str(r#"{"type": "set_mode", "mode": "grid_snapper"}"#).unwrap();
        assert_eq!(event, InputEvent::SetMode { mode: ModeKind::GridSnapper });

        let json = serde_json::to_string(&InputEvent::Key { key: EditorKey::Apply }).unwrap();
        assert_eq!(json, r#"{"type":"key","key":"apply"}"#);
    }
}
