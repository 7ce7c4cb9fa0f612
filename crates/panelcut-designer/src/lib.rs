//! # Panelcut Designer
//!
//! Interactive editing on top of the geometry engine: a page of panels, the
//! cut modes, undo/redo and export of the finished template.
//!
//! ## Core Components
//!
//! - **Panel Store**: Owns the panels and their draw order
//! - **Selection**: Hover selection of the panel under the cursor
//! - **Tools**: Select, Knife, Anchor, Half Splitter and Grid Snapper modes
//! - **Session**: Event handling, cut preview and history
//! - **Export**: SVG, PNG, coordinate lists and design files
//!
//! ## Architecture
//!
//! ```text
//! EditorSession
//!   ├── PanelStore        (panels in draw order)
//!   ├── SelectionManager  (hovered panel)
//!   ├── Mode              (active tool and its transient state)
//!   │     └── derive_cut  (origin, angle, guide crossings)
//!   └── History           (undo/redo of cuts and deletes)
//!
//! Export (svg_renderer, raster, export, serialization)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use panelcut_designer::{CutOutcome, EditorKey, EditorSession, InputEvent};
//! use panelcut_settings::{EditorConfig, ModeKind};
//!
//! let mut session = EditorSession::new(EditorConfig::default()).unwrap();
//! session.handle_event(InputEvent::SetMode { mode: ModeKind::Knife }).unwrap();
//! session.handle_event(InputEvent::PointerMove { x: 1200.0, y: 1700.0 }).unwrap();
//! let outcome = session.handle_event(InputEvent::Key { key: EditorKey::Apply }).unwrap();
//! assert_eq!(outcome, CutOutcome::Applied);
//! assert_eq!(session.panels().count(), 2);
//! ```

pub mod commands;
pub mod events;
pub mod export;
pub mod panel_store;
pub mod raster;
pub mod selection_manager;
pub mod serialization;
pub mod session;
pub mod svg_renderer;
pub mod tools;

pub use commands::{History, PanelCommand};
pub use events::{CutOutcome, EditorKey, InputEvent};
pub use export::Coordinates;
pub use panel_store::{PanelId, PanelStore};
pub use selection_manager::SelectionManager;
pub use serialization::{DesignFile, DesignMetadata};
pub use session::{EditorSession, Preview};
pub use svg_renderer::render_svg;
pub use tools::{derive_cut, AnchorState, CutPreview, Mode};
