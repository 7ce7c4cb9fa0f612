//! Editor session: the single owner of all editing state.
//!
//! Every input is handled synchronously through [`EditorSession::handle_event`].
//! Whenever the cursor, the configuration or the panels change, the cut preview
//! for the selected panel is derived again, so it always reflects the latest
//! state.

use panelcut_core::{cut, Aabb, Point, Polygon};
use panelcut_settings::{ConfigResult, EditorConfig, ModeKind};
use tracing::{debug, info};

use crate::commands::{CutPanel, History, PanelCommand, RemovePanel};
use crate::events::{CutOutcome, EditorKey, InputEvent};
use crate::panel_store::{PanelId, PanelStore};
use crate::selection_manager::SelectionManager;
use crate::tools::{derive_cut, AnchorState, CutPreview, Mode};

/// Everything an embedding surface needs to draw the editing overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preview {
    pub selected: Option<PanelId>,
    /// Left and right guide segments, present only when the cut is possible.
    pub guides: Option<[(Point, Point); 2]>,
    /// Candidate anchor to cursor, before the anchor start is confirmed.
    pub anchor_line: Option<(Point, Point)>,
    /// Snapped grid corner to cursor in the grid snapper.
    pub snap_line: Option<(Point, Point)>,
    pub snapped: Option<Point>,
    pub frozen_aabb: Option<Aabb>,
}

/// Editing state for one page.
#[derive(Debug, Clone)]
pub struct EditorSession {
    config: EditorConfig,
    store: PanelStore,
    selection: SelectionManager,
    mode: Mode,
    cursor: Option<Point>,
    cut: CutPreview,
    history: History,
}

impl EditorSession {
    /// Creates a session holding a single page panel.
    pub fn new(config: EditorConfig) -> ConfigResult<Self> {
        config.validate()?;
        let mut session = Self::empty(config);
        session.reset();
        Ok(session)
    }

    /// Creates a session holding the given panels instead of a fresh page.
    pub fn with_panels(
        config: EditorConfig,
        panels: impl IntoIterator<Item = Polygon>,
    ) -> ConfigResult<Self> {
        config.validate()?;
        let mut session = Self::empty(config);
        for polygon in panels {
            session.store.insert(polygon);
        }
        Ok(session)
    }

    fn empty(config: EditorConfig) -> Self {
        Self {
            mode: Mode::from_kind(config.mode),
            config,
            store: PanelStore::new(),
            selection: SelectionManager::new(),
            cursor: None,
            cut: CutPreview::default(),
            history: History::new(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn store(&self) -> &PanelStore {
        &self.store
    }

    /// Panels in draw order.
    pub fn panels(&self) -> impl Iterator<Item = &Polygon> + '_ {
        self.store.polygons()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn selected_id(&self) -> Option<PanelId> {
        self.selection.selected_id()
    }

    pub fn selected_polygon(&self) -> Option<&Polygon> {
        self.selection.selected_id().and_then(|id| self.store.get(id))
    }

    /// Cached cut derivation for the selected panel.
    pub fn cut_preview(&self) -> &CutPreview {
        &self.cut
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drawing overlay for the current state.
    pub fn preview(&self) -> Preview {
        let mut preview = Preview {
            selected: self.selection.selected_id(),
            frozen_aabb: self.mode.frozen_aabb(),
            ..Preview::default()
        };
        if preview.selected.is_none() {
            return preview;
        }

        preview.guides = self.cut.guides.segments();
        if let Some(cursor) = self.cursor {
            if self.mode.anchor_start().is_none() {
                preview.anchor_line = self.cut.anchor.map(|anchor| (anchor, cursor));
            }
            preview.snap_line = self.cut.snapped.map(|snapped| (snapped, cursor));
        }
        preview.snapped = self.cut.snapped;
        preview
    }

    /// Dispatches one input event.
    ///
    /// Geometric refusals (nothing selected, no clean cut) are reported
    /// through the returned [`CutOutcome`]. Only invalid settings produce an
    /// error, in which case nothing changes.
    pub fn handle_event(&mut self, event: InputEvent) -> ConfigResult<CutOutcome> {
        let outcome = match event {
            InputEvent::PointerMove { x, y } => self.pointer_move(Point::new(x, y)),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::PointerDown => self.pointer_down(),
            InputEvent::Wheel { delta_y } => self.wheel(delta_y)?,
            InputEvent::Key { key } => self.key(key),
            InputEvent::SetMode { mode } => {
                self.set_mode(mode);
                CutOutcome::Handled
            }
            InputEvent::SetAngle { degrees } => {
                self.set_angle(degrees)?;
                CutOutcome::Handled
            }
            InputEvent::SetGridDivisions { divisions } => {
                self.set_grid_divisions(divisions)?;
                CutOutcome::Handled
            }
            InputEvent::SetSnapToPoints { enabled } => {
                self.set_snap_to_points(enabled);
                CutOutcome::Handled
            }
            InputEvent::Reset => {
                self.reset();
                CutOutcome::Handled
            }
        };
        Ok(outcome)
    }

    pub fn pointer_move(&mut self, point: Point) -> CutOutcome {
        self.cursor = Some(point);
        if self.selection.hover(&self.store, point) {
            debug!("Selection changed to {:?}", self.selection.selected_id());
        }
        self.recompute();
        CutOutcome::Handled
    }

    /// Cursor left the drawing surface.
    pub fn pointer_leave(&mut self) -> CutOutcome {
        self.cursor = None;
        self.selection.deselect();
        self.recompute();
        CutOutcome::Handled
    }

    /// Freezes the selected panel's box in the grid snapper.
    pub fn pointer_down(&mut self) -> CutOutcome {
        let Some(bbox) = self.selected_polygon().map(Polygon::bounding_box) else {
            return CutOutcome::Ignored;
        };
        let Mode::GridSnapper { frozen } = &mut self.mode else {
            return CutOutcome::Ignored;
        };
        *frozen = Some(bbox);
        debug!("Grid box frozen at {:?}..{:?}", bbox.min, bbox.max);
        self.recompute();
        CutOutcome::Handled
    }

    /// Turns the knife by `delta_y` wheel notches.
    pub fn wheel(&mut self, delta_y: f64) -> ConfigResult<CutOutcome> {
        if !self.mode.is_cutting() {
            return Ok(CutOutcome::Ignored);
        }
        self.config.rotate_by_wheel(delta_y)?;
        self.recompute();
        Ok(CutOutcome::Handled)
    }

    pub fn key(&mut self, key: EditorKey) -> CutOutcome {
        match key {
            EditorKey::Apply => self.apply(),
            EditorKey::Clear => self.clear(),
            EditorKey::Delete => self.delete_selected(),
            EditorKey::Undo => self.undo(),
            EditorKey::Redo => self.redo(),
        }
    }

    /// Performs the cut for the active mode.
    ///
    /// In the anchor mode the first apply fixes the start point and the
    /// second one cuts, returning to the first stage either way.
    pub fn apply(&mut self) -> CutOutcome {
        match self.mode {
            Mode::Select => CutOutcome::Ignored,
            Mode::Anchor(AnchorState::AwaitingStart) => match self.cut.anchor {
                Some(start) => {
                    self.mode = Mode::Anchor(AnchorState::AwaitingApply { start });
                    debug!("Anchor start fixed at ({}, {})", start.x, start.y);
                    self.recompute();
                    CutOutcome::AnchorConfirmed
                }
                None => CutOutcome::NoSelection,
            },
            Mode::Anchor(AnchorState::AwaitingApply { .. }) => {
                let outcome = self.cut_selected();
                self.mode = Mode::Anchor(AnchorState::AwaitingStart);
                self.recompute();
                outcome
            }
            Mode::Knife | Mode::HalfSplitter | Mode::GridSnapper { .. } => self.cut_selected(),
        }
    }

    fn cut_selected(&mut self) -> CutOutcome {
        let Some(id) = self.selection.selected_id() else {
            debug!("Cut ignored: no panel selected");
            return CutOutcome::NoSelection;
        };
        let Some(original) = self.store.get(id).cloned() else {
            self.selection.deselect();
            return CutOutcome::NoSelection;
        };

        self.recompute();
        if !self.cut.is_cuttable() {
            debug!(
                "Cut ignored: guides cross panel {} at {} and {} points",
                id,
                self.cut.guides.left.len(),
                self.cut.guides.right.len()
            );
            return CutOutcome::NotCuttable;
        }

        let Some((left, right)) = cut(&original, &self.cut.guides.left, &self.cut.guides.right)
        else {
            return CutOutcome::Degenerate;
        };

        let Some(position) = self.store.position(id) else {
            return CutOutcome::NoSelection;
        };
        let Some([left_id, right_id]) =
            self.store.replace_with_pair(id, left.clone(), right.clone())
        else {
            return CutOutcome::NoSelection;
        };

        info!(
            "Cut panel {} into {} ({} points) and {} ({} points)",
            id,
            left_id,
            left.len(),
            right_id,
            right.len()
        );
        self.history.record(PanelCommand::CutPanel(CutPanel {
            id,
            position,
            original,
            pieces: [(left_id, left), (right_id, right)],
        }));
        self.selection.deselect();
        self.cut = CutPreview::default();
        CutOutcome::Applied
    }

    /// Unfreezes the grid box and cancels a pending anchor.
    pub fn clear(&mut self) -> CutOutcome {
        let before = self.mode;
        self.mode.clear();
        if self.mode == before {
            return CutOutcome::Ignored;
        }
        self.recompute();
        CutOutcome::Handled
    }

    /// Removes the selected panel. Only active in Select mode.
    pub fn delete_selected(&mut self) -> CutOutcome {
        if self.mode.is_cutting() {
            return CutOutcome::Ignored;
        }
        let Some(id) = self.selection.selected_id() else {
            return CutOutcome::NoSelection;
        };
        let Some((polygon, position)) = self.store.remove(id) else {
            self.selection.deselect();
            return CutOutcome::NoSelection;
        };

        info!("Deleted panel {}", id);
        self.history.record(PanelCommand::RemovePanel(RemovePanel {
            id,
            position,
            polygon,
        }));
        self.selection.deselect();
        self.recompute();
        CutOutcome::Handled
    }

    pub fn undo(&mut self) -> CutOutcome {
        match self.history.undo(&mut self.store) {
            Some(name) => info!("Undo: {}", name),
            None => return CutOutcome::Ignored,
        }
        self.after_history_change();
        CutOutcome::Handled
    }

    pub fn redo(&mut self) -> CutOutcome {
        match self.history.redo(&mut self.store) {
            Some(name) => info!("Redo: {}", name),
            None => return CutOutcome::Ignored,
        }
        self.after_history_change();
        CutOutcome::Handled
    }

    fn after_history_change(&mut self) {
        self.selection.sync(&self.store);
        if let Some(cursor) = self.cursor {
            self.selection.hover(&self.store, cursor);
        }
        self.recompute();
    }

    /// Switches mode, dropping the transient state of the previous one.
    pub fn set_mode(&mut self, kind: ModeKind) {
        self.config.mode = kind;
        self.mode = Mode::from_kind(kind);
        debug!("Mode set to {}", kind);
        self.recompute();
    }

    pub fn set_angle(&mut self, degrees: f64) -> ConfigResult<()> {
        self.config.set_angle(degrees)?;
        self.recompute();
        Ok(())
    }

    pub fn set_grid_divisions(&mut self, divisions: u32) -> ConfigResult<()> {
        self.config.set_grid_divisions(divisions)?;
        self.recompute();
        Ok(())
    }

    pub fn set_snap_to_points(&mut self, enabled: bool) {
        self.config.snap_to_points = enabled;
        self.recompute();
    }

    /// Replaces the configuration and starts over with a fresh page.
    pub fn set_config(&mut self, config: EditorConfig) -> ConfigResult<()> {
        config.validate()?;
        self.mode = Mode::from_kind(config.mode);
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Starts over with a single page panel inset by the page margin.
    ///
    /// Clears panels, selection, mode state and history.
    pub fn reset(&mut self) {
        let layout = self.config.layout();
        let margin = layout.page_margin_px;
        let page = Polygon::from_aabb(
            Point::new(margin, margin),
            Point::new(layout.width_px - margin, layout.height_px - margin),
        );

        self.store.clear();
        self.store.insert(page);
        self.selection.deselect();
        self.mode.clear();
        self.history.clear();
        self.recompute();
        info!(
            "Page reset to {}x{} px with {} px margin",
            layout.width_px, layout.height_px, margin
        );
    }

    fn recompute(&mut self) {
        self.cut = match (self.cursor, self.selected_polygon()) {
            (Some(cursor), Some(polygon)) => derive_cut(&self.mode, &self.config, cursor, polygon),
            _ => CutPreview::default(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(mode: ModeKind) -> EditorConfig {
        EditorConfig {
            res_dpi: 25.4,
            panel_margin_mm: 10.0,
            angle: 0.0,
            mode,
            ..EditorConfig::default()
        }
    }

    fn rect_session(mode: ModeKind) -> EditorSession {
        let rect = Polygon::from_aabb(Point::new(0.0, 0.0), Point::new(100.0, 200.0));
        EditorSession::with_panels(config(mode), [rect]).unwrap()
    }

    #[test]
    fn test_new_session_holds_page() {
        let session = EditorSession::new(EditorConfig::default()).unwrap();
        let page: Vec<_> = session.panels().collect();
        assert_eq!(page.len(), 1);
        let bbox = page[0].bounding_box();
        assert_eq!(bbox.min, Point::new(47.0, 47.0));
        assert_eq!(bbox.max, Point::new(2433.0, 3461.0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut bad = EditorConfig::default();
        bad.grid_div = 1;
        assert!(EditorSession::new(bad).is_err());
    }

    #[test]
    fn test_hover_and_leave() {
        let mut session = rect_session(ModeKind::Knife);
        session.pointer_move(Point::new(50.0, 100.0));
        assert!(session.selected_id().is_some());
        assert!(session.cut_preview().is_cuttable());

        session.pointer_leave();
        assert_eq!(session.selected_id(), None);
        assert_eq!(session.preview(), Preview::default());
    }

    #[test]
    fn test_apply_without_selection() {
        let mut session = rect_session(ModeKind::Knife);
        assert_eq!(session.apply(), CutOutcome::NoSelection);
        session.pointer_move(Point::new(500.0, 500.0));
        assert_eq!(session.apply(), CutOutcome::NoSelection);
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_knife_cut_records_history() {
        let mut session = rect_session(ModeKind::Knife);
        session.pointer_move(Point::new(50.0, 100.0));
        assert_eq!(session.apply(), CutOutcome::Applied);
        assert_eq!(session.store().len(), 2);
        assert_eq!(session.selected_id(), None);
        assert!(session.can_undo());
    }

    #[test]
    fn test_select_mode_ignores_apply_and_wheel() {
        let mut session = rect_session(ModeKind::Select);
        session.pointer_move(Point::new(50.0, 100.0));
        assert_eq!(session.apply(), CutOutcome::Ignored);
        assert_eq!(session.wheel(3.0), Ok(CutOutcome::Ignored));
        assert_eq!(session.config().angle, 0.0);
    }

    #[test]
    fn test_wheel_rotates_and_clamps() {
        let mut session = rect_session(ModeKind::Knife);
        session.wheel(2.0).unwrap();
        assert_eq!(session.config().angle, 10.0);
        session.wheel(100.0).unwrap();
        assert_eq!(session.config().angle, 180.0);
        session.wheel(-1000.0).unwrap();
        assert_eq!(session.config().angle, -180.0);
    }

    #[test]
    fn test_setters_reject_invalid_values() {
        let mut session = rect_session(ModeKind::GridSnapper);
        assert!(session.set_grid_divisions(1).is_err());
        assert_eq!(session.config().grid_div, 3);
        assert!(session
            .handle_event(InputEvent::SetAngle { degrees: f64::INFINITY })
            .is_err());
        assert_eq!(session.config().angle, 0.0);
    }

    #[test]
    fn test_mode_switch_drops_transient_state() {
        let mut session = rect_session(ModeKind::GridSnapper);
        session.pointer_move(Point::new(50.0, 100.0));
        assert_eq!(session.pointer_down(), CutOutcome::Handled);
        assert!(session.preview().frozen_aabb.is_some());

        session.set_mode(ModeKind::Knife);
        session.set_mode(ModeKind::GridSnapper);
        assert!(session.preview().frozen_aabb.is_none());
    }

    #[test]
    fn test_reset_restores_single_page() {
        let mut session = EditorSession::new(config(ModeKind::Knife)).unwrap();
        session.pointer_move(Point::new(100.0, 150.0));
        assert_eq!(session.apply(), CutOutcome::Applied);
        assert_eq!(session.store().len(), 2);

        session.handle_event(InputEvent::Reset).unwrap();
        assert_eq!(session.store().len(), 1);
        assert!(!session.can_undo());
        assert_eq!(session.selected_id(), None);
    }
}
