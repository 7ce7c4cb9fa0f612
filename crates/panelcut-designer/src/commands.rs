use crate::panel_store::{PanelId, PanelStore};
use panelcut_core::Polygon;

/// Undoable edit of the panel store.
///
/// Commands are recorded after the edit has been made, so `apply` is only
/// ever used for redo.
#[derive(Debug, Clone)]
pub enum PanelCommand {
    CutPanel(CutPanel),
    RemovePanel(RemovePanel),
}

/// One panel replaced by the two pieces of a cut.
#[derive(Debug, Clone)]
pub struct CutPanel {
    pub id: PanelId,
    pub position: usize,
    pub original: Polygon,
    pub pieces: [(PanelId, Polygon); 2],
}

#[derive(Debug, Clone)]
pub struct RemovePanel {
    pub id: PanelId,
    pub position: usize,
    pub polygon: Polygon,
}

impl PanelCommand {
    pub fn apply(&self, store: &mut PanelStore) {
        match self {
            PanelCommand::CutPanel(cmd) => {
                store.remove(cmd.id);
                for (offset, (id, polygon)) in cmd.pieces.iter().enumerate() {
                    store.restore(*id, polygon.clone(), cmd.position + offset);
                }
            }
            PanelCommand::RemovePanel(cmd) => {
                store.remove(cmd.id);
            }
        }
    }

    pub fn undo(&self, store: &mut PanelStore) {
        match self {
            PanelCommand::CutPanel(cmd) => {
                for (id, _) in &cmd.pieces {
                    store.remove(*id);
                }
                store.restore(cmd.id, cmd.original.clone(), cmd.position);
            }
            PanelCommand::RemovePanel(cmd) => {
                store.restore(cmd.id, cmd.polygon.clone(), cmd.position);
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PanelCommand::CutPanel(_) => "Cut Panel",
            PanelCommand::RemovePanel(_) => "Remove Panel",
        }
    }
}

/// Maximum number of commands kept for undo.
pub const MAX_HISTORY: usize = 50;

/// Undo and redo stacks.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<PanelCommand>,
    redo_stack: Vec<PanelCommand>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a command whose effect is already in the store.
    pub fn record(&mut self, cmd: PanelCommand) {
        self.undo_stack.push(cmd);
        self.redo_stack.clear();
        if self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Reverts the last command. Returns its name, if any.
    pub fn undo(&mut self, store: &mut PanelStore) -> Option<&str> {
        let cmd = self.undo_stack.pop()?;
        cmd.undo(store);
        self.redo_stack.push(cmd);
        self.redo_stack.last().map(PanelCommand::name)
    }

    /// Re-applies the last undone command. Returns its name, if any.
    pub fn redo(&mut self, store: &mut PanelStore) -> Option<&str> {
        let cmd = self.redo_stack.pop()?;
        cmd.apply(store);
        self.undo_stack.push(cmd);
        self.undo_stack.last().map(PanelCommand::name)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
