use crate::panel_store::{PanelId, PanelStore};
use panelcut_core::Point;

/// Tracks the panel under the cursor.
///
/// Only one panel is selected at a time. Selection follows the pointer: the
/// current panel stays selected while the cursor remains inside it, and
/// otherwise the topmost panel containing the cursor is picked.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<PanelId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use panelcut_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    pub fn selected_id(&self) -> Option<PanelId> {
        self.selected_id
    }

    pub fn set_selected_id(&mut self, id: Option<PanelId>) {
        self.selected_id = id;
    }

    pub fn deselect(&mut self) {
        self.selected_id = None;
    }

    /// Updates the selection for a cursor at `point`.
    ///
    /// Returns `true` when the selected panel changed.
    pub fn hover(&mut self, store: &PanelStore, point: Point) -> bool {
        let still_inside = self
            .selected_id
            .and_then(|id| store.get(id))
            .is_some_and(|polygon| polygon.contains_point(point));
        if still_inside {
            return false;
        }

        let previous = self.selected_id;
        self.selected_id = store.hit_test(point);
        previous != self.selected_id
    }

    /// Drops the selection if its panel is no longer stored.
    pub fn sync(&mut self, store: &PanelStore) {
        if self.selected_id.is_some_and(|id| !store.contains(id)) {
            self.selected_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelcut_core::Polygon;

    fn store_with_overlap() -> (PanelStore, PanelId, PanelId) {
        let mut store = PanelStore::new();
        let lower = store.insert(Polygon::from_aabb(Point::new(0.0, 0.0), Point::new(10.0, 10.0)));
        let upper = store.insert(Polygon::from_aabb(Point::new(5.0, 0.0), Point::new(15.0, 10.0)));
        (store, lower, upper)
    }

    #[test]
    fn test_hover_picks_topmost() {
        let (store, _, upper) = store_with_overlap();
        let mut manager = SelectionManager::new();
        assert!(manager.hover(&store, Point::new(7.0, 5.0)));
        assert_eq!(manager.selected_id(), Some(upper));
    }

    #[test]
    fn test_hover_keeps_selection_while_inside() {
        let (store, lower, _) = store_with_overlap();
        let mut manager = SelectionManager::new();
        manager.hover(&store, Point::new(2.0, 5.0));
        assert_eq!(manager.selected_id(), Some(lower));

        // Overlap region: the upper panel would win a fresh hit test
        assert!(!manager.hover(&store, Point::new(7.0, 5.0)));
        assert_eq!(manager.selected_id(), Some(lower));
    }

    #[test]
    fn test_hover_outside_everything_clears() {
        let (store, _, _) = store_with_overlap();
        let mut manager = SelectionManager::new();
        manager.hover(&store, Point::new(2.0, 5.0));
        assert!(manager.hover(&store, Point::new(50.0, 50.0)));
        assert_eq!(manager.selected_id(), None);
    }

    #[test]
    fn test_sync_drops_removed_panel() {
        let (mut store, lower, _) = store_with_overlap();
        let mut manager = SelectionManager::new();
        manager.set_selected_id(Some(lower));
        store.remove(lower);
        manager.sync(&store);
        assert_eq!(manager.selected_id(), None);
    }
}
