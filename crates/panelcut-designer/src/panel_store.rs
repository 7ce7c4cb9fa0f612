//! Owning storage for the panels on the page.

use panelcut_core::{Point, Polygon};
use std::collections::HashMap;

/// Identifier of a stored panel. Never reused within a store.
pub type PanelId = u64;

/// Manages the storage and draw order of panels.
///
/// Panels are kept in a map keyed by id, with a separate list recording the
/// draw order. Later entries are drawn on top and win hit tests.
#[derive(Debug, Clone, Default)]
pub struct PanelStore {
    panels: HashMap<PanelId, Polygon>,
    draw_order: Vec<PanelId>,
    next_id: PanelId,
}

impl PanelStore {
    pub fn new() -> Self {
        Self {
            panels: HashMap::new(),
            draw_order: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocates a fresh panel id.
    pub fn generate_id(&mut self) -> PanelId {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }

    /// Adds a panel on top of the draw order and returns its id.
    pub fn insert(&mut self, polygon: Polygon) -> PanelId {
        let id = self.generate_id();
        self.panels.insert(id, polygon);
        self.draw_order.push(id);
        id
    }

    /// Puts a panel back under a known id at `position` in the draw order.
    ///
    /// Used when undoing; `position` is clamped to the current length. An
    /// existing panel with the same id is replaced in place.
    pub fn restore(&mut self, id: PanelId, polygon: Polygon, position: usize) {
        if self.panels.insert(id, polygon).is_none() {
            let position = position.min(self.draw_order.len());
            self.draw_order.insert(position, id);
        }
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }

    /// Removes a panel, returning it with its former draw position.
    pub fn remove(&mut self, id: PanelId) -> Option<(Polygon, usize)> {
        let position = self.position(id)?;
        let polygon = self.panels.remove(&id)?;
        self.draw_order.remove(position);
        Some((polygon, position))
    }

    /// Replaces one panel by two, both taking over its draw slot.
    ///
    /// Returns the ids of the new panels, or `None` (with the store
    /// untouched) when `id` is unknown.
    pub fn replace_with_pair(
        &mut self,
        id: PanelId,
        first: Polygon,
        second: Polygon,
    ) -> Option<[PanelId; 2]> {
        let (_, position) = self.remove(id)?;
        let first_id = self.generate_id();
        let second_id = self.generate_id();
        self.restore(first_id, first, position);
        self.restore(second_id, second, position + 1);
        Some([first_id, second_id])
    }

    pub fn get(&self, id: PanelId) -> Option<&Polygon> {
        self.panels.get(&id)
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.panels.contains_key(&id)
    }

    /// Draw position of a panel.
    pub fn position(&self, id: PanelId) -> Option<usize> {
        self.draw_order.iter().position(|&other| other == id)
    }

    /// Panels in draw order, bottom first.
    pub fn iter(&self) -> impl Iterator<Item = (PanelId, &Polygon)> + '_ {
        self.draw_order
            .iter()
            .filter_map(move |id| self.panels.get(id).map(|polygon| (*id, polygon)))
    }

    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> + '_ {
        self.iter().map(|(_, polygon)| polygon)
    }

    pub fn ids(&self) -> &[PanelId] {
        &self.draw_order
    }

    pub fn len(&self) -> usize {
        self.draw_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw_order.is_empty()
    }

    /// Drops every panel. Ids keep counting up.
    pub fn clear(&mut self) {
        self.panels.clear();
        self.draw_order.clear();
    }

    /// Topmost panel containing `point`.
    pub fn hit_test(&self, point: Point) -> Option<PanelId> {
        self.draw_order
            .iter()
            .rev()
            .copied()
            .find(|id| self.panels.get(id).is_some_and(|p| p.contains_point(point)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Polygon {
        Polygon::from_aabb(Point::new(x, y), Point::new(x + size, y + size))
    }

    #[test]
    fn test_insert_and_draw_order() {
        let mut store = PanelStore::new();
        let a = store.insert(square(0.0, 0.0, 10.0));
        let b = store.insert(square(20.0, 0.0, 10.0));
        assert_ne!(a, b);
        assert_eq!(store.ids(), &[a, b]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut store = PanelStore::new();
        let _bottom = store.insert(square(0.0, 0.0, 10.0));
        let top = store.insert(square(5.0, 5.0, 10.0));
        assert_eq!(store.hit_test(Point::new(7.0, 7.0)), Some(top));
        assert_eq!(store.hit_test(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn test_replace_with_pair_keeps_slot() {
        let mut store = PanelStore::new();
        let a = store.insert(square(0.0, 0.0, 10.0));
        let b = store.insert(square(20.0, 0.0, 10.0));
        let c = store.insert(square(40.0, 0.0, 10.0));

        let [x, y] = store
            .replace_with_pair(b, square(20.0, 0.0, 4.0), square(26.0, 0.0, 4.0))
            .unwrap();
        assert_eq!(store.ids(), &[a, x, y, c]);
        assert!(!store.contains(b));
        assert!(x > c && y > x);

        assert!(store
            .replace_with_pair(b, square(0.0, 0.0, 1.0), square(0.0, 0.0, 1.0))
            .is_none());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_remove_and_restore_round_trip() {
        let mut store = PanelStore::new();
        let a = store.insert(square(0.0, 0.0, 10.0));
        let b = store.insert(square(20.0, 0.0, 10.0));
        let c = store.insert(square(40.0, 0.0, 10.0));

        let (polygon, position) = store.remove(b).unwrap();
        assert_eq!(position, 1);
        assert_eq!(store.ids(), &[a, c]);

        store.restore(b, polygon.clone(), position);
        assert_eq!(store.ids(), &[a, b, c]);
        assert_eq!(store.get(b), Some(&polygon));
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut store = PanelStore::new();
        let a = store.insert(square(0.0, 0.0, 10.0));
        store.clear();
        assert!(store.is_empty());
        let b = store.insert(square(0.0, 0.0, 10.0));
        assert!(b > a);
    }
}
