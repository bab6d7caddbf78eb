//! The unified board store: elements, sections, selection and history.

use crate::element::{now_millis, Element, ElementId, ElementUpdate};
use crate::error::{BoardError, BoardResult};
use crate::resize::{compute_text_resize, ResizeAnchor, TextResize};
use crate::section::{Section, SectionId, SectionUpdate};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum number of undo states to keep.
const MAX_UNDO_HISTORY: usize = 50;

/// A snapshot of board state for undo/redo.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoardSnapshot {
    elements: HashMap<ElementId, Element>,
    sections: HashMap<SectionId, Section>,
    section_order: Vec<SectionId>,
}

/// Canonical state container for the canvas.
///
/// Explicitly constructed and passed to consumers; there is no ambient
/// global. All mutation goes through named actions, reads hand out
/// references into the single long-lived instance. Single-threaded by
/// design: all writes happen synchronously on the UI thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardStore {
    /// All elements, keyed by id.
    elements: HashMap<ElementId, Element>,
    /// All sections, keyed by id.
    sections: HashMap<SectionId, Section>,
    /// Z-order of sections (back to front, creation order).
    section_order: Vec<SectionId>,
    /// Currently selected element ids, in selection order.
    selection: Vec<ElementId>,
    /// Undo history stack.
    #[serde(skip)]
    undo_stack: Vec<BoardSnapshot>,
    /// Redo history stack.
    #[serde(skip)]
    redo_stack: Vec<BoardSnapshot>,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            sections: HashMap::new(),
            section_order: Vec::new(),
            selection: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    fn validate_geometry(width: f64, height: f64) -> BoardResult<()> {
        if width < 0.0 || height < 0.0 || !width.is_finite() || !height.is_finite() {
            return Err(BoardError::InvalidGeometry { width, height });
        }
        Ok(())
    }

    // ----- undo/redo -----

    fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            elements: self.elements.clone(),
            sections: self.sections.clone(),
            section_order: self.section_order.clone(),
        }
    }

    /// Push current state to the undo stack (call before making changes).
    pub fn push_undo(&mut self) {
        self.undo_stack.push(self.snapshot());
        self.redo_stack.clear();
        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last change. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(snapshot) = self.undo_stack.pop() {
            self.redo_stack.push(self.snapshot());
            self.restore(snapshot);
            true
        } else {
            false
        }
    }

    /// Redo the last undone change. Returns false if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(snapshot) = self.redo_stack.pop() {
            self.undo_stack.push(self.snapshot());
            self.restore(snapshot);
            true
        } else {
            false
        }
    }

    fn restore(&mut self, snapshot: BoardSnapshot) {
        self.elements = snapshot.elements;
        self.sections = snapshot.sections;
        self.section_order = snapshot.section_order;
        // Selection may reference elements that no longer exist
        self.selection.retain(|id| self.elements.contains_key(id));
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    // ----- elements -----

    /// Add an element to the store.
    ///
    /// Fails with `DuplicateId` if the id is already present and with
    /// `InvalidGeometry` on negative dimensions.
    pub fn add_element(&mut self, element: Element) -> BoardResult<ElementId> {
        Self::validate_geometry(element.width, element.height)?;
        if self.elements.contains_key(&element.id) {
            return Err(BoardError::DuplicateId(element.id));
        }
        let id = element.id;
        self.elements.insert(id, element);
        Ok(id)
    }

    /// Apply a partial update to an element, bumping its update timestamp.
    ///
    /// A missing id is a logged no-op returning false, so a stale reference
    /// never takes down the interaction loop. Invalid geometry in the update
    /// is rejected the same way. No containment side effects: callers ask the
    /// containment engine to recapture explicitly.
    pub fn update_element(&mut self, id: ElementId, update: ElementUpdate) -> bool {
        let Some(element) = self.elements.get_mut(&id) else {
            log::warn!("update_element: unknown element {id}, ignoring");
            return false;
        };
        let width = update.width.unwrap_or(element.width);
        let height = update.height.unwrap_or(element.height);
        if Self::validate_geometry(width, height).is_err() {
            log::warn!("update_element: invalid geometry {width}x{height} for {id}, ignoring");
            return false;
        }
        if let Some(position) = update.position {
            let dx = position.x - element.position.x;
            let dy = position.y - element.position.y;
            element.translate(dx, dy);
        }
        element.width = width;
        element.height = height;
        if let Some(content) = update.content {
            match &mut element.kind {
                crate::element::ElementKind::Text { content: c, .. }
                | crate::element::ElementKind::StickyNote { content: c, .. } => *c = content,
                _ => log::warn!("update_element: content update on non-text element {id}"),
            }
        }
        if let Some(font_size) = update.font_size {
            match &mut element.kind {
                crate::element::ElementKind::Text { font_size: f, .. }
                | crate::element::ElementKind::StickyNote { font_size: f, .. } => *f = font_size,
                _ => log::warn!("update_element: font size update on non-text element {id}"),
            }
        }
        element.updated_at = now_millis();
        true
    }

    /// Remove an element, detaching it from section membership and selection.
    /// Child detachment keeps membership eventually consistent without
    /// waiting for the next capture pass.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        let removed = self.elements.remove(&id);
        if removed.is_some() {
            for section in self.sections.values_mut() {
                section.detach_child(id);
            }
            self.selection.retain(|&s| s != id);
        } else {
            log::warn!("remove_element: unknown element {id}, ignoring");
        }
        removed
    }

    /// Get an element by id.
    pub fn get_element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Iterate over all elements (unordered).
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Number of elements in the store.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Check if the store has no elements and no sections.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.sections.is_empty()
    }

    // ----- sections -----

    /// Create a section and append it to the z order.
    pub fn create_section(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        title: Option<&str>,
    ) -> BoardResult<SectionId> {
        Self::validate_geometry(width, height)?;
        let section = Section::new(Point::new(x, y), width, height, title);
        let id = section.id;
        self.sections.insert(id, section);
        self.section_order.push(id);
        Ok(id)
    }

    /// Apply a partial update to a section.
    ///
    /// A position change moves every current child element by the same
    /// delta in this call, so observers never see the section moved with
    /// children left behind. Width/height-only changes move no children and
    /// trigger no recapture.
    pub fn update_section(&mut self, id: SectionId, update: SectionUpdate) -> bool {
        let Some(section) = self.sections.get_mut(&id) else {
            log::warn!("update_section: unknown section {id}, ignoring");
            return false;
        };
        let width = update.width.unwrap_or(section.width);
        let height = update.height.unwrap_or(section.height);
        if Self::validate_geometry(width, height).is_err() {
            log::warn!("update_section: invalid geometry {width}x{height} for {id}, ignoring");
            return false;
        }
        section.width = width;
        section.height = height;
        if let Some(title) = update.title {
            section.title = title;
        }
        if let Some(position) = update.position {
            let dx = position.x - section.position.x;
            let dy = position.y - section.position.y;
            section.position = position;
            if dx != 0.0 || dy != 0.0 {
                let children = section.child_ids.clone();
                let now = now_millis();
                for child_id in children {
                    match self.elements.get_mut(&child_id) {
                        Some(element) => {
                            element.translate(dx, dy);
                            element.updated_at = now;
                        }
                        // Stale membership entry; the next capture pass drops it
                        None => log::debug!(
                            "update_section: child {child_id} of {id} no longer exists"
                        ),
                    }
                }
            }
        }
        true
    }

    /// Delete a section. Child elements are detached, never deleted.
    pub fn delete_section(&mut self, id: SectionId) -> Option<Section> {
        let removed = self.sections.remove(&id);
        if removed.is_some() {
            self.section_order.retain(|&s| s != id);
        } else {
            log::warn!("delete_section: unknown section {id}, ignoring");
        }
        removed
    }

    /// Get a section by id.
    pub fn get_section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(&id)
    }

    pub(crate) fn get_section_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        self.sections.get_mut(&id)
    }

    /// Sections in z order (back to front).
    pub fn sections_ordered(&self) -> impl Iterator<Item = &Section> {
        self.section_order.iter().filter_map(|id| self.sections.get(id))
    }

    /// Number of sections in the store.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    // ----- selection -----

    /// Add an element to the selection. Selecting never starts an operation.
    pub fn select_element(&mut self, id: ElementId) {
        if !self.elements.contains_key(&id) {
            log::warn!("select_element: unknown element {id}, ignoring");
            return;
        }
        if !self.selection.contains(&id) {
            self.selection.push(id);
        }
    }

    /// Remove an element from the selection.
    pub fn deselect_element(&mut self, id: ElementId) {
        self.selection.retain(|&s| s != id);
    }

    /// Toggle an element's membership in the selection.
    pub fn toggle_selected(&mut self, id: ElementId) {
        if self.is_selected(id) {
            self.deselect_element(id);
        } else {
            self.select_element(id);
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Select every element in the store.
    pub fn select_all(&mut self) {
        let mut ids: Vec<ElementId> = self.elements.keys().copied().collect();
        ids.sort();
        self.selection = ids;
    }

    /// Currently selected element ids, in selection order.
    pub fn selected(&self) -> &[ElementId] {
        &self.selection
    }

    /// Check if an element is selected.
    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selection.contains(&id)
    }

    /// Delete every selected element.
    pub fn delete_selected(&mut self) {
        for id in std::mem::take(&mut self.selection) {
            self.remove_element(id);
        }
    }

    // ----- text resize commit -----

    /// Commit a text resize as one atomic update of the full
    /// `{font_size, width, height}` triple.
    ///
    /// `skip_history` bypasses the undo stack so programmatic replays do not
    /// pollute it. Non-text-like targets, missing ids and non-finite or
    /// negative values are logged no-ops.
    pub fn commit_text_resize(
        &mut self,
        id: ElementId,
        resize: TextResize,
        skip_history: bool,
    ) -> bool {
        if !resize.font_size.is_finite()
            || !resize.width.is_finite()
            || !resize.height.is_finite()
            || resize.font_size < 0.0
            || resize.width < 0.0
            || resize.height < 0.0
        {
            log::warn!("commit_text_resize: rejecting non-finite or negative commit {resize:?}");
            return false;
        }
        match self.elements.get(&id) {
            None => {
                log::warn!("commit_text_resize: unknown element {id}, ignoring");
                return false;
            }
            Some(element) if !element.kind.is_text_like() => {
                log::warn!(
                    "commit_text_resize: element {id} is {}, not text-like, ignoring",
                    element.kind.name()
                );
                return false;
            }
            Some(_) => {}
        }
        if !skip_history {
            self.push_undo();
        }
        let Some(element) = self.elements.get_mut(&id) else {
            return false;
        };
        match &mut element.kind {
            crate::element::ElementKind::Text { font_size, .. }
            | crate::element::ElementKind::StickyNote { font_size, .. } => {
                *font_size = resize.font_size;
            }
            _ => {}
        }
        element.width = resize.width;
        element.height = resize.height;
        element.updated_at = now_millis();
        true
    }

    /// Cheap live-preview path for an in-progress resize drag.
    ///
    /// Computes the triple that would be committed for the current scale
    /// factors without touching the store. Returns None for unknown ids and
    /// non-text-like elements.
    pub fn resize_text_live(
        &self,
        id: ElementId,
        anchor: ResizeAnchor,
        sx: f64,
        sy: f64,
    ) -> Option<TextResize> {
        let element = self.elements.get(&id)?;
        let font_size = element.font_size()?;
        let line_count = element.content().map_or(1, |c| c.lines().count().max(1));
        Some(compute_text_resize(
            font_size,
            element.width,
            line_count,
            anchor,
            sx,
            sy,
        ))
    }

    // ----- snapshots -----

    /// Serialize the store to JSON (history stacks are not persisted).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a store from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    #[test]
    fn test_add_and_get_element() {
        let mut store = BoardStore::new();
        let el = Element::rect(Point::new(0.0, 0.0), 100.0, 100.0);
        let id = store.add_element(el).unwrap();
        assert!(store.get_element(id).is_some());
        assert_eq!(store.element_count(), 1);
    }

    #[test]
    fn test_add_duplicate_id_fails() {
        let mut store = BoardStore::new();
        let el = Element::rect(Point::new(0.0, 0.0), 10.0, 10.0);
        let dup = el.clone();
        store.add_element(el).unwrap();
        assert!(matches!(
            store.add_element(dup),
            Err(BoardError::DuplicateId(_))
        ));
        assert_eq!(store.element_count(), 1);
    }

    #[test]
    fn test_add_invalid_geometry_fails() {
        let mut store = BoardStore::new();
        let el = Element::rect(Point::new(0.0, 0.0), -5.0, 10.0);
        assert!(matches!(
            store.add_element(el),
            Err(BoardError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_update_element_bumps_timestamp() {
        let mut store = BoardStore::new();
        let mut el = Element::rect(Point::new(0.0, 0.0), 10.0, 10.0);
        // Force an old timestamp so the bump is observable
        el.updated_at = 0;
        let id = store.add_element(el).unwrap();
        assert!(store.update_element(id, ElementUpdate::position(Point::new(5.0, 5.0))));
        let el = store.get_element(id).unwrap();
        assert!(el.updated_at > 0);
        assert!((el.position.x - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_missing_element_is_noop() {
        let mut store = BoardStore::new();
        assert!(!store.update_element(uuid::Uuid::new_v4(), ElementUpdate::default()));
        assert_eq!(store.element_count(), 0);
    }

    #[test]
    fn test_remove_element_detaches_membership_and_selection() {
        let mut store = BoardStore::new();
        let id = store
            .add_element(Element::rect(Point::new(10.0, 10.0), 20.0, 20.0))
            .unwrap();
        let sid = store.create_section(0.0, 0.0, 100.0, 100.0, None).unwrap();
        store.get_section_mut(sid).unwrap().child_ids.push(id);
        store.select_element(id);

        store.remove_element(id);
        assert!(store.get_element(id).is_none());
        assert!(!store.get_section(sid).unwrap().contains_child(id));
        assert!(!store.is_selected(id));
    }

    #[test]
    fn test_create_section_stores_fields() {
        let mut store = BoardStore::new();
        let id = store
            .create_section(50.0, 50.0, 400.0, 300.0, Some("Test Section"))
            .unwrap();
        let s = store.get_section(id).unwrap();
        assert!((s.position.x - 50.0).abs() < f64::EPSILON);
        assert!((s.position.y - 50.0).abs() < f64::EPSILON);
        assert!((s.width - 400.0).abs() < f64::EPSILON);
        assert!((s.height - 300.0).abs() < f64::EPSILON);
        assert_eq!(s.title, "Test Section");
    }

    #[test]
    fn test_create_section_rejects_negative_dims() {
        let mut store = BoardStore::new();
        assert!(matches!(
            store.create_section(0.0, 0.0, -1.0, 10.0, None),
            Err(BoardError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_section_move_moves_children() {
        let mut store = BoardStore::new();
        let el = store
            .add_element(Element::rect(Point::new(10.0, 10.0), 20.0, 20.0))
            .unwrap();
        let outside = store
            .add_element(Element::rect(Point::new(500.0, 500.0), 20.0, 20.0))
            .unwrap();
        let sid = store.create_section(0.0, 0.0, 100.0, 100.0, None).unwrap();
        store.get_section_mut(sid).unwrap().child_ids.push(el);

        assert!(store.update_section(sid, SectionUpdate::position(Point::new(30.0, 40.0))));

        let moved = store.get_element(el).unwrap();
        assert!((moved.position.x - 40.0).abs() < f64::EPSILON);
        assert!((moved.position.y - 50.0).abs() < f64::EPSILON);
        // Non-members are untouched
        let other = store.get_element(outside).unwrap();
        assert!((other.position.x - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_section_resize_moves_no_children() {
        let mut store = BoardStore::new();
        let el = store
            .add_element(Element::rect(Point::new(10.0, 10.0), 20.0, 20.0))
            .unwrap();
        let sid = store.create_section(0.0, 0.0, 100.0, 100.0, None).unwrap();
        store.get_section_mut(sid).unwrap().child_ids.push(el);

        assert!(store.update_section(sid, SectionUpdate::size(250.0, 250.0)));

        let child = store.get_element(el).unwrap();
        assert!((child.position.x - 10.0).abs() < f64::EPSILON);
        assert!((child.position.y - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_delete_section_keeps_children() {
        let mut store = BoardStore::new();
        let el = store
            .add_element(Element::rect(Point::new(10.0, 10.0), 20.0, 20.0))
            .unwrap();
        let sid = store.create_section(0.0, 0.0, 100.0, 100.0, None).unwrap();
        store.get_section_mut(sid).unwrap().child_ids.push(el);

        assert!(store.delete_section(sid).is_some());
        assert!(store.get_section(sid).is_none());
        assert!(store.get_element(el).is_some());
    }

    #[test]
    fn test_selection_lifecycle() {
        let mut store = BoardStore::new();
        let a = store
            .add_element(Element::rect(Point::new(0.0, 0.0), 10.0, 10.0))
            .unwrap();
        let b = store
            .add_element(Element::rect(Point::new(20.0, 0.0), 10.0, 10.0))
            .unwrap();

        store.select_element(a);
        store.select_element(a); // no duplicate
        store.select_element(b);
        assert_eq!(store.selected().len(), 2);
        assert!(store.is_selected(a));

        store.toggle_selected(a);
        assert!(!store.is_selected(a));

        store.clear_selection();
        assert!(store.selected().is_empty());
    }

    #[test]
    fn test_select_missing_element_is_noop() {
        let mut store = BoardStore::new();
        store.select_element(uuid::Uuid::new_v4());
        assert!(store.selected().is_empty());
    }

    #[test]
    fn test_delete_selected() {
        let mut store = BoardStore::new();
        let a = store
            .add_element(Element::rect(Point::new(0.0, 0.0), 10.0, 10.0))
            .unwrap();
        let b = store
            .add_element(Element::rect(Point::new(20.0, 0.0), 10.0, 10.0))
            .unwrap();
        store.select_element(a);
        store.delete_selected();
        assert!(store.get_element(a).is_none());
        assert!(store.get_element(b).is_some());
        assert!(store.selected().is_empty());
    }

    #[test]
    fn test_commit_text_resize_atomic_triple() {
        let mut store = BoardStore::new();
        let id = store
            .add_element(Element::text(Point::new(0.0, 0.0), "hello", 16.0))
            .unwrap();
        let ok = store.commit_text_resize(
            id,
            TextResize {
                font_size: 20.0,
                width: 150.0,
                height: 24.0,
            },
            false,
        );
        assert!(ok);
        let el = store.get_element(id).unwrap();
        assert_eq!(el.font_size(), Some(20.0));
        assert!((el.width - 150.0).abs() < f64::EPSILON);
        assert!((el.height - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_commit_text_resize_history_flag() {
        let mut store = BoardStore::new();
        let id = store
            .add_element(Element::text(Point::new(0.0, 0.0), "hello", 16.0))
            .unwrap();
        let resize = TextResize {
            font_size: 20.0,
            width: 150.0,
            height: 24.0,
        };

        assert!(store.commit_text_resize(id, resize, true));
        assert!(!store.can_undo());

        assert!(store.commit_text_resize(id, resize, false));
        assert!(store.can_undo());
        assert!(store.undo());
        // Undone back to the skip-history state
        assert_eq!(store.get_element(id).unwrap().font_size(), Some(20.0));
    }

    #[test]
    fn test_commit_text_resize_rejects_non_text() {
        let mut store = BoardStore::new();
        let id = store
            .add_element(Element::rect(Point::new(0.0, 0.0), 10.0, 10.0))
            .unwrap();
        assert!(!store.commit_text_resize(
            id,
            TextResize {
                font_size: 20.0,
                width: 150.0,
                height: 24.0,
            },
            true,
        ));
    }

    #[test]
    fn test_commit_text_resize_rejects_bad_values() {
        let mut store = BoardStore::new();
        let id = store
            .add_element(Element::text(Point::new(0.0, 0.0), "x", 16.0))
            .unwrap();
        assert!(!store.commit_text_resize(
            id,
            TextResize {
                font_size: f64::NAN,
                width: 100.0,
                height: 20.0,
            },
            true,
        ));
        assert!(!store.commit_text_resize(
            id,
            TextResize {
                font_size: 16.0,
                width: -1.0,
                height: 20.0,
            },
            true,
        ));
        assert_eq!(store.get_element(id).unwrap().font_size(), Some(16.0));
    }

    #[test]
    fn test_resize_text_live_touches_nothing() {
        let mut store = BoardStore::new();
        let id = store
            .add_element(Element::text(Point::new(0.0, 0.0), "hello", 16.0))
            .unwrap();
        let before = store.get_element(id).unwrap().clone();

        let preview = store
            .resize_text_live(
                id,
                ResizeAnchor::Corner(crate::resize::Corner::BottomRight),
                1.25,
                1.25,
            )
            .unwrap();
        assert!((preview.font_size - 20.0).abs() < f64::EPSILON);

        assert_eq!(store.get_element(id).unwrap(), &before);
        assert!(!store.can_undo());
    }

    #[test]
    fn test_undo_redo_restores_sections() {
        let mut store = BoardStore::new();
        store.push_undo();
        let sid = store.create_section(0.0, 0.0, 100.0, 100.0, Some("A")).unwrap();
        assert!(store.undo());
        assert!(store.get_section(sid).is_none());
        assert!(store.redo());
        assert_eq!(store.get_section(sid).unwrap().title, "A");
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = BoardStore::new();
        let el = store
            .add_element(Element::sticky_note(
                Point::new(5.0, 5.0),
                120.0,
                80.0,
                "note",
                14.0,
            ))
            .unwrap();
        let sid = store
            .create_section(0.0, 0.0, 200.0, 200.0, Some("Area"))
            .unwrap();
        store.get_section_mut(sid).unwrap().child_ids.push(el);

        let json = store.to_json().unwrap();
        let restored = BoardStore::from_json(&json).unwrap();
        assert_eq!(restored.element_count(), 1);
        assert_eq!(restored.section_count(), 1);
        let s = restored.get_section(sid).unwrap();
        assert_eq!(s.title, "Area");
        assert!(s.contains_child(el));
        assert!(matches!(
            restored.get_element(el).unwrap().kind,
            ElementKind::StickyNote { .. }
        ));
    }
}
