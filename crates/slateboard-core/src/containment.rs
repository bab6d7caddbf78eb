//! Section containment: point lookup and membership capture.
//!
//! Containment is decided by an element's top-left corner falling inside the
//! section bounds, not by full bounding-box overlap. Membership is recomputed
//! only on explicit triggers (section creation, capture calls, bound
//! updates); independent element moves never recapture automatically.

use crate::element::ElementId;
use crate::error::{BoardError, BoardResult};
use crate::section::SectionId;
use crate::store::BoardStore;
use kurbo::Point;

/// Find the section whose bounds contain the point.
///
/// Bounds are inclusive on the min edges and exclusive on the max edges.
/// When sections overlap, the topmost in z order wins — the most recently
/// created of the overlapping sections, matching front-to-back hit testing
/// elsewhere on the canvas.
pub fn find_section_at_point(store: &BoardStore, point: Point) -> Option<SectionId> {
    store
        .sections_ordered()
        .filter(|s| s.contains_point(point))
        .last()
        .map(|s| s.id)
}

/// Recompute and replace the full child membership of a section.
///
/// Tests every element's top-left corner against the section bounds; an
/// element whose corner is inside counts as contained even if the rest of it
/// extends outside. O(elements) per call by design: capture only runs on
/// explicit structural events, never per frame. Children are ordered by id
/// so the result is stable across runs.
///
/// Returns the new child count, or `NotFound` for an unknown section.
pub fn capture_elements_in_section(
    store: &mut BoardStore,
    section_id: SectionId,
) -> BoardResult<usize> {
    let Some(section) = store.get_section(section_id) else {
        log::warn!("capture_elements_in_section: unknown section {section_id}");
        return Err(BoardError::NotFound(section_id));
    };
    let section = section.clone();

    let mut children: Vec<ElementId> = store
        .elements()
        .filter(|e| section.contains_point(e.position))
        .map(|e| e.id)
        .collect();
    children.sort();

    let count = children.len();
    if let Some(section) = store.get_section_mut(section_id) {
        section.child_ids = children;
    }
    Ok(count)
}
