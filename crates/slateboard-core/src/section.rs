//! Section records: titled rectangular grouping regions.

use crate::element::ElementId;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for sections.
pub type SectionId = Uuid;

/// Default title for sections created without one.
pub const DEFAULT_SECTION_TITLE: &str = "Untitled Section";

/// A titled rectangular region that can contain elements.
///
/// The section owns the membership relation only; child elements stay
/// independently addressable in the element store and are referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    /// Top-left corner in world coordinates.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub title: String,
    /// Ordered ids of contained elements. Recomputed on explicit capture,
    /// not continuously maintained.
    pub child_ids: Vec<ElementId>,
    /// Creation time, milliseconds since the Unix epoch.
    pub created_at: u64,
}

impl Section {
    /// Create a new section with a fresh id and empty membership.
    pub fn new(position: Point, width: f64, height: f64, title: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            title: title.unwrap_or(DEFAULT_SECTION_TITLE).to_string(),
            child_ids: Vec::new(),
            created_at: crate::element::now_millis(),
        }
    }

    /// Bounding rectangle in world coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Containment test: inclusive on the min edges, exclusive on the max
    /// edges, so adjacent sections never both claim a boundary point.
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.position.x
            && point.x < self.position.x + self.width
            && point.y >= self.position.y
            && point.y < self.position.y + self.height
    }

    /// Whether an element id is currently a member.
    pub fn contains_child(&self, id: ElementId) -> bool {
        self.child_ids.contains(&id)
    }

    /// Drop an element id from the membership set.
    pub(crate) fn detach_child(&mut self, id: ElementId) {
        self.child_ids.retain(|&c| c != id);
    }
}

/// Partial update applied to a section through the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionUpdate {
    pub position: Option<Point>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub title: Option<String>,
}

impl SectionUpdate {
    /// Update that only moves the section.
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Update that only resizes the section.
    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Update that only retitles the section.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_creation() {
        let s = Section::new(Point::new(50.0, 50.0), 400.0, 300.0, Some("Test Section"));
        assert_eq!(s.title, "Test Section");
        assert!(s.child_ids.is_empty());
        let b = s.bounds();
        assert!((b.x1 - 450.0).abs() < f64::EPSILON);
        assert!((b.y1 - 350.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_title() {
        let s = Section::new(Point::new(0.0, 0.0), 10.0, 10.0, None);
        assert_eq!(s.title, DEFAULT_SECTION_TITLE);
    }

    #[test]
    fn test_contains_point_inclusive_exclusive() {
        let s = Section::new(Point::new(0.0, 0.0), 100.0, 100.0, None);
        assert!(s.contains_point(Point::new(0.0, 0.0)));
        assert!(s.contains_point(Point::new(99.9, 99.9)));
        assert!(!s.contains_point(Point::new(100.0, 50.0)));
        assert!(!s.contains_point(Point::new(50.0, 100.0)));
        assert!(!s.contains_point(Point::new(-0.1, 50.0)));
    }

    #[test]
    fn test_detach_child() {
        let mut s = Section::new(Point::new(0.0, 0.0), 100.0, 100.0, None);
        let id = Uuid::new_v4();
        s.child_ids.push(id);
        assert!(s.contains_child(id));
        s.detach_child(id);
        assert!(!s.contains_child(id));
    }
}
