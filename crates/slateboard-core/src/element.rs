//! Canvas element records.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Line height as a multiple of font size, used to derive text block height.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Current wall-clock time in milliseconds since the Unix epoch.
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Type-specific payload for an element.
///
/// Each variant carries only the fields relevant to its type; text-like
/// variants are the only ones with content and font size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementKind {
    /// Plain rectangle shape.
    Rect,
    /// Free-standing text block.
    Text { content: String, font_size: f64 },
    /// Sticky note with editable text.
    StickyNote { content: String, font_size: f64 },
    /// Connector polyline between canvas locations.
    Connector { points: Vec<Point> },
}

impl ElementKind {
    /// Short name of the variant, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Rect => "rect",
            ElementKind::Text { .. } => "text",
            ElementKind::StickyNote { .. } => "sticky-note",
            ElementKind::Connector { .. } => "connector",
        }
    }

    /// Whether this variant carries text content and a font size.
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            ElementKind::Text { .. } | ElementKind::StickyNote { .. }
        )
    }
}

/// A single visual object on the canvas.
///
/// Position is the top-left corner; width and height are non-negative.
/// Sections reference elements by id only, the store owns the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    /// Top-left corner in world coordinates.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Type tag plus type-specific fields.
    pub kind: ElementKind,
    /// Creation time, milliseconds since the Unix epoch.
    pub created_at: u64,
    /// Last mutation time, bumped by every store update.
    pub updated_at: u64,
}

impl Element {
    /// Create a new element with a fresh id.
    pub fn new(position: Point, width: f64, height: f64, kind: ElementKind) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            kind,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a rectangle element.
    pub fn rect(position: Point, width: f64, height: f64) -> Self {
        Self::new(position, width, height, ElementKind::Rect)
    }

    /// Create a text element. Height is derived from the font size.
    pub fn text(position: Point, content: impl Into<String>, font_size: f64) -> Self {
        let content = content.into();
        let line_count = content.lines().count().max(1);
        let height = line_count as f64 * font_size * LINE_HEIGHT_FACTOR;
        // Rough width estimate; the renderer refines it after layout
        let max_line_len = content.lines().map(str::len).max().unwrap_or(0);
        let width = max_line_len as f64 * font_size * 0.55;
        Self::new(
            position,
            width.max(20.0),
            height,
            ElementKind::Text { content, font_size },
        )
    }

    /// Create a sticky note element.
    pub fn sticky_note(
        position: Point,
        width: f64,
        height: f64,
        content: impl Into<String>,
        font_size: f64,
    ) -> Self {
        Self::new(
            position,
            width,
            height,
            ElementKind::StickyNote {
                content: content.into(),
                font_size,
            },
        )
    }

    /// Create a connector element from a polyline.
    /// Position and dimensions are derived from the point set.
    pub fn connector(points: Vec<Point>) -> Self {
        let bounds = points
            .iter()
            .fold(None::<Rect>, |acc, p| {
                let r = Rect::from_origin_size(*p, (0.0, 0.0));
                Some(match acc {
                    Some(b) => b.union(r),
                    None => r,
                })
            })
            .unwrap_or(Rect::ZERO);
        Self::new(
            Point::new(bounds.x0, bounds.y0),
            bounds.width(),
            bounds.height(),
            ElementKind::Connector { points },
        )
    }

    /// Bounding box in world coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Font size, for text-like elements only.
    pub fn font_size(&self) -> Option<f64> {
        match &self.kind {
            ElementKind::Text { font_size, .. } | ElementKind::StickyNote { font_size, .. } => {
                Some(*font_size)
            }
            _ => None,
        }
    }

    /// Text content, for text-like elements only.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Text { content, .. } | ElementKind::StickyNote { content, .. } => {
                Some(content)
            }
            _ => None,
        }
    }

    /// Translate the element (and any payload points) by a delta.
    pub(crate) fn translate(&mut self, dx: f64, dy: f64) {
        self.position.x += dx;
        self.position.y += dy;
        if let ElementKind::Connector { points } = &mut self.kind {
            for p in points.iter_mut() {
                p.x += dx;
                p.y += dy;
            }
        }
    }
}

/// Partial update applied to an element through the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementUpdate {
    pub position: Option<Point>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub content: Option<String>,
    pub font_size: Option<f64>,
}

impl ElementUpdate {
    /// Update that only moves the element.
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Update that only resizes the element.
    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }
}
