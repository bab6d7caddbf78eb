//! Tool system: current tool and in-progress drawing state.

use crate::element::Element;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Default font size for text created by the text tool.
pub const DEFAULT_TEXT_FONT_SIZE: f64 = 16.0;
/// Default font size for sticky notes.
pub const DEFAULT_STICKY_FONT_SIZE: f64 = 14.0;
/// Default sticky note dimensions.
pub const STICKY_NOTE_SIZE: f64 = 160.0;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Section,
    Rect,
    StickyNote,
    Text,
    Connector,
}

/// State of a tool interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToolState {
    /// Tool is idle, waiting for a press.
    #[default]
    Idle,
    /// Tool is actively being dragged.
    Active {
        /// Starting point of the interaction.
        start: Point,
        /// Current point of the interaction.
        current: Point,
    },
}

/// What a completed tool interaction produced.
#[derive(Debug, Clone)]
pub enum DrawOutput {
    /// A new element ready to be added to the store.
    Element(Element),
    /// Bounds for a new section.
    Section { x: f64, y: f64, width: f64, height: f64 },
}

/// Manages the current tool and its in-progress drawing state.
///
/// Pointer-down calls `begin`, moves call `update`, release calls `end`,
/// which yields the drawn output for the caller to commit to the store.
/// Selection is tracked by the store independently; picking a tool or
/// selecting an element never starts an interaction by itself.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Current state of the tool.
    pub state: ToolState,
    /// Accumulated points for connector drawing.
    path: Vec<Point>,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current tool, resetting any in-progress interaction.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
        self.state = ToolState::Idle;
        self.path.clear();
    }

    /// Begin a tool interaction at a point.
    pub fn begin(&mut self, point: Point) {
        if self.current_tool == ToolKind::Connector {
            self.path.clear();
            self.path.push(point);
        }
        self.state = ToolState::Active {
            start: point,
            current: point,
        };
    }

    /// Update the current interaction with a new pointer position.
    pub fn update(&mut self, point: Point) {
        if let ToolState::Active { current, .. } = &mut self.state {
            *current = point;
            if self.current_tool == ToolKind::Connector {
                // Skip sub-pixel jitter
                if self
                    .path
                    .last()
                    .is_none_or(|last| (point - *last).hypot() > 1.0)
                {
                    self.path.push(point);
                }
            }
        }
    }

    /// End the interaction and return what was drawn, if anything.
    pub fn end(&mut self, point: Point) -> Option<DrawOutput> {
        let ToolState::Active { start, .. } = self.state else {
            return None;
        };
        self.state = ToolState::Idle;
        let output = self.build_output(start, point);
        self.path.clear();
        output
    }

    /// Cancel the interaction without producing anything.
    pub fn cancel(&mut self) {
        self.state = ToolState::Idle;
        self.path.clear();
    }

    /// Check if a tool interaction is active.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ToolState::Active { .. })
    }

    /// The accumulated connector path so far.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Preview rectangle for the current drag (for rect-like tools).
    pub fn preview_rect(&self) -> Option<Rect> {
        match self.state {
            ToolState::Active { start, current } => {
                Some(Rect::from_points(start, current))
            }
            ToolState::Idle => None,
        }
    }

    fn build_output(&mut self, start: Point, end: Point) -> Option<DrawOutput> {
        let rect = Rect::from_points(start, end);
        match self.current_tool {
            ToolKind::Section => Some(DrawOutput::Section {
                x: rect.x0,
                y: rect.y0,
                width: rect.width(),
                height: rect.height(),
            }),
            ToolKind::Rect => Some(DrawOutput::Element(Element::rect(
                Point::new(rect.x0, rect.y0),
                rect.width(),
                rect.height(),
            ))),
            ToolKind::StickyNote => Some(DrawOutput::Element(Element::sticky_note(
                start,
                STICKY_NOTE_SIZE,
                STICKY_NOTE_SIZE,
                "",
                DEFAULT_STICKY_FONT_SIZE,
            ))),
            ToolKind::Text => Some(DrawOutput::Element(Element::text(
                start,
                "",
                DEFAULT_TEXT_FONT_SIZE,
            ))),
            ToolKind::Connector => {
                if self.path.last() != Some(&end) {
                    self.path.push(end);
                }
                if self.path.len() >= 2 {
                    Some(DrawOutput::Element(Element::connector(std::mem::take(
                        &mut self.path,
                    ))))
                } else {
                    None
                }
            }
            ToolKind::Select => None,
        }
    }
}
