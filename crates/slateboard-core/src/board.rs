//! Runtime board facade: the surface the UI layer talks to.
//!
//! Bundles the store, the tool manager and the operation tracker, and wires
//! the event flow between them: pointer input drives the tool state machine,
//! completed interactions mutate the store, and structural changes trigger
//! containment recapture. The rendering layer reads snapshots from here and
//! dispatches pointer/handle events into here.

use crate::containment::capture_elements_in_section;
use crate::element::ElementId;
use crate::operation::{Operation, OperationStatus, OperationTracker};
use crate::resize::ResizeAnchor;
use crate::store::BoardStore;
use crate::tools::{DrawOutput, ToolKind, ToolManager};
use kurbo::Point;
use std::time::Instant;

/// Id of an object created by a completed interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Created {
    Element(ElementId),
    Section(crate::section::SectionId),
}

/// The live board: store plus interaction state.
///
/// Explicitly constructed and handed to consumers; isolated instances are
/// cheap, which is what the tests rely on.
#[derive(Debug, Clone)]
pub struct Board {
    /// The canonical canvas state.
    pub store: BoardStore,
    /// Tool selection and in-progress drawing.
    pub tools: ToolManager,
    /// Operation lifecycle and watchdog.
    pub operations: OperationTracker,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with an empty store.
    pub fn new() -> Self {
        Self {
            store: BoardStore::new(),
            tools: ToolManager::new(),
            operations: OperationTracker::new(),
        }
    }

    /// Create a board around an existing store (e.g. a loaded snapshot).
    pub fn with_store(store: BoardStore) -> Self {
        Self {
            store,
            tools: ToolManager::new(),
            operations: OperationTracker::new(),
        }
    }

    /// Set the current tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tools.set_tool(tool);
    }

    /// Pointer pressed on the canvas. Drawing tools start an operation;
    /// the select tool does not (selection never implies an operation).
    pub fn pointer_pressed(&mut self, point: Point) {
        self.tools.begin(point);
        if self.tools.current_tool != ToolKind::Select {
            self.operations.start_operation(Operation::Drawing {
                tool: self.tools.current_tool,
            });
        }
    }

    /// Pointer moved while pressed.
    pub fn pointer_moved(&mut self, point: Point) {
        self.tools.update(point);
    }

    /// Pointer released: commit whatever the drag drew and return to idle.
    ///
    /// A drawn section is created and immediately captures the elements
    /// inside its bounds; a drawn element is added to the store. Both go
    /// through the undo history as a single step.
    pub fn pointer_released(&mut self, point: Point) -> Option<Created> {
        let output = self.tools.end(point);
        self.operations.complete_operation();
        match output? {
            DrawOutput::Element(element) => {
                self.store.push_undo();
                match self.store.add_element(element) {
                    Ok(id) => Some(Created::Element(id)),
                    Err(e) => {
                        log::warn!("pointer_released: dropping drawn element: {e}");
                        None
                    }
                }
            }
            DrawOutput::Section {
                x,
                y,
                width,
                height,
            } => {
                self.store.push_undo();
                match self.store.create_section(x, y, width, height, None) {
                    Ok(id) => {
                        // Section creation is a structural event: capture now
                        let _ = capture_elements_in_section(&mut self.store, id);
                        Some(Created::Section(id))
                    }
                    Err(e) => {
                        log::warn!("pointer_released: dropping drawn section: {e}");
                        None
                    }
                }
            }
        }
    }

    /// Grab a transform handle on an element, entering the resizing state.
    pub fn begin_resize(&mut self, element: ElementId, anchor: ResizeAnchor) {
        self.operations
            .start_operation(Operation::Resizing { element, anchor });
    }

    /// Live preview for the in-flight resize; committed state is untouched.
    pub fn resize_live(&self, sx: f64, sy: f64) -> Option<crate::resize::TextResize> {
        match self.operations.get_operation_status() {
            OperationStatus::Active {
                operation: Operation::Resizing { element, anchor },
                ..
            } => self.store.resize_text_live(element, anchor, sx, sy),
            _ => None,
        }
    }

    /// Release the transform handle: commit the final scale factors as one
    /// atomic store update and return to idle.
    pub fn end_resize(&mut self, sx: f64, sy: f64, skip_history: bool) -> bool {
        let Some(Operation::Resizing { element, anchor }) = self.operations.complete_operation()
        else {
            return false;
        };
        let Some(resize) = self.store.resize_text_live(element, anchor, sx, sy) else {
            return false;
        };
        self.store.commit_text_resize(element, resize, skip_history)
    }

    /// Enter in-place text editing for an element.
    pub fn begin_text_edit(&mut self, element: ElementId) {
        self.operations
            .start_operation(Operation::TextEditing { element });
    }

    /// Leave text editing, committing the new content.
    pub fn end_text_edit(&mut self, content: Option<String>) {
        let Some(Operation::TextEditing { element }) = self.operations.complete_operation() else {
            return;
        };
        if let Some(content) = content {
            self.store.update_element(
                element,
                crate::element::ElementUpdate {
                    content: Some(content),
                    ..Default::default()
                },
            );
        }
    }

    /// Whether a drawing/resize/editing operation is in flight.
    pub fn is_operation_active(&self) -> bool {
        self.operations.is_operation_active()
    }

    /// Status of the current operation.
    pub fn get_operation_status(&self) -> OperationStatus {
        self.operations.get_operation_status()
    }

    /// Event-loop tick: run the watchdog and discard any drag the
    /// force-terminated operation left behind, so a lost release event can
    /// never freeze further interaction.
    pub fn tick(&mut self, now: Instant) {
        if let Some(recovered) = self.operations.check_watchdog(now) {
            if matches!(recovered, Operation::Drawing { .. }) && self.tools.is_active() {
                self.tools.cancel();
            }
        }
    }
}
