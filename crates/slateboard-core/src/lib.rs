//! Slateboard Core Library
//!
//! Canvas state & containment engine for the Slateboard whiteboard:
//! the unified element/section store, section containment, the drawing and
//! resize operation lifecycle, and the text transform commit protocol.
//! Rendering, persistence and collaboration live outside this crate and
//! consume store snapshots.

pub mod board;
pub mod containment;
pub mod element;
pub mod error;
pub mod operation;
pub mod resize;
pub mod section;
pub mod store;
pub mod tools;

pub use board::{Board, Created};
pub use containment::{capture_elements_in_section, find_section_at_point};
pub use element::{Element, ElementId, ElementKind, ElementUpdate};
pub use error::{BoardError, BoardResult};
pub use operation::{Operation, OperationStatus, OperationTracker, DEFAULT_OPERATION_TIMEOUT};
pub use resize::{compute_text_resize, Corner, HorizontalEdge, ResizeAnchor, TextResize, VerticalEdge};
pub use section::{Section, SectionId, SectionUpdate};
pub use store::BoardStore;
pub use tools::{DrawOutput, ToolKind, ToolManager, ToolState};
