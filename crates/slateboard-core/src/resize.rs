//! Transform-handle resize protocol for text-like elements.
//!
//! Live dragging only previews; the semantic change (new width, height and
//! font size) is computed once at commit time from the accumulated per-axis
//! scale factors and the identity of the active handle.

use crate::element::LINE_HEIGHT_FACTOR;
use serde::{Deserialize, Serialize};

/// Corner handle positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Vertical edge handles (top/bottom center).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

/// Horizontal edge handles (left/right middle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizontalEdge {
    Left,
    Right,
}

/// The transform handle active during a resize drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeAnchor {
    /// Corner handle: scales font by the geometric mean of both axes.
    Corner(Corner),
    /// Top/bottom-center handle: scales font by the vertical factor only.
    VerticalEdge(VerticalEdge),
    /// Left/right-middle handle: scales width only, font untouched.
    HorizontalEdge(HorizontalEdge),
}

/// The committed result of a text resize: a single atomic triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextResize {
    /// New font size, rounded to the nearest integer point.
    pub font_size: f64,
    pub width: f64,
    pub height: f64,
}

/// Clamp a scale factor to something usable. Non-finite or non-positive
/// factors (degenerate drags, division by a zero extent) fall back to 1.0.
fn sanitize_scale(s: f64) -> f64 {
    if s.is_finite() && s > 0.0 {
        s
    } else {
        log::warn!("resize: ignoring invalid scale factor {s}");
        1.0
    }
}

/// Height of a text block with the given font size and line count.
fn text_height(font_size: f64, line_count: usize) -> f64 {
    line_count.max(1) as f64 * font_size * LINE_HEIGHT_FACTOR
}

/// Compute the committed size for a text-like element.
///
/// Pure function of the previous semantic size, the active anchor and the
/// per-axis scale factors. Height is recomputed from the new font size so the
/// block stays consistent with line wrapping; `line_count` is the element's
/// current number of text lines.
pub fn compute_text_resize(
    font_size: f64,
    width: f64,
    line_count: usize,
    anchor: ResizeAnchor,
    sx: f64,
    sy: f64,
) -> TextResize {
    let sx = sanitize_scale(sx);
    let sy = sanitize_scale(sy);

    let (new_font, new_width) = match anchor {
        ResizeAnchor::Corner(_) => {
            let factor = (sx * sy).sqrt();
            ((font_size * factor).round(), width * sx)
        }
        ResizeAnchor::VerticalEdge(_) => ((font_size * sy).round(), width),
        ResizeAnchor::HorizontalEdge(_) => (font_size.round(), width * sx),
    };

    let new_font = new_font.max(0.0);
    let new_width = new_width.max(0.0);

    TextResize {
        font_size: new_font,
        width: new_width,
        height: text_height(new_font, line_count),
    }
}
