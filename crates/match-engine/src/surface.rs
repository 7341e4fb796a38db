//! Rendering Surface
//!
//! The one capability the engine needs from its host: measuring live
//! element boxes and stroking lines on an overlay.

use crate::geometry::{Point, Rect};
use crate::renderer::LineStyle;

/// Which board element to measure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRef<'a> {
    /// Draggable item in the left column
    Item(&'a str),
    /// Drop slot in the right column
    Slot(&'a str),
}

/// Host-provided drawing surface layered over the game container.
///
/// Rects are in viewport coordinates; stroke coordinates are local to
/// the surface, which always covers the container.
pub trait RenderSurface {
    /// Current bounding box of the game container
    fn container_rect(&self) -> Option<Rect>;

    /// Current bounding box of a mounted element, `None` if it is gone
    fn element_rect(&self, element: ElementRef<'_>) -> Option<Rect>;

    /// Set the surface's pixel size. Resizing discards everything drawn.
    fn resize(&mut self, width: f64, height: f64);

    fn clear(&mut self);

    fn stroke_line(&mut self, from: Point, to: Point, style: &LineStyle);
}
