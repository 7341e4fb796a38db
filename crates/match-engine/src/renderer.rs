//! Line Renderer
//!
//! Strokes connector lines from the live layout reported by a
//! [`RenderSurface`]. Positions are never cached: every draw re-measures.

use crate::config::{GameConfig, DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH};
use crate::connection::Connection;
use crate::geometry::{connector_anchors, Point};
use crate::surface::{ElementRef, RenderSurface};

/// Stroke color and width for connector lines
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_LINE_COLOR.to_string(),
            width: DEFAULT_LINE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LineRenderer {
    style: LineStyle,
}

impl LineRenderer {
    pub fn new(style: LineStyle) -> Self {
        Self { style }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(LineStyle {
            color: config.line_color.clone(),
            width: config.line_width,
        })
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    /// Stroke one segment in surface-local coordinates
    pub fn draw_line<S: RenderSurface + ?Sized>(&self, surface: &mut S, start: Point, end: Point) {
        surface.stroke_line(start, end, &self.style);
    }

    pub fn clear_surface<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
    }

    /// Draw the line for one connection. Returns false when either end
    /// (or the container) is not mounted, in which case nothing is drawn.
    pub fn draw_connection<S: RenderSurface + ?Sized>(&self, surface: &mut S, connection: &Connection) -> bool {
        let Some(container) = surface.container_rect() else {
            return false;
        };
        let left = surface.element_rect(ElementRef::Item(&connection.left));
        let right = surface.element_rect(ElementRef::Slot(&connection.right));
        match (left, right) {
            (Some(left), Some(right)) => {
                let (start, end) = connector_anchors(&left, &right, &container);
                self.draw_line(surface, start, end);
                true
            }
            _ => {
                log::debug!("[LINES] skip {} -> {}: element not mounted", connection.left, connection.right);
                false
            }
        }
    }

    /// Stroke every connection from current layout; returns segments drawn
    pub fn redraw_all<'a, S, I>(&self, surface: &mut S, connections: I) -> usize
    where
        S: RenderSurface + ?Sized,
        I: IntoIterator<Item = &'a Connection>,
    {
        connections
            .into_iter()
            .filter(|c| self.draw_connection(surface, c))
            .count()
    }

    /// Match the surface to the container's box, then redraw. Resizing
    /// wipes the surface, so the redraw must follow immediately.
    pub fn sync_size<'a, S, I>(&self, surface: &mut S, connections: I) -> usize
    where
        S: RenderSurface + ?Sized,
        I: IntoIterator<Item = &'a Connection>,
    {
        let Some(container) = surface.container_rect() else {
            return 0;
        };
        surface.resize(container.width, container.height);
        self.clear_surface(surface);
        self.redraw_all(surface, connections)
    }
}
