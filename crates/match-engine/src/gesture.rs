//! Drag Controller
//!
//! One state machine for every input modality. Pointer and touch adapters
//! both feed `begin` / `track` / `finish`; only touch reports movement.

use crate::geometry::Point;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        item: String,
        /// Last reported pointer position (viewport), touch only
        pointer: Option<Point>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn active_item(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { item, .. } => Some(item),
            DragState::Idle => None,
        }
    }

    pub fn pointer(&self) -> Option<Point> {
        match &self.state {
            DragState::Dragging { pointer, .. } => *pointer,
            DragState::Idle => None,
        }
    }

    /// Gesture started on an item. A new start replaces any stale gesture.
    pub fn begin(&mut self, item: &str) {
        self.state = DragState::Dragging {
            item: item.to_string(),
            pointer: None,
        };
    }

    /// Pointer moved; ignored unless a gesture is in progress
    pub fn track(&mut self, point: Point) {
        if let DragState::Dragging { pointer, .. } = &mut self.state {
            *pointer = Some(point);
        }
    }

    /// Gesture ended. Always returns to idle; yields the dragged item when
    /// the gesture ended over a target.
    pub fn finish(&mut self, target: Option<&str>) -> Option<String> {
        let state = std::mem::take(&mut self.state);
        match (state, target) {
            (DragState::Dragging { item, .. }, Some(_)) => Some(item),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
