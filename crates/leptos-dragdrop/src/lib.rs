//! Leptos DragDrop Utilities
//!
//! Pointer (HTML5 drag events) and touch input reduced to a single
//! [`Gesture`] stream: start on an item, optional moves, end over a
//! target or cancel. Items and targets are found through data attributes,
//! so the same markup serves both modalities.

use leptos::prelude::*;
use web_sys::DragEvent;

mod touch;

pub use touch::bind_global_touch;

/// Attribute carrying a draggable item's name
pub const ITEM_ATTR: &str = "data-item";
/// Attribute carrying a drop target's name
pub const TARGET_ATTR: &str = "data-target";

/// One step of a drag, whatever the input device
#[derive(Clone, Debug, PartialEq)]
pub enum Gesture {
    Start { item: String },
    /// Viewport position of the finger (touch only)
    Move { x: f64, y: f64 },
    End { target: String },
    /// Released away from any target
    Cancel,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Item currently being dragged
    pub dragging_read: ReadSignal<Option<String>>,
    pub dragging_write: WriteSignal<Option<String>>,
    /// Target the pointer is hovering (pointer path only)
    pub over_target_read: ReadSignal<Option<String>>,
    pub over_target_write: WriteSignal<Option<String>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<String>);
    let (over_target_read, over_target_write) = signal(None::<String>);
    DndSignals {
        dragging_read,
        dragging_write,
        over_target_read,
        over_target_write,
    }
}

impl DndSignals {
    pub fn is_dragging(&self, item: &str) -> bool {
        self.dragging_read.with(|d| d.as_deref() == Some(item))
    }

    pub fn is_over(&self, target: &str) -> bool {
        self.over_target_read.with(|t| t.as_deref() == Some(target))
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.over_target_write.set(None);
}

/// dragstart on an item
pub fn make_on_dragstart(
    dnd: DndSignals,
    item: String,
    on_gesture: Callback<Gesture>,
) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        // Firefox will not start a drag without payload
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", &item);
        }
        dnd.dragging_write.set(Some(item.clone()));
        on_gesture.run(Gesture::Start { item: item.clone() });
    }
}

/// dragover on a target; default handling must be suppressed or the
/// browser refuses the drop
pub fn make_on_dragover(dnd: DndSignals, target: String) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        let already_over = dnd.over_target_read.with_untracked(|t| t.as_deref() == Some(target.as_str()));
        if !already_over {
            dnd.over_target_write.set(Some(target.clone()));
        }
    }
}

pub fn make_on_dragleave(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        dnd.over_target_write.set(None);
    }
}

/// drop on a target
pub fn make_on_drop(
    dnd: DndSignals,
    target: String,
    on_gesture: Callback<Gesture>,
) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        end_drag(&dnd);
        on_gesture.run(Gesture::End { target: target.clone() });
    }
}

/// dragend on an item; fires after `drop`, so only a drag that never
/// reached a target still has state to cancel
pub fn make_on_dragend(dnd: DndSignals, on_gesture: Callback<Gesture>) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            end_drag(&dnd);
            on_gesture.run(Gesture::Cancel);
        }
    }
}
