//! Touch adapter
//!
//! Document-level, non-passive touch listeners. The element under the
//! finger is resolved with `elementFromPoint`, the dragged element follows
//! the finger with fixed positioning and is restored on release.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, HtmlElement, Touch, TouchEvent};

use crate::{end_drag, DndSignals, Gesture, ITEM_ATTR, TARGET_ATTR};

/// Inline properties overridden while an element follows the finger
const FOLLOW_PROPS: [&str; 5] = ["position", "left", "top", "z-index", "pointer-events"];

/// Closest ancestor-or-self under the touch point carrying `attr`
fn element_under(doc: &Document, touch: &Touch, attr: &str) -> Option<(Element, String)> {
    let hit = doc.element_from_point(touch.client_x() as f32, touch.client_y() as f32)?;
    let found = hit.closest(&format!("[{}]", attr)).ok().flatten()?;
    let name = found.get_attribute(attr)?;
    Some((found, name))
}

fn follow_finger(el: &HtmlElement, touch: &Touch) {
    let style = el.style();
    let left = touch.client_x() as f64 - el.offset_width() as f64 / 2.0;
    let top = touch.client_y() as f64 - el.offset_height() as f64 / 2.0;
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("left", &format!("{}px", left));
    let _ = style.set_property("top", &format!("{}px", top));
    let _ = style.set_property("z-index", "10");
    // Keep the dragged element from shadowing the target under the finger
    let _ = style.set_property("pointer-events", "none");
}

fn restore(el: &HtmlElement) {
    let style = el.style();
    for prop in FOLLOW_PROPS {
        let _ = style.remove_property(prop);
    }
}

fn add_listener(doc: &Document, event: &str, cb: &Closure<dyn FnMut(TouchEvent)>) {
    let opts = AddEventListenerOptions::new();
    opts.set_passive(false);
    let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    );
}

/// Bind touchstart/touchmove/touchend on the document.
///
/// Touches that start outside an item, or end outside a target, change
/// nothing beyond restoring the dragged element.
pub fn bind_global_touch(dnd: DndSignals, on_gesture: Callback<Gesture>) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let active: Rc<RefCell<Option<HtmlElement>>> = Rc::new(RefCell::new(None));

    let on_touchstart = {
        let doc = doc.clone();
        let active = active.clone();
        Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
            let touches = ev.touches();
            if touches.length() != 1 {
                return;
            }
            let Some(touch) = touches.item(0) else { return };
            let Some((el, item)) = element_under(&doc, &touch, ITEM_ATTR) else {
                return;
            };
            ev.prevent_default();
            log::debug!("[TOUCH] start on {}", item);
            *active.borrow_mut() = el.dyn_into::<HtmlElement>().ok();
            dnd.dragging_write.set(Some(item.clone()));
            on_gesture.run(Gesture::Start { item });
        })
    };

    let on_touchmove = {
        let active = active.clone();
        Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
            let guard = active.borrow();
            let Some(el) = guard.as_ref() else { return };
            ev.prevent_default();
            if let Some(touch) = ev.touches().item(0) {
                follow_finger(el, &touch);
                on_gesture.run(Gesture::Move {
                    x: touch.client_x() as f64,
                    y: touch.client_y() as f64,
                });
            }
        })
    };

    let on_touchend = {
        let doc = doc.clone();
        let active = active.clone();
        Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
            let Some(el) = active.borrow_mut().take() else { return };
            ev.prevent_default();

            let target = ev
                .changed_touches()
                .item(0)
                .and_then(|touch| element_under(&doc, &touch, TARGET_ATTR))
                .map(|(_, name)| name);

            restore(&el);
            end_drag(&dnd);
            match target {
                Some(target) => on_gesture.run(Gesture::End { target }),
                None => {
                    log::debug!("[TOUCH] released outside any target");
                    on_gesture.run(Gesture::Cancel);
                }
            }
        })
    };

    let on_touchcancel = Closure::<dyn FnMut(TouchEvent)>::new(move |_ev: TouchEvent| {
        if let Some(el) = active.borrow_mut().take() {
            restore(&el);
            end_drag(&dnd);
            on_gesture.run(Gesture::Cancel);
        }
    });

    add_listener(&doc, "touchstart", &on_touchstart);
    add_listener(&doc, "touchmove", &on_touchmove);
    add_listener(&doc, "touchend", &on_touchend);
    add_listener(&doc, "touchcancel", &on_touchcancel);

    on_touchstart.forget();
    on_touchmove.forget();
    on_touchend.forget();
    on_touchcancel.forget();
}
