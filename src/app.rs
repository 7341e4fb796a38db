//! Match Lines App
//!
//! Two columns over a shared overlay canvas, plus the check/retry controls.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_touch, create_dnd_signals, Gesture};
use match_engine::{GameConfig, Session};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::{ItemColumn, ResultPanel, SlotColumn};
use crate::context::GameContext;

/// Keep the overlay matched to the container on load and every resize
fn bind_window_resync(ctx: GameContext) {
    let on_resize = Closure::<dyn FnMut()>::new(move || ctx.sync_surface());
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        let _ = win.add_event_listener_with_callback("load", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}

#[component]
pub fn App(config: GameConfig) -> impl IntoView {
    let session = Session::new(config).unwrap_or_else(|e| {
        log::warn!("[APP] {}; falling back to the built-in catalog", e);
        Session::default()
    });
    let ctx = GameContext::new(session, create_dnd_signals());
    provide_context(ctx);
    ctx.new_board();

    let on_gesture = Callback::new(move |gesture: Gesture| ctx.handle_gesture(gesture));
    bind_global_touch(ctx.dnd, on_gesture);
    bind_window_resync(ctx);

    // Size the overlay once the canvas is mounted
    Effect::new(move |_| {
        if ctx.canvas_ref.get().is_some() && ctx.container_ref.get().is_some() {
            ctx.sync_surface();
        }
    });

    view! {
        <div class="game" node_ref=ctx.container_ref style="position: relative;">
            <ItemColumn on_gesture=on_gesture />
            <SlotColumn on_gesture=on_gesture />
            <canvas
                id="canvas"
                node_ref=ctx.canvas_ref
                style="position: absolute; left: 0; top: 0; pointer-events: none;"
            />
        </div>
        <ResultPanel />
    }
}
