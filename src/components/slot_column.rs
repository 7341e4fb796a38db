//! Slot Column
//!
//! Right column of drop targets, one per right-hand catalog name.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragleave, make_on_dragover, make_on_drop, Gesture};
use match_engine::DropSlot;

use crate::context::GameContext;

#[component]
pub fn SlotColumn(on_gesture: Callback<Gesture>) -> impl IntoView {
    let ctx = use_context::<GameContext>().expect("GameContext should be provided");

    let slots = move || {
        ctx.session.with(|s| {
            let generation = s.board().generation;
            s.board()
                .slots
                .iter()
                .map(|slot| (generation, slot.clone()))
                .collect::<Vec<(u32, DropSlot)>>()
        })
    };

    view! {
        <div id="objetos" class="column">
            <For
                each=slots
                key=|(generation, slot)| (*generation, slot.name.clone())
                children=move |(_, slot)| {
                    let name = slot.name.clone();
                    let on_dragover = make_on_dragover(ctx.dnd, name.clone());
                    let on_dragleave = make_on_dragleave(ctx.dnd);
                    let on_drop = make_on_drop(ctx.dnd, name.clone(), on_gesture);

                    let slot_class = {
                        let name = name.clone();
                        move || {
                            let mut c = String::from("dropzone");
                            if ctx.dnd.is_over(&name) { c.push_str(" active"); }
                            if ctx.session.with(|s| s.is_slot_connected(&name)) { c.push_str(" connected"); }
                            c
                        }
                    };

                    let target = name.clone();
                    view! {
                        <div
                            class=slot_class
                            data-target=target
                            style=format!("margin-top: {}px;", slot.offset_px)
                            on:dragover=on_dragover
                            on:dragleave=on_dragleave
                            on:drop=on_drop
                        >
                            <img src=slot.image alt=name style="pointer-events: none;" />
                        </div>
                    }
                }
            />
        </div>
    }
}
