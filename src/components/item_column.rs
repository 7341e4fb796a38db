//! Item Column
//!
//! Left column of draggable images. Touch is handled document-wide by
//! `bind_global_touch`; only the pointer handlers live here.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart, Gesture};
use match_engine::BoardItem;

use crate::context::GameContext;

#[component]
pub fn ItemColumn(on_gesture: Callback<Gesture>) -> impl IntoView {
    let ctx = use_context::<GameContext>().expect("GameContext should be provided");

    let items = move || {
        ctx.session.with(|s| {
            let generation = s.board().generation;
            s.board()
                .items
                .iter()
                .map(|item| (generation, item.clone()))
                .collect::<Vec<(u32, BoardItem)>>()
        })
    };

    view! {
        <div id="programas" class="column">
            <For
                each=items
                // Generation in the key: a new board rebuilds every element
                key=|(generation, item)| (*generation, item.name.clone())
                children=move |(_, item)| {
                    let name = item.name.clone();
                    let on_dragstart = make_on_dragstart(ctx.dnd, name.clone(), on_gesture);
                    let on_dragend = make_on_dragend(ctx.dnd, on_gesture);

                    let item_class = {
                        let name = name.clone();
                        move || {
                            let mut c = String::from("match-item");
                            if ctx.dnd.is_dragging(&name) { c.push_str(" dragging"); }
                            if ctx.session.with(|s| s.is_item_connected(&name)) { c.push_str(" connected"); }
                            c
                        }
                    };

                    view! {
                        <img
                            class=item_class
                            src=item.image
                            alt=name.clone()
                            draggable="true"
                            data-item=name
                            style=format!("margin-top: {}px;", item.offset_px)
                            on:dragstart=on_dragstart
                            on:dragend=on_dragend
                        />
                    }
                }
            />
        </div>
    }
}
