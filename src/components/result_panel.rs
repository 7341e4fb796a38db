//! Result Panel
//!
//! Check button, verdict message and the retry control revealed on failure.

use leptos::prelude::*;

use crate::context::GameContext;

#[component]
pub fn ResultPanel() -> impl IntoView {
    let ctx = use_context::<GameContext>().expect("GameContext should be provided");

    let message = move || ctx.session.with(|s| s.result_message().to_string());
    let retry_display = move || {
        if ctx.session.with(|s| s.retry_visible()) { "inline-block" } else { "none" }
    };

    view! {
        <div class="controls">
            <button id="check" on:click=move |_| ctx.check()>"Comprobar"</button>
            <button id="retry" style:display=retry_display on:click=move |_| ctx.new_board()>
                "Reintentar"
            </button>
            <p id="result">{message}</p>
        </div>
    }
}
