#![allow(warnings)]
//! Match Lines Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod surface;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::load_config();
    mount_to_body(move || view! { <App config=config /> });
}
