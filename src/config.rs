//! Page Configuration
//!
//! Optional JSON config embedded in the page:
//! `<script type="application/json" id="matchlines-config">{ ... }</script>`

use match_engine::GameConfig;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

pub const CONFIG_ELEMENT_ID: &str = "matchlines-config";

fn embedded_json() -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let script = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .dyn_into::<HtmlScriptElement>()
        .ok()?;
    script.text().ok()
}

/// Embedded config if present and valid, built-in defaults otherwise
pub fn load_config() -> GameConfig {
    let Some(json) = embedded_json() else {
        return GameConfig::default();
    };
    match GameConfig::from_json(&json) {
        Ok(config) => {
            log::info!("[CONFIG] loaded {} pairs from #{}", config.pairs.len(), CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::warn!("[CONFIG] {}; using defaults", e);
            GameConfig::default()
        }
    }
}
