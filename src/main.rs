mod app;
mod components;
mod config;
mod error;
mod logging;
mod pages;
mod views;

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use app::App;
use config::ShellConfig;

fn main() {
    let (config, config_error) = ShellConfig::bundled();
    if let Err(e) = logging::init(&config.log_filter) {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    }

    if let Some(e) = config_error {
        tracing::warn!("{}; using default shell settings", e);
    }
    tracing::info!("Starting menu shell on view {:?}", config.default_view);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
