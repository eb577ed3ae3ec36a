mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod services;

pub use app::App;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    log::info!("{} starting", config::APP_CONFIG.display_name);
    leptos::mount_to_body(App);
}
