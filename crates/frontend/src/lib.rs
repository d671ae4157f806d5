pub mod app;
pub mod dashboards;
pub mod shared;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = shared::config::load_client_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(shared::config::log_level(config.log_level));
    console_error_panic_hook::set_once();

    log::debug!("API base: {}", config.api_base);
    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
