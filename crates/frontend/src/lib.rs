pub mod alarms;
pub mod app;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Installs console logging and the panic hook, then mounts the dashboard.
#[wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
