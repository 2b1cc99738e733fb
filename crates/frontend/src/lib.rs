pub mod app;
pub mod blog;
pub mod landing;
pub mod pages;
pub mod questionnaire;
pub mod routes;
pub mod shared;
pub mod support;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
