mod app;
mod logging;
mod pages;
pub mod program;
pub mod progress;
pub mod storage;
pub mod types;

use wasm_bindgen::prelude::*;
use leptos::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    mount_to_body(app::App);
}
