//! Browser bindings for the landing page.

mod dom;
mod page;

use wasm_bindgen::prelude::*;

/// Entry point invoked by the wasm loader once the module instantiates.
///
/// Wiring failures land in the console; the static page stays usable.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document,
        None => return,
    };

    if let Err(error) = page::mount(&document) {
        web_sys::console::error_1(&JsValue::from_str(&format!(
            "spark-web initialization failed: {:#}",
            error
        )));
    }
}
