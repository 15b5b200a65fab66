// lib.rs - Root module for the price_tracker library
//
// The tracker logic and fixture tables build with no features enabled.
// The `ssr` and `hydrate` features add the Leptos UI on top.

/// Compiled-in suppliers, products and exchange rates
pub mod fixtures;

pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: hydrates the server-rendered page
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
