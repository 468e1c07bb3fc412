// lib.rs - Root module for the smartshop library
//
// The core (model, filter engine, session state, recommendation engine)
// compiles with no features enabled; the ssr and hydrate features add the
// server and the WASM client on top.

pub mod fixtures;
pub mod web_app;

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: attach the client to server-rendered HTML.
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(crate::web_app::App);
        }
    }
}
