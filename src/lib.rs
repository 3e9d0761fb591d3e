// lib.rs - Root module for the storefront library
//
// The library is compiled twice: natively for the SSR server binary and
// to WASM (cdylib) for client-side hydration.

/// Reusable sample catalogs for tests
pub mod fixtures;

/// The storefront web application
pub mod web_app;

/// WASM entry point: hydrates the server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
