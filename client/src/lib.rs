//! ClassTrack browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders these components through `leptos_axum`; the browser
//! hydrates them from the WASM bundle. Route protection runs only after
//! hydration, because the session lives in the browser's `localStorage`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
