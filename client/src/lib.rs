//! # client
//!
//! Leptos + WASM frontend for the rideshare app: trip search, trip cards with
//! role-based actions, and the REST client for the trips API.
//!
//! The `ssr` feature renders pages on the server; the `hydrate` feature
//! builds the browser bundle that takes over event handling.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
