//! # client
//!
//! Leptos + WASM front-end for the Habitat real-estate marketplace.
//!
//! This crate contains the locale-prefixed route tree, the role-gated layouts
//! that wrap protected pages, the app and category stores, and the HTTP
//! session source the guards consult. Access decisions themselves live in the
//! `access` crate; the store container lives in `store`.

pub mod app;
pub mod components;
pub mod layouts;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A logger may already be installed after a hot reload.
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating habitat client");
    leptos::mount::hydrate_body(app::App);
}
