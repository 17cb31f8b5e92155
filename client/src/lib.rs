//! # kiosk-client
//!
//! Leptos + WASM front end for the kiosk shop: login and registration, the
//! product dashboard, cart, wallet, transaction history and user
//! administration. All data lives behind the kiosk REST API; this crate only
//! renders it and keeps the browser session.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
