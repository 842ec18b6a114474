//! # client
//!
//! Leptos + WASM frontend for the Blue Carbon Registry.
//!
//! This crate contains the app shell, the auth and dashboard pages, the
//! reactive mirror of the session, and the browser adapters (`localStorage`,
//! timers) that back the `session` crate's storage and delay seams.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
