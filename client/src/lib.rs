//! # devset-client
//!
//! Leptos + WASM frontend for the Devset career guidance site.
//!
//! This crate contains pages, components, per-view state, the session/auth
//! lifecycle, and the REST client for the external careers API. The `devset`
//! host binary renders it server-side (`ssr`); the browser bundle hydrates it
//! (`hydrate`).

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
