//! # taskdeck-client
//!
//! Leptos + WASM frontend for the taskdeck task manager.
//!
//! This crate contains pages, components, session and fetch state, the REST
//! client for the task API, and the route guard / polling helpers the pages
//! are built on. The `taskdeck` host renders it with the `ssr` feature; the
//! browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
