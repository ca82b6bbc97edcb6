//! # timeline-client
//!
//! Leptos + WASM frontend for the Dr. Arthur Frost content timeline.
//!
//! This crate contains the page shell, the about and timeline components,
//! the wire types for the publisher endpoint, and the single-track audio
//! player. The `ssr` feature builds the server-render half used by the host;
//! the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
