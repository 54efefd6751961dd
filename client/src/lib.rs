//! # client
//!
//! Leptos + WASM front-end for the SmartDine AI landing page. Replaces the
//! React shell with a Rust-native UI layer: a marketing shell that owns
//! the conversation-session state and conditionally mounts the external
//! voice overlay.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// WASM entry point — hydrate the server-rendered shell in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
