//! # client
//!
//! Leptos + WASM admin console for study material: topics with version
//! history, the category tree, content templates, homework and weekly exams.
//!
//! Pure logic lives in `desk`; this crate holds pages, components, the
//! per-screen state structs and the `gloo-net` API wrappers.

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
