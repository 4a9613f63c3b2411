//! EduLaunch - marketing site for schools
//!
//! Server-rendered with Leptos on axum and hydrated in the browser as
//! WebAssembly. Interaction logic lives in `core`; `ui` applies it to the DOM.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
