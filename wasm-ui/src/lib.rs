//! Web UI for inspections-rs
//!
//! A Yew-based page that loads the inspection data once and lets the user
//! search, filter, sort and cap the list of inspection cards.

mod app;
mod components;
pub mod fetch;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
