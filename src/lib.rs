//! Pujante - learning tracks for the agribusiness
//!
//! Web front end of the Pujante platform: track catalog, track creation and
//! the lesson video player, built with Leptos and WebAssembly. All data comes
//! from the Pujante API, reached through the server's `/api` proxy.

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
