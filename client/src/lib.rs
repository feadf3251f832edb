//! # client
//!
//! Leptos + WASM frontend for the LIMS enterprise portal sign-in flow.
//!
//! This crate contains the login and signup pages, the forgot-password
//! modal, the form state machines behind them, and the static region
//! dataset used by the signup form. Form rules live in `state` as plain
//! structs so they are testable without a browser.

pub mod app;
pub mod components;
pub mod consts;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating {}", consts::BRAND_NAME);
    leptos::mount::hydrate_body(app::App);
}
