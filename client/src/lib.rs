//! # client
//!
//! Leptos + WASM frontend for the MENTORA mentorship game: the landing page
//! with login/profile modals and the dashboard with tabbed navigation, the
//! AI coach chat, internship cards, and communication-training scenarios.
//!
//! State machines live in [`state`] as plain structs with pure transitions
//! that emit [`state::effect::Effect`] values. Components hold those structs
//! in `RwSignal` contexts and [`util::effects`] applies the emitted effects
//! to the page.

pub mod app;
pub mod components;
pub mod consts;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
