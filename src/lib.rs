//! # skillsync-client
//!
//! Leptos + WASM frontend for the SkillSync Academy landing experience: the
//! animated hero, the combined sign-in/sign-up panel, and the hand-off to the
//! hackathons area once a session exists.
//!
//! Authentication itself (tokens, credentials, sessions) lives in the backend;
//! this crate only calls its REST endpoints and renders the outcome.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
