//! # edulearn
//!
//! Leptos + WASM frontend for the EduLearn study portal.
//!
//! The crate centers on the session gate: route guards that decide, from the
//! authentication collaborator's current state, whether a view renders, waits
//! behind a loading indicator, or redirects. Pages and components around it
//! are the sign-in, register, and sign-out flows plus the protected shells
//! those flows lead to.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
