//! # receipt-portal
//!
//! Leptos + WASM client for the receipt portal. Visitors sign in against the
//! REST API, which issues an access/refresh token pair; the pages behind the
//! route guard (home, dashboard, contact) are only rendered for a valid
//! session.
//!
//! The session core (`util::storage`, `util::token`, `state::session`,
//! `state::auth_flow`) is plain Rust and unit-tested natively. Browser glue is
//! gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
