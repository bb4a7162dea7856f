//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the auth form while reading shared state
//! (the session authority) from Leptos context providers.

pub mod auth_form;
pub mod layout;
pub mod route_guard;
