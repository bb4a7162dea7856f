//! Networking modules for the REST auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and owns the [`api::AuthApi`] seam, and `types`
//! defines the JSON wire schema.

pub mod api;
#[cfg(test)]
pub(crate) mod mock_api;
pub mod types;
