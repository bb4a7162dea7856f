//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, token
//! encoding, route table) from page and component logic to improve reuse and
//! testability.

pub mod route;
pub mod storage;
pub mod token;
