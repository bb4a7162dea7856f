//! Client-side session and form state.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `auth_flow`, `form`) so the route
//! guard and the auth pages depend only on the small models they use.

pub mod auth_flow;
pub mod form;
pub mod session;
