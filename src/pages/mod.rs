//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages assume the route guard has already
//! authorized the visitor.

pub mod contact;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod logout;
pub mod register;
