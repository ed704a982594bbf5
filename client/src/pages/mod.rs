//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is applied by the router, not here.

pub mod admin;
pub mod dashboard;
pub mod login;
