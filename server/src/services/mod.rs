//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on protocol translation and auth plumbing.

pub mod assignments;
pub mod classes;
pub mod password;
pub mod session;
pub mod submissions;
pub mod users;
