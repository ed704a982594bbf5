//! Networking modules for the auth HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the raw HTTP calls, `login` orchestrates sign-in and
//! sign-out over an [`login::Authenticator`], and `types` defines the wire
//! schema shared with the server.

pub mod api;
pub mod login;
pub mod types;
