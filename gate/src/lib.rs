//! Shared access-control core for the ClassTrack client and server.
//!
//! This crate owns the closed role set, the view/route table, the session
//! store service and the route guard decision. It performs no I/O of its own:
//! persistence goes through a [`StorageBackend`] supplied by the caller, and
//! the guard is a pure function over a [`SessionState`] snapshot.

pub mod guard;
pub mod role;
pub mod route;
pub mod session;

pub use guard::{Decision, Denial, GuardState, check_route, decide, permits};
pub use role::{InvalidRoleError, NavItem, Role, RoleProfile};
pub use route::{Access, Route};
pub use session::{
    InvalidSession, MemoryBackend, ROLE_KEY, Session, SessionError, SessionState, SessionStore, StorageBackend,
    StoreError, TOKEN_KEY,
};
