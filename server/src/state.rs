//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool and the parsed server configuration. There is no
//! in-memory session table: tokens live in Postgres so every replica sees the
//! same logins.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServerConfig;

/// Shared application state. Clone is required by Axum; the pool is a handle
/// and the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, config: ServerConfig) -> Self {
        Self { pool, config: Arc::new(config) }
    }

    /// Lifetime applied to newly issued session tokens.
    #[must_use]
    pub fn session_ttl_minutes(&self) -> i32 {
        self.config.session_ttl_minutes
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
