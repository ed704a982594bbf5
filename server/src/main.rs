mod config;
mod db;
mod routes;
mod services;
mod state;

use std::time::Duration;

use tracing_subscriber::EnvFilter;

/// Interval between sweeps of expired session rows.
const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real environments set variables directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    if config.seed_demo_users {
        match services::users::seed_demo_users(&pool).await {
            Ok(created) => tracing::info!(created, "demo users ready"),
            Err(e) => tracing::warn!(error = %e, "demo user seeding failed"),
        }
    }

    let _purge = services::session::spawn_purge_task(pool.clone(), SESSION_PURGE_INTERVAL);

    let port = config.port;
    let state = state::AppState::new(pool, config);
    let app = routes::leptos_app(state).expect("failed to build app");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "classtrack listening");
    axum::serve(listener, app).await.expect("server failed");
}
