//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. API paths (`/token`, `/users/`, `/classes/`,
//! `/submissions/`, `/exports/*`, ...) never overlap the page paths the
//! client router owns (`/login`, `/dashboard`, `/admin/*`, `/teacher/*`,
//! `/student/*`).

pub mod assignments;
pub mod auth;
pub mod classes;
pub mod error;
pub mod metrics;
pub mod submissions;
pub mod users;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes.
pub(crate) fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/token", post(auth::token))
        .route("/users/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/users/", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route("/classes/", get(classes::list_classes).post(classes::create_class))
        .route(
            "/classes/{id}",
            get(classes::get_class)
                .patch(classes::update_class)
                .delete(classes::delete_class),
        )
        .route("/assignments/", post(assignments::create_assignment))
        .route("/submissions/", post(submissions::create_submission))
        .route("/exports/users/all", get(users::list_users))
        .route("/exports/classes/all", get(classes::export_classes))
        .route("/metrics/users/count", get(metrics::user_count))
        .route("/metrics/classes/count", get(metrics::class_count))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes plus Leptos SSR pages and the compiled client assets under `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
