//! Pixelarte Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing the router to be exercised by integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router with the session layer applied.
///
/// The binary wraps this with tracing and Sentry layers; tests drive it
/// directly via `tower::ServiceExt`.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer();

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .layer(session_layer)
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the catalog file is readable before returning OK.
/// Returns 503 Service Unavailable if it is missing and cannot be created,
/// or is corrupt.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.catalog().load().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
