//! Mode formatter HTTP API (Axum).
//!
//! Exposes both render entry points as JSON endpoints plus a health check.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;

/// Build the application router with a default formatter.
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::render_routes())
        .with_state(state)
}

#[cfg(test)]
mod tests;
